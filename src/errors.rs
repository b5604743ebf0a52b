use std::fmt;

pub type Result<T> = std::result::Result<T, GifdeckError>;

#[derive(Debug, Clone)]
pub enum GifdeckError {
    ConfigParse(String),
    WalletConnect(String),
    Terminal(String),
}

impl GifdeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GifdeckError::ConfigParse(_) => "E001",
            GifdeckError::WalletConnect(_) => "E002",
            GifdeckError::Terminal(_) => "E003",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GifdeckError::ConfigParse(_) => "Config Parse Error",
            GifdeckError::WalletConnect(_) => "Wallet Connect Error",
            GifdeckError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GifdeckError::ConfigParse(msg) => msg,
            GifdeckError::WalletConnect(msg) => msg,
            GifdeckError::Terminal(msg) => msg,
        }
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GifdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GifdeckError {}

// 便捷的构造函数
impl GifdeckError {
    pub fn config_parse<T: Into<String>>(msg: T) -> Self {
        GifdeckError::ConfigParse(msg.into())
    }

    pub fn wallet_connect<T: Into<String>>(msg: T) -> Self {
        GifdeckError::WalletConnect(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        GifdeckError::Terminal(msg.into())
    }
}

impl From<std::io::Error> for GifdeckError {
    fn from(err: std::io::Error) -> Self {
        GifdeckError::Terminal(err.to_string())
    }
}
