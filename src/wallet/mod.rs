//! Wallet provider abstraction and connection session
//!
//! The wallet extension is modeled as an injected capability behind the
//! [`WalletProvider`] trait. `ProviderFactory` materializes the concrete
//! provider from configuration; `None` means no provider is injected.

mod config_provider;
mod session;

pub use config_provider::ConfigWalletProvider;
pub use session::{ConnectionState, WalletSession};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::system::app_config::WalletConfig;

/// Display form of a wallet public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new<T: Into<String>>(key: T) -> Self {
        WalletAddress(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for status lines, e.g. `hTDFjl..zATgp`
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > 12 {
            let head: String = chars[..6].iter().collect();
            let tail: String = chars[chars.len() - 5..].iter().collect();
            format!("{}..{}", head, tail)
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed failure for connect operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFailure {
    /// No wallet provider is injected
    NotFound,
    /// The provider refused the connect request
    Declined,
}

impl fmt::Display for ConnectFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectFailure::NotFound => write!(f, "wallet provider not found"),
            ConnectFailure::Declined => write!(f, "wallet provider declined the request"),
        }
    }
}

/// Wallet provider capability
///
/// Mirrors the two connect operations a wallet extension exposes.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Passive connect: succeeds only if this client is already trusted.
    /// Never prompts the user.
    async fn try_passive_connect(&self) -> Result<WalletAddress, ConnectFailure>;

    /// Interactive connect: may prompt the user for authorization.
    async fn connect(&self) -> Result<WalletAddress, ConnectFailure>;
}

/// Detects and constructs the injected wallet provider
pub struct ProviderFactory;

impl ProviderFactory {
    /// Detect the injected provider, if any
    ///
    /// An unset wallet address means no provider is available, the same
    /// way a missing browser extension leaves the global object undefined.
    pub fn detect(config: &WalletConfig) -> Option<Arc<dyn WalletProvider>> {
        config.address.as_ref().map(|address| {
            Arc::new(ConfigWalletProvider::new(address.clone(), config.trusted))
                as Arc<dyn WalletProvider>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_detects_configured_provider() {
        let config = WalletConfig {
            address: Some("ABC123".to_string()),
            trusted: false,
        };
        assert!(ProviderFactory::detect(&config).is_some());

        let config = WalletConfig::default();
        assert!(ProviderFactory::detect(&config).is_none());
    }

    #[test]
    fn test_wallet_address_short_form() {
        let address = WalletAddress::new("hTDFjlnLtjkDKzATgp");
        assert_eq!(address.short(), "hTDFjl..zATgp");

        let address = WalletAddress::new("ABC123");
        assert_eq!(address.short(), "ABC123");
    }

    #[test]
    fn test_wallet_address_short_form_multibyte() {
        // 13 chars, all multibyte; byte indexing would split a character
        let address = WalletAddress::new("ééééééééééééé");
        assert_eq!(address.short(), "éééééé..ééééé");
    }
}
