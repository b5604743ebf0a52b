use tracing::info;

use gifdeck::interfaces::tui;
use gifdeck::system::{get_config, init_logging, install_panic_hook};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = get_config();
    let _log_guard = init_logging(config);
    install_panic_hook();

    info!("Starting GifDeck v{}", env!("CARGO_PKG_VERSION"));

    tui::run_tui().await
}
