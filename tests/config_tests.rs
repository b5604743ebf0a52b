use std::env;

use gifdeck::system::AppConfig;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "text");
    assert!(config.logging.file.is_none());
    assert!(config.wallet.address.is_none());
    assert!(!config.wallet.trusted);
}

#[test]
fn test_parse_toml() {
    let content = r#"
        [logging]
        level = "debug"
        format = "json"

        [wallet]
        address = "hTDFjlnLtjkDKzATgp"
        trusted = true
    "#;

    let config: AppConfig = toml::from_str(content).expect("valid config");

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.wallet.address.as_deref(), Some("hTDFjlnLtjkDKzATgp"));
    assert!(config.wallet.trusted);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config: AppConfig = toml::from_str("[wallet]\naddress = \"ABC123\"\n").unwrap();

    assert_eq!(config.wallet.address.as_deref(), Some("ABC123"));
    assert!(!config.wallet.trusted);
    assert_eq!(config.logging.level, "info");
}

// Environment mutation is process-global, so every override case lives in
// one test function.
#[test]
fn test_env_overrides() {
    unsafe {
        env::set_var("LOG_LEVEL", "trace");
        env::set_var("WALLET_ADDRESS", "ENVKEY999");
        env::set_var("WALLET_TRUSTED", "true");
    }

    let mut config = AppConfig::default();
    config.override_with_env();

    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.wallet.address.as_deref(), Some("ENVKEY999"));
    assert!(config.wallet.trusted);

    // An empty address env var does not count as an injected provider
    unsafe {
        env::set_var("WALLET_ADDRESS", "");
        env::set_var("WALLET_TRUSTED", "0");
    }
    let mut config = AppConfig::default();
    config.override_with_env();
    assert!(config.wallet.address.is_none());
    assert!(!config.wallet.trusted);

    unsafe {
        env::remove_var("LOG_LEVEL");
        env::remove_var("WALLET_ADDRESS");
        env::remove_var("WALLET_TRUSTED");
    }
}
