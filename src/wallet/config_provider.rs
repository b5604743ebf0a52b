//! Configuration-backed wallet provider
//!
//! Stands in for the injected wallet extension: the configured address is
//! the public key the provider resolves with, and the `trusted` flag marks
//! this client as previously authorized.

use async_trait::async_trait;
use tracing::debug;

use super::{ConnectFailure, WalletAddress, WalletProvider};

pub struct ConfigWalletProvider {
    address: String,
    trusted: bool,
}

impl ConfigWalletProvider {
    pub fn new(address: String, trusted: bool) -> Self {
        Self { address, trusted }
    }
}

#[async_trait]
impl WalletProvider for ConfigWalletProvider {
    async fn try_passive_connect(&self) -> Result<WalletAddress, ConnectFailure> {
        if self.trusted {
            debug!("Passive connect accepted for trusted client");
            Ok(WalletAddress::new(self.address.clone()))
        } else {
            debug!("Passive connect declined: client not trusted");
            Err(ConnectFailure::Declined)
        }
    }

    async fn connect(&self) -> Result<WalletAddress, ConnectFailure> {
        // Interactive connect always resolves here; a real extension would
        // prompt the user first.
        debug!("Interactive connect accepted");
        Ok(WalletAddress::new(self.address.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passive_connect_requires_trust() {
        let provider = ConfigWalletProvider::new("ABC123".to_string(), false);
        assert_eq!(
            provider.try_passive_connect().await,
            Err(ConnectFailure::Declined)
        );

        let provider = ConfigWalletProvider::new("ABC123".to_string(), true);
        assert_eq!(
            provider.try_passive_connect().await,
            Ok(WalletAddress::new("ABC123"))
        );
    }

    #[tokio::test]
    async fn test_interactive_connect_always_resolves() {
        let provider = ConfigWalletProvider::new("ABC123".to_string(), false);
        assert_eq!(provider.connect().await, Ok(WalletAddress::new("ABC123")));
    }
}
