//! Wallet connection session
//!
//! Holds the connection state machine. The only transition is
//! `Disconnected -> Connected`; there is no disconnect path within one
//! process lifetime.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{GifdeckError, Result};

use super::{WalletAddress, WalletProvider};

/// 连接状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    address: Option<WalletAddress>,
    state: ConnectionState,
    // Set on the Disconnected -> Connected transition, consumed by
    // take_connected_transition. Redundant address updates do not re-arm it.
    pending_transition: bool,
}

impl WalletSession {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            address: None,
            state: ConnectionState::Disconnected,
            pending_transition: false,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn address(&self) -> Option<&WalletAddress> {
        self.address.as_ref()
    }

    /// Probe for a pre-authorized connection
    ///
    /// Scheduled once at startup. No provider returns an error the caller
    /// is expected to surface to the user; a declined passive connect is
    /// swallowed and the session simply stays disconnected.
    pub async fn probe_existing_connection(&mut self) -> Result<()> {
        let Some(provider) = self.provider.clone() else {
            warn!("No wallet provider found");
            return Err(GifdeckError::wallet_connect(
                "Wallet provider not found! Configure a wallet to connect",
            ));
        };

        info!("Wallet provider found");
        match provider.try_passive_connect().await {
            Ok(address) => {
                info!("Connected with public key: {}", address);
                self.store_address(address);
            }
            Err(failure) => {
                debug!("Passive connect did not resolve: {}", failure);
            }
        }
        Ok(())
    }

    /// Request an interactive connection
    ///
    /// User-triggered and repeatable; each invocation is independent and
    /// the last resolved call wins. With no provider this silently no-ops,
    /// unlike the probe path, which warns. Both contracts are kept as the
    /// original defined them.
    pub async fn request_connection(&mut self) {
        let Some(provider) = self.provider.clone() else {
            debug!("Connect requested without a provider, ignoring");
            return;
        };

        match provider.connect().await {
            Ok(address) => {
                info!("Connected with public key: {}", address);
                self.store_address(address);
            }
            Err(failure) => {
                debug!("Interactive connect did not resolve: {}", failure);
            }
        }
    }

    /// Consume the pending `Disconnected -> Connected` transition
    ///
    /// Returns true exactly once per transition, so reactions to it (such
    /// as seeding the gallery) cannot fire twice.
    pub fn take_connected_transition(&mut self) -> bool {
        std::mem::take(&mut self.pending_transition)
    }

    fn store_address(&mut self, address: WalletAddress) {
        self.address = Some(address);
        if self.state == ConnectionState::Disconnected {
            self.state = ConnectionState::Connected;
            self.pending_transition = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = WalletSession::new(None);
        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert!(session.address().is_none());
    }

    #[test]
    fn test_store_address_transitions_once() {
        let mut session = WalletSession::new(None);

        session.store_address(WalletAddress::new("ABC123"));
        assert_eq!(session.state(), ConnectionState::Connected);
        assert!(session.take_connected_transition());
        assert!(!session.take_connected_transition());

        // A later successful connect overwrites the address but must not
        // re-arm the transition.
        session.store_address(WalletAddress::new("DEF456"));
        assert_eq!(session.address().unwrap().as_str(), "DEF456");
        assert!(!session.take_connected_transition());
    }

    #[tokio::test]
    async fn test_probe_without_provider_warns_and_stays_disconnected() {
        let mut session = WalletSession::new(None);
        let result = session.probe_existing_connection().await;

        assert!(result.is_err());
        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert!(session.address().is_none());
    }

    #[tokio::test]
    async fn test_request_without_provider_is_silent() {
        let mut session = WalletSession::new(None);
        session.request_connection().await;

        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert!(!session.take_connected_transition());
    }
}
