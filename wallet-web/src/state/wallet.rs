//! Wallet state management

use leptos::prelude::*;

use crate::services::wallet::{Outcome, WalletAction, WalletError};
use crate::utils::constants::{
    LABEL_CONNECT, LABEL_CONNECTED, LABEL_CONNECTING, LABEL_INSTALL_WALLET,
};

/// Wallet connection state as far as the page knows it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    /// No injected provider was found on the last attempt
    Unavailable,
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// Text of the connect button
    pub fn button_label(&self) -> &'static str {
        match self {
            WalletState::Disconnected => LABEL_CONNECT,
            WalletState::Connecting => LABEL_CONNECTING,
            WalletState::Connected { .. } => LABEL_CONNECTED,
            WalletState::Unavailable => LABEL_INSTALL_WALLET,
        }
    }

    /// State to show while `action` is in flight; `None` leaves it as is.
    ///
    /// An already connected wallet stays connected while it is asked again.
    pub fn pending(&self, action: WalletAction) -> Option<WalletState> {
        match (action, self) {
            (WalletAction::Connect, WalletState::Connected { .. }) => None,
            (WalletAction::Connect, _) => Some(WalletState::Connecting),
            _ => None,
        }
    }

    /// State after `action` finished with `result`; `None` leaves it as is.
    ///
    /// Reading the balance without a provider changes nothing, and a failed
    /// reconnect keeps the account that is already authorized.
    pub fn after(&self, action: WalletAction, result: &Result<Outcome, WalletError>) -> Option<WalletState> {
        match (action, result) {
            (_, Ok(Outcome::Connected(address))) => Some(WalletState::Connected {
                address: address.clone(),
            }),
            (WalletAction::Balance, Err(WalletError::ProviderUnavailable)) => None,
            (_, Err(WalletError::ProviderUnavailable)) => Some(WalletState::Unavailable),
            (WalletAction::Connect, Err(_)) if self.is_connected() => None,
            (WalletAction::Connect, Err(_)) => Some(WalletState::Disconnected),
            _ => None,
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn button_label(&self) -> &'static str {
        self.wallet.with(|state| state.button_label())
    }

    /// Mark `action` as started
    pub fn begin(&self, action: WalletAction) {
        if let Some(state) = self.wallet.with_untracked(|state| state.pending(action)) {
            self.wallet.set(state);
        }
    }

    /// Record how `action` ended
    pub fn apply(&self, action: WalletAction, result: &Result<Outcome, WalletError>) {
        if let Some(state) = self.wallet.with_untracked(|state| state.after(action, result)) {
            self.wallet.set(state);
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_labels() {
        assert_eq!(WalletState::Disconnected.button_label(), "Connect");
        assert_eq!(WalletState::Unavailable.button_label(), "Please install MetaMask");
        let connected = WalletState::Connected {
            address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
        };
        assert_eq!(connected.button_label(), "Connected");
        assert!(connected.is_connected());
        assert_eq!(connected.address(), Some("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
    }

    #[test]
    fn test_not_connected_has_no_address() {
        for state in [WalletState::Disconnected, WalletState::Connecting, WalletState::Unavailable] {
            assert!(!state.is_connected());
            assert_eq!(state.address(), None);
        }
    }

    const ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn connected() -> WalletState {
        WalletState::Connected {
            address: ACCOUNT.to_string(),
        }
    }

    #[test]
    fn test_connect_results() {
        let ok = Ok(Outcome::Connected(ACCOUNT.to_string()));
        assert_eq!(WalletState::Connecting.after(WalletAction::Connect, &ok), Some(connected()));

        let rejected = Err(WalletError::Rpc("User rejected the request.".to_string()));
        assert_eq!(
            WalletState::Connecting.after(WalletAction::Connect, &rejected),
            Some(WalletState::Disconnected)
        );
    }

    #[test]
    fn test_reconnect_keeps_connected_wallet() {
        assert_eq!(connected().pending(WalletAction::Connect), None);
        assert_eq!(
            WalletState::Disconnected.pending(WalletAction::Connect),
            Some(WalletState::Connecting)
        );
        assert_eq!(WalletState::Disconnected.pending(WalletAction::Fund), None);

        let rejected = Err(WalletError::Rpc("User rejected the request.".to_string()));
        assert_eq!(connected().after(WalletAction::Connect, &rejected), None);
    }

    #[test]
    fn test_missing_provider_marks_unavailable_for_transactions() {
        for action in [WalletAction::Connect, WalletAction::Fund, WalletAction::Withdraw] {
            assert_eq!(
                WalletState::Disconnected.after(action, &Err(WalletError::ProviderUnavailable)),
                Some(WalletState::Unavailable)
            );
        }
    }

    #[test]
    fn test_balance_without_provider_changes_nothing() {
        for state in [WalletState::Disconnected, connected()] {
            assert_eq!(
                state.after(WalletAction::Balance, &Err(WalletError::ProviderUnavailable)),
                None
            );
        }
    }

    #[test]
    fn test_other_results_keep_state() {
        let state = connected();
        let sent = Ok(Outcome::Submitted("0x01".to_string()));
        assert_eq!(state.after(WalletAction::Fund, &sent), None);
        assert_eq!(state.after(WalletAction::Fund, &Err(WalletError::MissingAmount)), None);
        let reverted = Err(WalletError::Rpc("execution reverted".to_string()));
        assert_eq!(state.after(WalletAction::Withdraw, &reverted), None);
        assert_eq!(state.after(WalletAction::Balance, &Ok(Outcome::Balance(0))), None);
    }
}
