//! Wallet provider bindings and the actions built on them

pub mod provider;
pub mod wallet;

pub use provider::{EthereumProvider, InjectedProvider};
pub use wallet::{notice_for, perform, Outcome, WalletAction, WalletError};
