//! Wallet Actions
//!
//! The four things a visitor can do from the page: connect, fund, withdraw
//! and read the contract balance. Each action is one independent attempt:
//! no retries, no timeouts, no de-duplication of overlapping clicks. Results
//! come back as values; [`notice_for`] turns them into the text shown to the
//! user.

use shared::dto::chain::Chain;
use shared::dto::contract::{AbiError, Contract, FUND, WITHDRAW};
use shared::dto::transaction::TransactionRequest;
use shared::units::{format_ether, parse_ether, UnitsError};
use thiserror::Error;

use crate::services::provider::EthereumProvider;
use crate::utils::constants::{
    BALANCE_FAILED, CONNECT_SUCCESS, MISSING_AMOUNT, PROVIDER_UNAVAILABLE,
};

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("{}", PROVIDER_UNAVAILABLE)]
    ProviderUnavailable,

    #[error("{}", MISSING_AMOUNT)]
    MissingAmount,

    #[error("Invalid ETH amount: {0}")]
    InvalidAmount(UnitsError),

    #[error("The wallet did not return any account")]
    NoAccount,

    #[error(transparent)]
    Abi(#[from] AbiError),

    /// Message of the provider's rejection, passed through untouched
    #[error("{0}")]
    Rpc(String),

    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletAction {
    Connect,
    Fund,
    Withdraw,
    Balance,
}

impl WalletAction {
    pub fn name(&self) -> &'static str {
        match self {
            WalletAction::Connect => "connect",
            WalletAction::Fund => "fund",
            WalletAction::Withdraw => "withdraw",
            WalletAction::Balance => "balance",
        }
    }
}

/// Successful result of a wallet action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Account the wallet authorized
    Connected(String),
    /// Hash of the submitted transaction, exactly as the wallet returned it
    Submitted(String),
    /// Contract balance in wei
    Balance(u128),
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Ask the wallet for account access.
pub async fn connect<P: EthereumProvider>(provider: Option<&P>) -> Result<Outcome, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderUnavailable)?;
    let account = primary_account(provider).await?;
    log::info!("[WALLET] Connected account {}", account);
    Ok(Outcome::Connected(account))
}

/// Send `amount` ether to the contract's `fund` entry point.
///
/// The amount is validated before the provider is touched.
pub async fn fund<P: EthereumProvider>(
    provider: Option<&P>,
    contract: &Contract,
    amount: &str,
) -> Result<Outcome, WalletError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(WalletError::MissingAmount);
    }
    let value = parse_ether(amount).map_err(WalletError::InvalidAmount)?;

    let provider = provider.ok_or(WalletError::ProviderUnavailable)?;
    log::info!("[WALLET] Initiating fund of {} ETH...", amount);
    submit(provider, contract, FUND, Some(value)).await
}

/// Call the contract's `withdraw` entry point.
///
/// Only the contract owner may withdraw; that is enforced on chain and the
/// revert reason comes back through [`WalletError::Rpc`].
pub async fn withdraw<P: EthereumProvider>(
    provider: Option<&P>,
    contract: &Contract,
) -> Result<Outcome, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderUnavailable)?;
    log::info!("[WALLET] Initiating withdraw...");
    submit(provider, contract, WITHDRAW, None).await
}

/// Native balance held by the contract.
pub async fn get_balance<P: EthereumProvider>(
    provider: Option<&P>,
    contract: &Contract,
) -> Result<Outcome, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderUnavailable)?;
    let wei = provider.get_balance(&contract.address).await?;
    log::info!("[WALLET] Contract balance: {} ETH", format_ether(wei));
    Ok(Outcome::Balance(wei))
}

/// Run `action`; `amount` is only read by [`WalletAction::Fund`].
pub async fn perform<P: EthereumProvider>(
    action: WalletAction,
    provider: Option<&P>,
    contract: &Contract,
    amount: &str,
) -> Result<Outcome, WalletError> {
    match action {
        WalletAction::Connect => connect(provider).await,
        WalletAction::Fund => fund(provider, contract, amount).await,
        WalletAction::Withdraw => withdraw(provider, contract).await,
        WalletAction::Balance => get_balance(provider, contract).await,
    }
}

/// Chain the wallet is currently on
pub async fn current_chain<P: EthereumProvider>(provider: &P) -> Result<Chain, WalletError> {
    Ok(Chain::custom(provider.chain_id().await?))
}

/// Dry-run `function` from `account`; on success the returned request is
/// pinned to `chain` and ready for submission.
pub async fn simulate_contract<P: EthereumProvider>(
    provider: &P,
    contract: &Contract,
    function: &str,
    account: &str,
    chain: &Chain,
    value: Option<u128>,
) -> Result<TransactionRequest, WalletError> {
    let request = TransactionRequest::contract_call(contract, function, account, value)?;
    let result = provider.call(&request).await?;
    log::debug!("[WALLET] Simulated {} on chain {}: {}", function, chain.id, result);

    Ok(request.on_chain(chain))
}

async fn primary_account<P: EthereumProvider>(provider: &P) -> Result<String, WalletError> {
    provider
        .request_accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(WalletError::NoAccount)
}

async fn submit<P: EthereumProvider>(
    provider: &P,
    contract: &Contract,
    function: &str,
    value: Option<u128>,
) -> Result<Outcome, WalletError> {
    let account = primary_account(provider).await?;
    let chain = current_chain(provider).await?;
    let request = simulate_contract(provider, contract, function, &account, &chain, value).await?;

    let hash = provider.send_transaction(&request).await?;
    log::info!("[WALLET] {} transaction sent: {}", function, hash);
    Ok(Outcome::Submitted(hash))
}

// ============================================================================
// USER-FACING TEXT
// ============================================================================

/// Alert text for the result of `action`, if any.
///
/// A missing provider only produces text for [`WalletAction::Connect`]; fund
/// and withdraw just flip the connect button label, balance does nothing.
pub fn notice_for(action: WalletAction, result: &Result<Outcome, WalletError>) -> Option<String> {
    match (action, result) {
        (_, Ok(Outcome::Connected(_))) => Some(CONNECT_SUCCESS.to_string()),
        (WalletAction::Withdraw, Ok(Outcome::Submitted(hash))) => {
            Some(format!("Withdraw transaction sent! Hash: {}", hash))
        }
        (WalletAction::Fund, Ok(Outcome::Submitted(hash))) => {
            Some(format!("Fund transaction sent! Hash: {}", hash))
        }
        // Connect and balance never submit
        (_, Ok(Outcome::Submitted(_))) => None,
        (_, Ok(Outcome::Balance(wei))) => {
            Some(format!("Contract Balance: {} ETH", format_ether(*wei)))
        }

        (WalletAction::Connect, Err(WalletError::ProviderUnavailable)) => {
            Some(PROVIDER_UNAVAILABLE.to_string())
        }
        (_, Err(WalletError::ProviderUnavailable)) => None,
        (_, Err(err @ (WalletError::MissingAmount | WalletError::InvalidAmount(_)))) => {
            Some(err.to_string())
        }
        (WalletAction::Connect, Err(err)) => Some(format!("Wallet connection failed: {}", err)),
        (WalletAction::Fund, Err(err)) => Some(format!("Funding failed: {}", err)),
        (WalletAction::Withdraw, Err(err)) => Some(format!("Withdraw failed: {}", err)),
        (WalletAction::Balance, Err(_)) => Some(BALANCE_FAILED.to_string()),
    }
}
