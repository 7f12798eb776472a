//! Injected Wallet Provider (EIP-1193) via wasm-bindgen
//!
//! The page talks to whatever wallet extension injected `window.ethereum`
//! (MetaMask, Rabby, Frame, ...). Every operation is a single
//! `request({ method, params })` round trip; the [`EthereumProvider`] trait
//! names the five the page needs so the wallet actions can be exercised
//! against a mock outside the browser.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::transaction::TransactionRequest;
use shared::units::parse_quantity;
use wasm_bindgen::prelude::*;

use crate::services::wallet::WalletError;

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasInjectedProvider() {
    return typeof window !== 'undefined'
        && typeof window.ethereum !== 'undefined'
        && window.ethereum !== null;
}

export async function providerRequest(method, params) {
    if (!hasInjectedProvider()) {
        throw new Error('No injected Ethereum provider found');
    }
    return await window.ethereum.request({ method: method, params: params });
}
")]
extern "C" {
    /// Whether `window.ethereum` exists
    #[wasm_bindgen(js_name = hasInjectedProvider)]
    fn has_injected_provider() -> bool;

    /// `window.ethereum.request({ method, params })`
    #[wasm_bindgen(js_name = providerRequest, catch)]
    async fn provider_request(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

/// Best-effort human readable text of a thrown JS value.
///
/// Wallets reject with `Error` instances or plain `{ code, message }`
/// objects; both carry `message`.
pub fn js_error_message(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(error, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{:?}", error)
}

// ============================================================================
// PROVIDER ABSTRACTION
// ============================================================================

/// The JSON-RPC surface the wallet actions rely on.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait EthereumProvider {
    /// `eth_requestAccounts`, prompting the user if the site is not yet authorized
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// `eth_chainId`
    async fn chain_id(&self) -> Result<u64, WalletError>;

    /// `eth_call` against the latest block; returns the raw return data
    async fn call(&self, request: &TransactionRequest) -> Result<String, WalletError>;

    /// `eth_sendTransaction`; returns the transaction hash
    async fn send_transaction(&self, request: &TransactionRequest) -> Result<String, WalletError>;

    /// `eth_getBalance` at the latest block, in wei
    async fn get_balance(&self, address: &str) -> Result<u128, WalletError>;
}

/// Handle on the browser's `window.ethereum`.
///
/// Holds no state: a fresh handle is detected for every user action.
#[derive(Clone, Copy, Debug)]
pub struct InjectedProvider {
    _private: (),
}

impl InjectedProvider {
    /// `Some` when a wallet extension injected a provider into the page
    pub fn detect() -> Option<Self> {
        has_injected_provider().then_some(Self { _private: () })
    }

    async fn request<P, T>(&self, method: &str, params: &P) -> Result<T, WalletError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("[WALLET] -> {}", method);
        let params = serde_wasm_bindgen::to_value(params)
            .map_err(|e| WalletError::Decode(format!("{} params: {}", method, e)))?;

        let response = provider_request(method, params)
            .await
            .map_err(|e| WalletError::Rpc(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(response)
            .map_err(|e| WalletError::Decode(format!("{} response: {}", method, e)))
    }
}

impl EthereumProvider for InjectedProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request("eth_requestAccounts", &Vec::<String>::new()).await
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let hex: String = self.request("eth_chainId", &Vec::<String>::new()).await?;
        let id = parse_quantity(&hex).map_err(|e| WalletError::Decode(e.to_string()))?;
        u64::try_from(id).map_err(|_| WalletError::Decode(format!("chain id {} out of range", hex)))
    }

    async fn call(&self, request: &TransactionRequest) -> Result<String, WalletError> {
        self.request("eth_call", &(request, "latest")).await
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<String, WalletError> {
        self.request("eth_sendTransaction", &[request]).await
    }

    async fn get_balance(&self, address: &str) -> Result<u128, WalletError> {
        let hex: String = self.request("eth_getBalance", &(address, "latest")).await?;
        parse_quantity(&hex).map_err(|e| WalletError::Decode(e.to_string()))
    }
}
