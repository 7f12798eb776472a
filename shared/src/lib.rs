//! # Shared Contract Library
//!
//! Host-testable building blocks for the Coffee Fund page. Nothing in here
//! touches the browser: the wallet-web crate feeds these types to the injected
//! provider through `serde-wasm-bindgen`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Objects exchanged with the injected provider
//!   - **[`dto::contract`]**: Contract address, ABI and function selectors
//!   - **[`dto::chain`]**: Chain descriptor built from the wallet's chain id
//!   - **[`dto::transaction`]**: `eth_call` / `eth_sendTransaction` requests
//! - **[`units`]**: Ether <-> wei conversion and hex quantities
//! - **[`utils`]**: Address formatting for display
//!
//! ## Wire Format
//!
//! Provider-facing DTOs serialize with **camelCase** field names, matching the
//! JSON-RPC shapes wallets expect (`chainId`, `stateMutability`, ...). Optional
//! fields are omitted when `None`.
//!
//! ```rust
//! use shared::dto::contract::Contract;
//! use shared::dto::transaction::TransactionRequest;
//! use shared::units::parse_ether;
//!
//! let contract = Contract::coffee().unwrap();
//! let value = parse_ether("0.1").unwrap();
//! let request = TransactionRequest::contract_call(
//!     &contract,
//!     "fund",
//!     "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
//!     Some(value),
//! )
//! .unwrap();
//!
//! assert_eq!(request.data, "0xb60d4288");
//! assert_eq!(request.value.as_deref(), Some("0x16345785d8a0000"));
//! ```

pub mod dto;
pub mod units;
pub mod utils;

pub use dto::*;
pub use units::{format_ether, parse_ether, UnitsError};
pub use utils::*;
