//! # Data Transfer Objects (DTOs)
//!
//! Structures handed to the injected wallet provider (EIP-1193) and the
//! static contract description they are built from.
//!
//! ## Module Organization
//!
//! - [`contract`] - Contract address, ABI parsing, function selectors
//! - [`chain`] - Chain descriptor resolved from `eth_chainId`
//! - [`transaction`] - Call / transaction request objects
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, as JSON-RPC expects
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Quantities**: `0x`-prefixed hex strings (see [`crate::units::to_quantity`])
//!
//! ## Example JSON Communication
//!
//! ```text
//! window.ethereum.request({
//!   method: "eth_sendTransaction",
//!   params: [{
//!     "from": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
//!     "to": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
//!     "data": "0xb60d4288",
//!     "value": "0x16345785d8a0000",
//!     "chainId": "0x7a69"
//!   }]
//! })
//! ```

pub mod chain;
pub mod contract;
pub mod transaction;

pub use chain::*;
pub use contract::*;
pub use transaction::*;
