//! Contract description: deployment address, ABI and function selectors.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Deployment address of the coffee contract.
///
/// First contract deployed by the default account of a fresh local anvil or
/// hardhat node.
pub const CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Entry point that accepts ether from any caller
pub const FUND: &str = "fund";

/// Entry point that sweeps the balance to the owner (reverts for anyone else)
pub const WITHDRAW: &str = "withdraw";

/// ABI of the coffee contract
pub const COFFEE_ABI: &str = r#"[
  {
    "type": "function",
    "name": "fund",
    "inputs": [],
    "outputs": [],
    "stateMutability": "payable"
  },
  {
    "type": "function",
    "name": "withdraw",
    "inputs": [],
    "outputs": [],
    "stateMutability": "nonpayable"
  }
]"#;

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("invalid ABI JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("function '{0}' is not in the contract ABI")]
    UnknownFunction(String),

    #[error("function '{0}' is not payable")]
    NotPayable(String),

    #[error("function '{0}' takes arguments, only zero-argument calls are supported")]
    UnsupportedInputs(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

/// A function input or output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
}

/// One ABI entry. Constructors, events and errors parse too, they are
/// skipped when resolving functions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
}

impl AbiEntry {
    /// Canonical signature, e.g. `fund()` or `transfer(address,uint256)`
    pub fn signature(&self) -> String {
        let inputs: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        format!("{}({})", self.name, inputs.join(","))
    }

    pub fn selector(&self) -> [u8; 4] {
        selector(&self.signature())
    }

    pub fn is_payable(&self) -> bool {
        self.state_mutability == Some(StateMutability::Payable)
    }
}

/// First four bytes of the Keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let mut hasher = Keccak256::new();
    hasher.update(signature.as_bytes());
    let hash = hasher.finalize();

    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractAbi {
    entries: Vec<AbiEntry>,
}

impl ContractAbi {
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    pub fn function(&self, name: &str) -> Result<&AbiEntry, AbiError> {
        self.entries
            .iter()
            .find(|entry| entry.kind == "function" && entry.name == name)
            .ok_or_else(|| AbiError::UnknownFunction(name.to_string()))
    }

    /// Hex calldata (`0x` + selector) for a zero-argument call.
    ///
    /// Rejects unknown functions, functions with inputs, and attaching
    /// value to a non-payable function.
    pub fn encode_call(&self, name: &str, with_value: bool) -> Result<String, AbiError> {
        let function = self.function(name)?;
        if !function.inputs.is_empty() {
            return Err(AbiError::UnsupportedInputs(name.to_string()));
        }
        if with_value && !function.is_payable() {
            return Err(AbiError::NotPayable(name.to_string()));
        }
        Ok(format!("0x{}", hex::encode(function.selector())))
    }
}

/// A deployed contract: where it lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub address: String,
    pub abi: ContractAbi,
}

impl Contract {
    pub fn new(address: impl Into<String>, abi: ContractAbi) -> Self {
        Self {
            address: address.into(),
            abi,
        }
    }

    /// The coffee contract at [`CONTRACT_ADDRESS`] with [`COFFEE_ABI`]
    pub fn coffee() -> Result<Self, AbiError> {
        Ok(Self::new(CONTRACT_ADDRESS, ContractAbi::from_json(COFFEE_ABI)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        assert_eq!(hex::encode(selector("fund()")), "b60d4288");
        assert_eq!(hex::encode(selector("withdraw()")), "3ccfd60b");
        assert_eq!(hex::encode(selector("transfer(address,uint256)")), "a9059cbb");
    }

    #[test]
    fn test_coffee_abi_parses() {
        let contract = Contract::coffee().unwrap();
        assert_eq!(contract.address, CONTRACT_ADDRESS);

        let fund = contract.abi.function(FUND).unwrap();
        assert!(fund.is_payable());
        assert_eq!(fund.signature(), "fund()");

        let withdraw = contract.abi.function(WITHDRAW).unwrap();
        assert!(!withdraw.is_payable());
    }

    #[test]
    fn test_encode_call() {
        let abi = ContractAbi::from_json(COFFEE_ABI).unwrap();
        assert_eq!(abi.encode_call(FUND, true).unwrap(), "0xb60d4288");
        assert_eq!(abi.encode_call(WITHDRAW, false).unwrap(), "0x3ccfd60b");
    }

    #[test]
    fn test_encode_call_rejections() {
        let abi = ContractAbi::from_json(COFFEE_ABI).unwrap();
        assert!(matches!(abi.encode_call("steal", false), Err(AbiError::UnknownFunction(_))));
        assert!(matches!(abi.encode_call(WITHDRAW, true), Err(AbiError::NotPayable(_))));

        let with_args = ContractAbi::from_json(
            r#"[{"type":"function","name":"transfer","inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"}]"#,
        )
        .unwrap();
        assert_eq!(
            with_args.function("transfer").unwrap().signature(),
            "transfer(address,uint256)"
        );
        assert!(matches!(
            with_args.encode_call("transfer", false),
            Err(AbiError::UnsupportedInputs(_))
        ));
    }

    #[test]
    fn test_abi_skips_non_functions() {
        let abi = ContractAbi::from_json(
            r#"[
                {"type":"constructor","inputs":[{"name":"priceFeed","type":"address"}],"stateMutability":"nonpayable"},
                {"type":"receive","stateMutability":"payable"},
                {"type":"function","name":"fund","inputs":[],"outputs":[],"stateMutability":"payable"}
            ]"#,
        )
        .unwrap();
        assert!(abi.function("fund").is_ok());
        assert!(matches!(abi.function(""), Err(AbiError::UnknownFunction(_))));
    }

    #[test]
    fn test_invalid_abi_json() {
        assert!(matches!(ContractAbi::from_json("{not json"), Err(AbiError::Parse(_))));
    }
}
