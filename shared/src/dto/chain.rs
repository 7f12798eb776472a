use serde::{Deserialize, Serialize};

use crate::units::{to_quantity, ETHER_DECIMALS};

/// RPC endpoint advertised for chains the page does not know by name
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Native currency of a chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

impl NativeCurrency {
    pub fn ether() -> Self {
        Self {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: ETHER_DECIMALS,
        }
    }
}

/// Chain the wallet is currently on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: u64,
    pub name: String,
    pub native_currency: NativeCurrency,
    pub rpc_url: String,
}

impl Chain {
    /// Descriptor for whatever chain id the wallet reports: ether-denominated,
    /// pointing at a local node.
    pub fn custom(id: u64) -> Self {
        Self {
            id,
            name: "Custom Chain".to_string(),
            native_currency: NativeCurrency::ether(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
        }
    }

    /// Chain id as a JSON-RPC quantity (`31337` -> `"0x7a69"`)
    pub fn hex_id(&self) -> String {
        to_quantity(u128::from(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_chain() {
        let chain = Chain::custom(31337);
        assert_eq!(chain.name, "Custom Chain");
        assert_eq!(chain.native_currency.symbol, "ETH");
        assert_eq!(chain.native_currency.decimals, 18);
        assert_eq!(chain.rpc_url, "http://localhost:8545");
        assert_eq!(chain.hex_id(), "0x7a69");
    }

    #[test]
    fn test_chain_serializes_camel_case() {
        let json = serde_json::to_value(Chain::custom(1)).unwrap();
        assert_eq!(json["nativeCurrency"]["name"], "Ether");
        assert_eq!(json["rpcUrl"], "http://localhost:8545");
    }
}
