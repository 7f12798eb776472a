use serde::{Deserialize, Serialize};

use super::chain::Chain;
use super::contract::{AbiError, Contract};
use crate::units::to_quantity;

/// Parameters of `eth_call` and `eth_sendTransaction`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
}

impl TransactionRequest {
    /// Call `function` on `contract` from `account`, optionally attaching `value` wei.
    pub fn contract_call(
        contract: &Contract,
        function: &str,
        account: &str,
        value: Option<u128>,
    ) -> Result<Self, AbiError> {
        let data = contract.abi.encode_call(function, value.is_some())?;
        Ok(Self {
            from: account.to_string(),
            to: contract.address.clone(),
            data,
            value: value.map(to_quantity),
            chain_id: None,
        })
    }

    /// Pin the request to `chain` so the wallet refuses to sign elsewhere.
    pub fn on_chain(mut self, chain: &Chain) -> Self {
        self.chain_id = Some(chain.hex_id());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::contract::{FUND, WITHDRAW};

    const ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_fund_request() {
        let contract = Contract::coffee().unwrap();
        let request =
            TransactionRequest::contract_call(&contract, FUND, ACCOUNT, Some(10_000_000_000_000_000))
                .unwrap();

        assert_eq!(request.from, ACCOUNT);
        assert_eq!(request.to, contract.address);
        assert_eq!(request.data, "0xb60d4288");
        assert_eq!(request.value.as_deref(), Some("0x2386f26fc10000"));
        assert_eq!(request.chain_id, None);
    }

    #[test]
    fn test_withdraw_request_on_chain() {
        let contract = Contract::coffee().unwrap();
        let request = TransactionRequest::contract_call(&contract, WITHDRAW, ACCOUNT, None)
            .unwrap()
            .on_chain(&Chain::custom(31337));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["data"], "0x3ccfd60b");
        assert_eq!(json["chainId"], "0x7a69");
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_value_on_nonpayable_rejected() {
        let contract = Contract::coffee().unwrap();
        let result = TransactionRequest::contract_call(&contract, WITHDRAW, ACCOUNT, Some(1));
        assert!(matches!(result, Err(AbiError::NotPayable(_))));
    }
}
