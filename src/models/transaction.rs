use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

/// Payload de `eth_sendTransaction`
/// `to = None` despliega un contrato nuevo con `data` como bytecode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    pub data: Bytes,
}

/// Resultado de `eth_getTransactionReceipt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    /// "0x1" éxito, "0x0" revertida (ausente en cadenas pre-Byzantium)
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contract_address: Option<Address>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        !matches!(self.status.as_deref(), Some("0x0") | Some("0x00"))
    }
}
