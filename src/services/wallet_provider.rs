// ============================================================================
// WALLET PROVIDER - Capacidad inyectable para hablar con la wallet (EIP-1193)
// ============================================================================
// Las implementaciones solo transportan JSON-RPC: navegador (window.ethereum),
// nodo de desarrollo por HTTP (script de despliegue) y fakes en tests.
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::{AbiError, TransactionReceipt, TransactionRequest};

/// Código EIP-1193 cuando el usuario rechaza la petición
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WalletError {
    #[error("no wallet provider available")]
    ProviderMissing,
    #[error("provider error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("could not decode provider response: {0}")]
    Decode(String),
    #[error("wallet returned no accounts")]
    NoAccounts,
    #[error("transaction {hash} reverted")]
    Reverted { hash: String },
    #[error("receipt of deployment {hash} has no contract address")]
    MissingContractAddress { hash: String },
    #[error(transparent)]
    Abi(#[from] AbiError),
}

impl WalletError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::Rpc { code, .. } if *code == USER_REJECTED_CODE)
    }
}

/// Proveedor de wallet: un transporte `request(method, params)` más
/// los métodos de alto nivel que usa la app, definidos encima de él.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// `false` cuando no hay wallet (p.ej. sin extensión instalada)
    fn is_available(&self) -> bool;

    /// Petición JSON-RPC cruda
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError>;

    /// Espera entre consultas de receipt
    async fn sleep(&self, millis: u32);

    /// `eth_accounts` - cuentas ya autorizadas, sin prompt
    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        let value = self.request("eth_accounts", json!([])).await?;
        decode(value)
    }

    /// `eth_requestAccounts` - dispara el prompt de permisos
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let value = self.request("eth_requestAccounts", json!([])).await?;
        decode(value)
    }

    /// `eth_chainId`
    async fn chain_id(&self) -> Result<String, WalletError> {
        let value = self.request("eth_chainId", json!([])).await?;
        decode(value)
    }

    /// `eth_sendTransaction` - devuelve el hash
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, WalletError> {
        let tx = serde_json::to_value(tx).map_err(|e| WalletError::Decode(e.to_string()))?;
        let value = self.request("eth_sendTransaction", json!([tx])).await?;
        decode(value)
    }

    /// `eth_getTransactionReceipt` - `None` mientras no esté minada
    async fn transaction_receipt(&self, hash: &str) -> Result<Option<TransactionReceipt>, WalletError> {
        let value = self.request("eth_getTransactionReceipt", json!([hash])).await?;
        decode(value)
    }

    /// Consultar el receipt hasta que exista. Sin timeout.
    async fn wait_for_transaction(
        &self,
        hash: &str,
        poll_interval_ms: u32,
    ) -> Result<TransactionReceipt, WalletError> {
        loop {
            if let Some(receipt) = self.transaction_receipt(hash).await? {
                return Ok(receipt);
            }
            log::debug!("⏳ [TX] {} pendiente, reintentando en {}ms", hash, poll_interval_ms);
            self.sleep(poll_interval_ms).await;
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, WalletError> {
    serde_json::from_value(value).map_err(|e| WalletError::Decode(e.to_string()))
}

/// Convierte un objeto de error JSON-RPC (`{code, message}`) en `WalletError`
pub fn rpc_error(error: &Value) -> WalletError {
    let code = error.get("code").and_then(Value::as_i64).unwrap_or(-32603);
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown provider error")
        .to_string();
    WalletError::Rpc { code, message }
}
