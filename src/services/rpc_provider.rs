// ============================================================================
// RPC PROVIDER - JSON-RPC 2.0 por HTTP contra un nodo de desarrollo
// ============================================================================
// Para el script de despliegue (nativo). El nodo (Hardhat/Anvil) tiene las
// cuentas desbloqueadas, así que `eth_sendTransaction` firma en el nodo.
// Las llamadas HTTP son bloqueantes: el script corre una sola tarea.
// ============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::wallet_provider::{rpc_error, WalletError, WalletProvider};

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl RpcResponse {
    fn into_result(self) -> Result<Value, WalletError> {
        match self.error {
            Some(error) => Err(rpc_error(&error)),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// Cliente JSON-RPC stateless (solo el contador de ids)
pub struct RpcProvider {
    url: String,
    next_id: AtomicU64,
}

impl RpcProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WalletProvider for RpcProvider {
    fn is_available(&self) -> bool {
        true
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        log::debug!("🌐 [RPC] {} -> {}", method, self.url);

        let response = attohttpc::post(&self.url)
            .json(&body)
            .map_err(|e| WalletError::Transport(format!("Serialization error: {}", e)))?
            .send()
            .map_err(|e| WalletError::Transport(format!("Network error: {}", e)))?;

        if !response.is_success() {
            return Err(WalletError::Transport(format!("HTTP {}", response.status())));
        }

        response
            .json::<RpcResponse>()
            .map_err(|e| WalletError::Decode(e.to_string()))?
            .into_result()
    }

    async fn sleep(&self, millis: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(millis)));
    }
}
