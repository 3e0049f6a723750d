// ============================================================================
// ETHEREUM PROVIDER - window.ethereum (MetaMask y compatibles)
// ============================================================================
// Solo wrappers para la API EIP-1193 del navegador - Sin estado, sin lógica
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::wallet_provider::{WalletError, WalletProvider};

#[wasm_bindgen]
extern "C" {
    /// Objeto inyectado por la extensión de la wallet
    pub type Ethereum;

    #[wasm_bindgen(method, catch, js_name = request)]
    async fn eip1193_request(this: &Ethereum, args: &JsValue) -> Result<JsValue, JsValue>;
}

/// Proveedor del navegador. Se busca `window.ethereum` en cada llamada
/// porque la extensión puede inyectarlo después de cargar la página.
#[derive(Clone, Copy, Debug, Default)]
pub struct EthereumProvider;

impl EthereumProvider {
    pub fn new() -> Self {
        Self
    }

    fn ethereum() -> Option<Ethereum> {
        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .map(|value| value.unchecked_into::<Ethereum>())
    }
}

impl WalletProvider for EthereumProvider {
    fn is_available(&self) -> bool {
        Self::ethereum().is_some()
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let ethereum = Self::ethereum().ok_or(WalletError::ProviderMissing)?;

        let args = serde_json::json!({ "method": method, "params": params }).to_string();
        let args = js_sys::JSON::parse(&args).map_err(|e| WalletError::Transport(js_error_message(&e)))?;

        let result = ethereum
            .eip1193_request(&args)
            .await
            .map_err(|e| js_to_wallet_error(&e))?;

        js_to_json(&result)
    }

    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

/// JsValue -> serde_json::Value (undefined/null -> Null)
fn js_to_json(value: &JsValue) -> Result<Value, WalletError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text: String = js_sys::JSON::stringify(value)
        .map_err(|e| WalletError::Decode(js_error_message(&e)))?
        .into();
    serde_json::from_str(&text).map_err(|e| WalletError::Decode(e.to_string()))
}

/// Los errores EIP-1193 traen `code` y `message` (no enumerables en Error)
fn js_to_wallet_error(error: &JsValue) -> WalletError {
    let code = js_sys::Reflect::get(error, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64());
    match code {
        Some(code) => WalletError::Rpc {
            code: code as i64,
            message: js_error_message(error),
        },
        None => WalletError::Transport(js_error_message(error)),
    }
}

fn js_error_message(error: &JsValue) -> String {
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
