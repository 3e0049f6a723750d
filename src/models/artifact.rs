// ============================================================================
// CONTRACT ARTIFACT - ABI compilado del contrato (artifact de Hardhat)
// ============================================================================
// Solo describe el contrato: funciones, selectores y bytecode.
// La lógica del contrato vive on-chain, aquí no hay nada de eso.
// ============================================================================

use alloy_primitives::{hex, keccak256, Bytes};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ABI de NonFungibleTarot embebido en el frontend (sin bytecode)
pub const NON_FUNGIBLE_TAROT_ABI: &str = include_str!("../../abi/NonFungibleTarot.json");

/// Errores al leer o consultar el ABI
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("invalid artifact JSON: {0}")]
    Parse(String),
    #[error("function `{0}` not found in ABI")]
    FunctionNotFound(String),
    #[error("function `{name}` takes {count} argument(s), only argument-less calls are supported")]
    UnsupportedArguments { name: String, count: usize },
    #[error("artifact has no deployable bytecode")]
    MissingBytecode,
    #[error("invalid hex bytecode: {0}")]
    InvalidHex(String),
}

/// Parámetro de una función o evento del ABI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Entrada del ABI (function, event, constructor, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
}

impl AbiItem {
    pub fn is_function(&self) -> bool {
        self.kind == "function"
    }

    /// Firma canónica, p.ej. `tarotSpread()`
    pub fn signature(&self) -> String {
        let inputs: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        format!("{}({})", self.name, inputs.join(","))
    }

    /// Selector de 4 bytes: keccak256(firma)[..4]
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// `view`/`pure` no modifican estado
    pub fn is_mutating(&self) -> bool {
        !matches!(self.state_mutability.as_deref(), Some("view") | Some("pure"))
    }
}

/// Artifact de compilación (formato Hardhat)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    #[serde(default)]
    pub contract_name: String,
    pub abi: Vec<AbiItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<String>,
}

impl ContractArtifact {
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        serde_json::from_str(json).map_err(|e| AbiError::Parse(e.to_string()))
    }

    /// Artifact embebido del contrato de la app
    pub fn non_fungible_tarot() -> Result<Self, AbiError> {
        Self::from_json(NON_FUNGIBLE_TAROT_ABI)
    }

    /// Buscar función por nombre
    pub fn function(&self, name: &str) -> Result<&AbiItem, AbiError> {
        self.abi
            .iter()
            .find(|item| item.is_function() && item.name == name)
            .ok_or_else(|| AbiError::FunctionNotFound(name.to_string()))
    }

    /// Calldata para una llamada sin argumentos (solo el selector)
    pub fn encode_call(&self, name: &str) -> Result<Bytes, AbiError> {
        let function = self.function(name)?;
        if !function.inputs.is_empty() {
            return Err(AbiError::UnsupportedArguments {
                name: name.to_string(),
                count: function.inputs.len(),
            });
        }
        Ok(Bytes::copy_from_slice(&function.selector()))
    }

    /// Bytecode de despliegue decodificado
    pub fn deploy_bytecode(&self) -> Result<Bytes, AbiError> {
        let raw = self
            .bytecode
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty() && *code != "0x")
            .ok_or(AbiError::MissingBytecode)?;
        hex::decode(raw)
            .map(Bytes::from)
            .map_err(|e| AbiError::InvalidHex(e.to_string()))
    }
}
