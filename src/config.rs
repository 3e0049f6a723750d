use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

const DEFAULT_CONTRACT_ADDRESS: Address = address!("Fb4e750B5ef392235b5F29c43f6EDEC316f8C33B");
const DEFAULT_TWITTER_HANDLE: &str = "_buildspace";
const DEFAULT_OPENSEA_LINK: &str = "https://testnets.opensea.io/collection/tarotnft-eztappm5if";
const DEFAULT_CHAIN_ID: &str = "0x4";
const DEFAULT_NETWORK_NAME: &str = "Rinkeby";
const DEFAULT_EXPLORER_URL: &str = "https://rinkeby.etherscan.io";
const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u32 = 4000;

/// Configuración inmutable de la app. Se pasa explícitamente al ViewModel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub contract_address: Address,
    pub twitter_handle: String,
    pub opensea_link: String,
    /// Hex, tal como lo devuelve `eth_chainId`
    pub expected_chain_id: String,
    pub network_name: String,
    pub explorer_url: String,
    pub receipt_poll_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            twitter_handle: DEFAULT_TWITTER_HANDLE.to_string(),
            opensea_link: DEFAULT_OPENSEA_LINK.to_string(),
            expected_chain_id: DEFAULT_CHAIN_ID.to_string(),
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// (build.rs las copia desde .env)
    pub fn from_env() -> Self {
        Self {
            contract_address: option_env!("CONTRACT_ADDRESS")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_CONTRACT_ADDRESS),
            twitter_handle: option_env!("TWITTER_HANDLE")
                .unwrap_or(DEFAULT_TWITTER_HANDLE).to_string(),
            opensea_link: option_env!("OPENSEA_LINK")
                .unwrap_or(DEFAULT_OPENSEA_LINK).to_string(),
            expected_chain_id: option_env!("EXPECTED_CHAIN_ID")
                .unwrap_or(DEFAULT_CHAIN_ID).to_string(),
            network_name: option_env!("NETWORK_NAME")
                .unwrap_or(DEFAULT_NETWORK_NAME).to_string(),
            explorer_url: option_env!("EXPLORER_URL")
                .unwrap_or(DEFAULT_EXPLORER_URL).trim_end_matches('/').to_string(),
            receipt_poll_interval_ms: option_env!("RECEIPT_POLL_INTERVAL_MS")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_RECEIPT_POLL_INTERVAL_MS),
        }
    }

    pub fn twitter_link(&self) -> String {
        format!("https://twitter.com/{}", self.twitter_handle)
    }

    /// URL del explorador para una transacción
    pub fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, hash)
    }

    /// Aviso de red incorrecta
    pub fn wrong_network_message(&self) -> String {
        format!("You are not connected to the {} Test Network!", self.network_name)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
