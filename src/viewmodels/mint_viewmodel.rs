// ============================================================================
// MINT VIEWMODEL - Conexión de wallet y mint
// ============================================================================
// Tres operaciones: comprobar conexión al montar, conectar, mintear.
// Ningún error sale de aquí: se loguean y la UI vuelve a su estado estable.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::{same_chain, ContractArtifact};
use crate::services::{Contract, Notifier, WalletError, WalletProvider};
use crate::state::AppState;

/// Única función mutante del contrato
pub const MINT_METHOD: &str = "tarotSpread";

/// Aviso de red incorrecta, `None` si la cadena es la esperada
pub fn network_warning(config: &AppConfig, chain_id: &str) -> Option<String> {
    if same_chain(chain_id, &config.expected_chain_id) {
        None
    } else {
        Some(config.wrong_network_message())
    }
}

/// Mensaje de éxito con el enlace a la transacción
pub fn success_message(config: &AppConfig, hash: &str) -> String {
    format!("Mined, see transaction: {}", config.transaction_url(hash))
}

pub struct MintViewModel<P, N> {
    config: Rc<AppConfig>,
    artifact: Rc<ContractArtifact>,
    provider: Rc<P>,
    notifier: Rc<N>,
    state: AppState,
}

impl<P, N> Clone for MintViewModel<P, N> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            artifact: self.artifact.clone(),
            provider: self.provider.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
        }
    }
}

impl<P: WalletProvider, N: Notifier> MintViewModel<P, N> {
    pub fn new(
        config: Rc<AppConfig>,
        artifact: Rc<ContractArtifact>,
        provider: Rc<P>,
        notifier: Rc<N>,
        state: AppState,
    ) -> Self {
        Self { config, artifact, provider, notifier, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Al montar: cuentas ya autorizadas, sin prompt
    pub async fn check_existing_connection(&self) {
        if !self.provider.is_available() {
            log::info!("🦊 [WALLET] Make sure you have MetaMask!");
            return;
        }
        log::info!("🦊 [WALLET] Proveedor ethereum encontrado");

        let accounts = match self.provider.accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                log::error!("❌ [WALLET] Error leyendo cuentas: {}", e);
                return;
            }
        };

        match self.state.wallet.adopt_accounts(&accounts) {
            Some(account) => {
                log::info!("✅ [WALLET] Cuenta autorizada encontrada: {}", account);
                self.state.notify_subscribers();
                self.check_network().await;
            }
            None => log::info!("ℹ️ [WALLET] No authorized account found"),
        }
    }

    /// Botón "Connect to Wallet": pide permiso a la wallet
    pub async fn connect_wallet(&self) {
        if !self.provider.is_available() {
            self.notifier.alert("Get MetaMask!");
            return;
        }

        let accounts = match self.provider.request_accounts().await {
            Ok(accounts) => accounts,
            Err(e) if e.is_user_rejection() => {
                log::warn!("🚫 [WALLET] Conexión rechazada por el usuario: {}", e);
                return;
            }
            Err(e) => {
                log::error!("❌ [WALLET] Error conectando wallet: {}", e);
                return;
            }
        };

        match self.state.wallet.adopt_accounts(&accounts) {
            Some(account) => {
                log::info!("🔗 [WALLET] Connected {}", account);
                self.state.notify_subscribers();
                self.check_network().await;
            }
            None => log::warn!("⚠️ [WALLET] {}", WalletError::NoAccounts),
        }
    }

    /// Avisa si la wallet no está en la red esperada. No bloquea nada.
    async fn check_network(&self) {
        match self.provider.chain_id().await {
            Ok(chain_id) => {
                log::info!("⛓️ [WALLET] Connected to chain {}", chain_id);
                if let Some(warning) = network_warning(&self.config, &chain_id) {
                    self.notifier.alert(&warning);
                }
            }
            Err(e) => log::error!("❌ [WALLET] Error leyendo chain id: {}", e),
        }
    }

    /// Botón "Mint NFT"
    pub async fn request_mint(&self) {
        if self.state.mint.is_minting() {
            log::warn!("⚠️ [MINT] Ya hay un mint en curso, ignorando");
            return;
        }
        self.state.mint.begin();
        self.state.notify_subscribers();

        let message = if self.provider.is_available() {
            match self.mint().await {
                Ok(hash) => {
                    let message = success_message(&self.config, &hash);
                    log::info!("✅ [MINT] {}", message);
                    Some(message)
                }
                Err(e) => {
                    log::error!("❌ [MINT] {}", e);
                    None
                }
            }
        } else {
            log::warn!("⚠️ [MINT] Ethereum object doesn't exist!");
            None
        };

        self.state.mint.settle(message);
        self.state.notify_subscribers();
    }

    async fn mint(&self) -> Result<String, WalletError> {
        let contract = Contract::new(self.config.contract_address, &self.artifact, &*self.provider);

        log::info!("🦊 [MINT] Going to pop wallet now to pay gas...");
        let transaction = contract.send(MINT_METHOD).await?;

        log::info!("⛏️ [MINT] Mining...please wait.");
        transaction.wait(self.config.receipt_poll_interval_ms).await?;

        Ok(transaction.hash.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MintButton;
    use crate::test_support::{FakeProvider, RecordingNotifier};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;

    fn view_model(provider: FakeProvider) -> MintViewModel<FakeProvider, RecordingNotifier> {
        MintViewModel::new(
            Rc::new(AppConfig::default()),
            Rc::new(ContractArtifact::non_fungible_tarot().unwrap()),
            Rc::new(provider),
            Rc::new(RecordingNotifier::default()),
            AppState::new(),
        )
    }

    fn mined(hash: &str) -> serde_json::Value {
        json!({ "transactionHash": hash, "blockNumber": "0x2", "status": "0x1" })
    }

    #[test]
    fn test_no_authorized_accounts_keeps_connect_button() {
        let vm = view_model(FakeProvider::new().respond("eth_accounts", json!([])));
        block_on(vm.check_existing_connection());

        assert_eq!(vm.state().wallet.get_current_account(), None);
        assert_eq!(vm.state().mint_button(), MintButton::Connect);
        assert_eq!(vm.provider.calls_to("eth_chainId"), 0);
    }

    #[test]
    fn test_existing_account_on_expected_network() {
        let vm = view_model(
            FakeProvider::new()
                .respond("eth_accounts", json!(["0xA1"]))
                .respond("eth_chainId", json!("0x4")),
        );
        block_on(vm.check_existing_connection());

        assert_eq!(vm.state().wallet.get_current_account().as_deref(), Some("0xA1"));
        assert!(vm.notifier.alerts().is_empty());
        assert_eq!(vm.state().mint_button(), MintButton::Mint);
    }

    #[test]
    fn test_wrong_network_warns_once_and_keeps_account() {
        let vm = view_model(
            FakeProvider::new()
                .respond("eth_accounts", json!(["0xA1", "0xB2"]))
                .respond("eth_chainId", json!("0x1")),
        );
        block_on(vm.check_existing_connection());

        assert_eq!(vm.state().wallet.get_current_account().as_deref(), Some("0xA1"));
        assert_eq!(
            vm.notifier.alerts(),
            vec!["You are not connected to the Rinkeby Test Network!".to_string()]
        );
    }

    #[test]
    fn test_check_without_provider_is_silent() {
        let vm = view_model(FakeProvider::missing());
        block_on(vm.check_existing_connection());

        assert!(vm.notifier.alerts().is_empty());
        assert_eq!(vm.provider.total_calls(), 0);
        assert_eq!(vm.state().wallet.get_current_account(), None);
    }

    #[test]
    fn test_connect_without_provider_asks_to_install_wallet() {
        let vm = view_model(FakeProvider::missing());
        block_on(vm.connect_wallet());

        assert_eq!(vm.notifier.alerts(), vec!["Get MetaMask!".to_string()]);
        assert_eq!(vm.state().mint_button(), MintButton::Connect);
    }

    #[test]
    fn test_connect_adopts_first_account_and_checks_network() {
        let vm = view_model(
            FakeProvider::new()
                .respond("eth_requestAccounts", json!(["0xC3"]))
                .respond("eth_chainId", json!("0x5")),
        );
        block_on(vm.connect_wallet());

        assert_eq!(vm.state().wallet.get_current_account().as_deref(), Some("0xC3"));
        assert_eq!(vm.notifier.alerts().len(), 1);
    }

    #[test]
    fn test_connect_rejected_leaves_state_unchanged() {
        let vm = view_model(FakeProvider::new().fail(
            "eth_requestAccounts",
            WalletError::Rpc { code: 4001, message: "User rejected the request.".into() },
        ));
        block_on(vm.connect_wallet());

        assert_eq!(vm.state().wallet.get_current_account(), None);
        assert!(vm.notifier.alerts().is_empty());
        assert_eq!(vm.provider.calls_to("eth_chainId"), 0);
    }

    #[test]
    fn test_successful_mint_sets_message_with_hash() {
        let hash = "0x9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";
        let vm = view_model(
            FakeProvider::new()
                .respond("eth_accounts", json!(["0xa1"]))
                .respond("eth_sendTransaction", json!(hash))
                .respond("eth_getTransactionReceipt", json!(null))
                .respond("eth_getTransactionReceipt", mined(hash)),
        );
        vm.state().wallet.set_current_account(Some("0xa1".into()));
        block_on(vm.request_mint());

        assert!(!vm.state().mint.is_minting());
        let message = vm.state().mint.get_success_message();
        assert!(message.contains(hash));
        assert_eq!(message, format!("Mined, see transaction: https://rinkeby.etherscan.io/tx/{}", hash));

        let tx = &vm.provider.params_of("eth_sendTransaction")[0][0];
        let to: alloy_primitives::Address = serde_json::from_value(tx["to"].clone()).unwrap();
        assert_eq!(to, AppConfig::default().contract_address);
    }

    #[test]
    fn test_rejected_mint_clears_flag_and_leaves_message_empty() {
        let vm = view_model(
            FakeProvider::new()
                .respond("eth_accounts", json!(["0xa1"]))
                .fail(
                    "eth_sendTransaction",
                    WalletError::Rpc { code: 4001, message: "User denied transaction signature.".into() },
                ),
        );
        vm.state().wallet.set_current_account(Some("0xa1".into()));
        block_on(vm.request_mint());

        assert!(!vm.state().mint.is_minting());
        assert!(vm.state().mint.get_success_message().is_empty());
        assert_eq!(vm.state().mint_button(), MintButton::Mint);
        assert_eq!(vm.provider.calls_to("eth_getTransactionReceipt"), 0);
    }

    #[test]
    fn test_reverted_mint_leaves_message_empty() {
        let vm = view_model(
            FakeProvider::new()
                .respond("eth_accounts", json!(["0xa1"]))
                .respond("eth_sendTransaction", json!("0xdead"))
                .respond("eth_getTransactionReceipt", json!({ "transactionHash": "0xdead", "status": "0x0" })),
        );
        block_on(vm.request_mint());

        assert!(!vm.state().mint.is_minting());
        assert!(vm.state().mint.get_success_message().is_empty());
    }

    #[test]
    fn test_new_mint_clears_previous_message() {
        let vm = view_model(
            FakeProvider::new()
                .respond("eth_accounts", json!(["0xa1"]))
                .fail("eth_sendTransaction", WalletError::Transport("offline".into())),
        );
        vm.state().mint.settle(Some("Mined, see transaction: old".into()));
        block_on(vm.request_mint());

        assert!(vm.state().mint.get_success_message().is_empty());
    }

    #[test]
    fn test_mint_without_provider_settles() {
        let vm = view_model(FakeProvider::missing());
        block_on(vm.request_mint());

        assert!(!vm.state().mint.is_minting());
        assert!(vm.state().mint.get_success_message().is_empty());
        assert_eq!(vm.provider.total_calls(), 0);
    }

    #[test]
    fn test_mint_notifies_pending_then_idle() {
        let vm = view_model(FakeProvider::missing());
        let seen = Rc::new(Cell::new(0));
        let pending_seen = Rc::new(Cell::new(false));
        {
            let seen = seen.clone();
            let pending_seen = pending_seen.clone();
            let state = vm.state().clone();
            vm.state().subscribe_to_changes(move || {
                seen.set(seen.get() + 1);
                if state.mint.is_minting() {
                    pending_seen.set(true);
                }
            });
        }
        block_on(vm.request_mint());

        assert_eq!(seen.get(), 2);
        assert!(pending_seen.get());
    }

    #[test]
    fn test_mint_while_pending_is_ignored() {
        let vm = view_model(FakeProvider::new());
        vm.state().mint.begin();
        block_on(vm.request_mint());

        assert!(vm.state().mint.is_minting());
        assert_eq!(vm.provider.total_calls(), 0);
    }

    #[test]
    fn test_network_warning_helper() {
        let config = AppConfig::default();
        assert_eq!(network_warning(&config, "0x4"), None);
        assert!(network_warning(&config, "0x1").is_some());
    }
}
