// ============================================================================
// APP - Aplicación principal: monta en #app y conecta estado -> render
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::{AppConfig, CONFIG};
use crate::dom::{append_child, clear_children, get_element_by_id, ClickListener};
use crate::models::ContractArtifact;
use crate::services::{BrowserNotifier, EthereumProvider};
use crate::state::app_state::AppState;
use crate::viewmodels::MintViewModel;
use crate::views::{render_app, AppActions};

type BrowserViewModel = MintViewModel<EthereumProvider, BrowserNotifier>;

/// Aplicación principal
pub struct App {
    state: AppState,
    config: Rc<AppConfig>,
    view_model: BrowserViewModel,
    root: Element,
    listeners: RefCell<Vec<ClickListener>>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let config = Rc::new(CONFIG.clone());
        let artifact = ContractArtifact::non_fungible_tarot()
            .map_err(|e| JsValue::from_str(&format!("ABI inválido: {}", e)))?;

        let state = AppState::new();
        let view_model = MintViewModel::new(
            config.clone(),
            Rc::new(artifact),
            Rc::new(EthereumProvider::new()),
            Rc::new(BrowserNotifier),
            state.clone(),
        );

        // Re-render en el siguiente tick para agrupar varios cambios seguidos
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        log::info!(
            "⚙️ [APP] Contrato {} en red {} ({})",
            config.contract_address,
            config.network_name,
            config.expected_chain_id
        );

        Ok(Self { state, config, view_model, root, listeners: RefCell::new(Vec::new()) })
    }

    /// Equivalente al "on mount": comprobar si ya hay una cuenta autorizada
    pub fn mount(&self) {
        let view_model = self.view_model.clone();
        wasm_bindgen_futures::spawn_local(async move {
            view_model.check_existing_connection().await;
        });
    }

    /// Renderizar aplicación (re-render completo, la vista es pequeña)
    pub fn render(&self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_app(&self.state, &self.config, &self.actions())?;
        append_child(&self.root, &view.element)?;
        // Los listeners del render anterior ya no tienen elemento: se sueltan aquí
        *self.listeners.borrow_mut() = view.listeners;
        Ok(())
    }

    fn actions(&self) -> AppActions {
        let connect_vm = self.view_model.clone();
        let mint_vm = self.view_model.clone();
        AppActions {
            on_connect: Rc::new(move || {
                let view_model = connect_vm.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    view_model.connect_wallet().await;
                });
            }),
            on_mint: Rc::new(move || {
                let view_model = mint_vm.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    view_model.request_mint().await;
                });
            }),
        }
    }
}
