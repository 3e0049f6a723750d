// ============================================================================
// NON-FUNGIBLE TAROT - FRONTEND MVVM (RUST PURO) + SCRIPT DE DESPLIEGUE
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: conexión de wallet y mint
// - Services: SOLO comunicación con wallet / nodo
// - State: State Management con Rc<RefCell>
// - Models: ABI, transacciones, red
// - deploy: despliegue + mint x2 (binario nativo `deploy`)
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod dom;
pub mod views;
mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod deploy;

#[cfg(test)]
pub(crate) mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Instancia global de la App (un solo hilo en el navegador)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    start()
}

/// Arranque del frontend: logging, render inicial y comprobación de wallet
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🔮 Non-Fungible Tarot - Rust Puro + MVVM");

    let app = App::new()?;
    app.render()?;
    app.mount();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}
