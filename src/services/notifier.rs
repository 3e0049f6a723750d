// ============================================================================
// NOTIFIER - Avisos al usuario (alert bloqueante en el navegador)
// ============================================================================

/// Canal de avisos visibles para el usuario
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert()` del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        log::warn!("⚠️ [ALERT] {}", message);
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("❌ [ALERT] No se pudo mostrar alert: {:?}", e);
                }
            }
            None => log::error!("❌ [ALERT] No hay window disponible"),
        }
    }
}
