// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// El listener vive mientras viva el `Closure` devuelto: quien renderiza lo
// guarda y lo suelta en el siguiente re-render (si se suelta antes, el click
// lanza una excepción en JS).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};

/// Handler de click registrado en un elemento
pub type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// Registrar click handler simple; devuelve el closure que lo mantiene vivo
pub fn on_click<F>(element: &Element, handler: F) -> Result<ClickListener, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    Ok(closure)
}
