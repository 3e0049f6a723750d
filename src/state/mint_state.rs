// ============================================================================
// MINT STATE - Estado de la petición de mint en curso
// ============================================================================
// Idle -> Pending -> Idle (con o sin mensaje). Sin reintentos.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct MintState {
    pub minting: Rc<RefCell<bool>>,
    /// Vacío = sin mensaje
    pub success_message: Rc<RefCell<String>>,
}

impl MintState {
    pub fn new() -> Self {
        Self {
            minting: Rc::new(RefCell::new(false)),
            success_message: Rc::new(RefCell::new(String::new())),
        }
    }

    pub fn is_minting(&self) -> bool {
        *self.minting.borrow()
    }

    pub fn get_success_message(&self) -> String {
        self.success_message.borrow().clone()
    }

    /// Inicio de petición: en curso y sin mensaje anterior
    pub fn begin(&self) {
        *self.minting.borrow_mut() = true;
        self.success_message.borrow_mut().clear();
    }

    /// Fin de petición, pase lo que pase. `Some(mensaje)` solo si hubo éxito.
    pub fn settle(&self, message: Option<String>) {
        if let Some(message) = message {
            *self.success_message.borrow_mut() = message;
        }
        *self.minting.borrow_mut() = false;
    }
}

impl Default for MintState {
    fn default() -> Self {
        Self::new()
    }
}
