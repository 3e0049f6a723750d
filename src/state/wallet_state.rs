// ============================================================================
// WALLET STATE - Cuenta conectada de la sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Cuenta de la sesión. Solo se limpia recargando la página.
#[derive(Clone)]
pub struct WalletState {
    pub current_account: Rc<RefCell<Option<String>>>,
}

impl WalletState {
    pub fn new() -> Self {
        Self {
            current_account: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_current_account(&self, account: Option<String>) {
        *self.current_account.borrow_mut() = account;
    }

    pub fn get_current_account(&self) -> Option<String> {
        self.current_account.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.current_account.borrow().is_some()
    }

    /// Adoptar la primera cuenta devuelta por la wallet.
    /// Con una lista vacía no cambia nada y devuelve `None`.
    pub fn adopt_accounts(&self, accounts: &[String]) -> Option<String> {
        let account = accounts.first()?.clone();
        self.set_current_account(Some(account.clone()));
        Some(account)
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new()
    }
}
