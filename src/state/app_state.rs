// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{MintState, WalletState};

/// Botón principal derivado del estado
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintButton {
    /// Sin cuenta: "Connect to Wallet"
    Connect,
    /// Mint en curso: "Now Minting..." deshabilitado
    Minting,
    /// "Mint NFT"
    Mint,
}

impl MintButton {
    pub fn label(&self) -> &'static str {
        match self {
            MintButton::Connect => "Connect to Wallet",
            MintButton::Minting => "Now Minting...",
            MintButton::Mint => "Mint NFT",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            MintButton::Connect => "cta-button connect-wallet-button",
            MintButton::Minting | MintButton::Mint => "cta-button mint-button",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, MintButton::Minting)
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub wallet: WalletState,
    pub mint: MintState,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            wallet: WalletState::new(),
            mint: MintState::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn mint_button(&self) -> MintButton {
        if !self.wallet.is_connected() {
            MintButton::Connect
        } else if self.mint.is_minting() {
            MintButton::Minting
        } else {
            MintButton::Mint
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        // Clonar la lista: un callback podría suscribir otro
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
