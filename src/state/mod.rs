// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod wallet_state;
pub mod mint_state;
pub mod app_state;

pub use wallet_state::*;
pub use mint_state::*;
pub use app_state::*;
