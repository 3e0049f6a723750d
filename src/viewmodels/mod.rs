pub mod mint_viewmodel;

pub use mint_viewmodel::{network_warning, success_message, MintViewModel, MINT_METHOD};
