pub mod app;

pub use app::{render_app, AppActions, RenderedView};
