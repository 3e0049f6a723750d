// ============================================================================
// APP VIEW - Header, botón principal, mensaje y footer (Rust puro)
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{on_click, ClickListener, ElementBuilder};
use crate::state::app_state::{AppState, MintButton};

/// Acciones del botón principal
#[derive(Clone)]
pub struct AppActions {
    pub on_connect: Rc<dyn Fn()>,
    pub on_mint: Rc<dyn Fn()>,
}

/// Vista renderizada y los listeners que deben vivir mientras esté montada
pub struct RenderedView {
    pub element: Element,
    pub listeners: Vec<ClickListener>,
}

/// Renderizar aplicación completa
pub fn render_app(state: &AppState, config: &AppConfig, actions: &AppActions) -> Result<RenderedView, JsValue> {
    let (button, listener) = render_mint_button(state.mint_button(), actions)?;

    let header = ElementBuilder::new("div")?
        .class("header-container")
        .child(
            ElementBuilder::new("p")?
                .class("header gradient-text")
                .text("Non-Fungible Tarot")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("sub-text")
                .text("22 arcana, a universe of meaning. Get your tarot reading on the blockchain!")
                .build(),
        )?
        .child(button)?;

    // Mensaje de éxito solo si hay algo que mostrar
    let message = state.mint.get_success_message();
    let header = if message.is_empty() {
        header
    } else {
        header.child(
            ElementBuilder::new("p")?
                .class("sub-sub-text")
                .text(&message)
                .build(),
        )?
    };

    let container = ElementBuilder::new("div")?
        .class("container")
        .child(header.build())?
        .child(render_footer(config)?)?
        .build();

    let element = ElementBuilder::new("div")?
        .class("App")
        .child(container)?
        .build();

    Ok(RenderedView { element, listeners: listener.into_iter().collect() })
}

/// Botón según estado: conectar, minteando (deshabilitado) o mintear
fn render_mint_button(
    button: MintButton,
    actions: &AppActions,
) -> Result<(Element, Option<ClickListener>), JsValue> {
    let element = ElementBuilder::new("button")?
        .class(button.class_name())
        .text(button.label())
        .flag("disabled", button.is_disabled())?
        .build();

    let action = match button {
        MintButton::Connect => Some(actions.on_connect.clone()),
        MintButton::Mint => Some(actions.on_mint.clone()),
        MintButton::Minting => None,
    };
    let listener = match action {
        Some(action) => Some(on_click(&element, move |_e| action())?),
        None => None,
    };

    Ok((element, listener))
}

fn render_footer(config: &AppConfig) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("footer-container")
        .child(
            ElementBuilder::new("a")?
                .class("footer-text")
                .external_link(&config.opensea_link)?
                .text("View collection on OpenSea")
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("footer-text footer-separator")
                .text(" | ")
                .build(),
        )?
        .child(
            ElementBuilder::new("img")?
                .class("twitter-logo")
                .attr("alt", "Twitter Logo")?
                .attr("src", "assets/twitter-logo.svg")?
                .build(),
        )?
        .child(
            ElementBuilder::new("a")?
                .class("footer-text")
                .external_link(&config.twitter_link())?
                .text(&format!("built on @{}", config.twitter_handle))
                .build(),
        )?
        .build())
}
