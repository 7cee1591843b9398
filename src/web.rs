//! Browser entry point.
//!
//! Loads the site config embedded in the host page, follows `window.location.hash` and
//! writes every mounted page into the mount element.

use std::{cell::RefCell, rc::Rc};

use bcbites_router::HashLocation;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::{app::App, config::SiteConfig, error::Error};

/// Id of the optional `<script type="application/json">` element holding a [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "bcbites-config";

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    start().map_err(|err| {
        tracing::error!(%err, "failed to start");
        JsValue::from_str(&err.to_string())
    })
}

fn start() -> Result<(), Error> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::NoWindow)?;
    let config = read_config(&document)?;
    let mount = document
        .get_element_by_id(&config.mount_id)
        .ok_or_else(|| Error::MountMissing(config.mount_id.clone()))?;

    let location = Rc::new(HashLocation::with_redirect_limit(config.redirect_limit));
    let update_title = config.update_title;
    let app = App::with_mount(location, config, move |page, view| {
        mount.set_inner_html(&view.to_html());
        if update_title {
            if let Some(page) = page {
                document.set_title(page.title());
            }
        }
    })?;

    tracing::info!(route = %app.route(), "site started");
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

fn read_config(document: &Document) -> Result<SiteConfig, Error> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(&json),
        _ => Ok(SiteConfig::default()),
    }
}
