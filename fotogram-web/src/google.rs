//! Bindings to the Google Identity Services script loaded from
//! `index.html`. The script owns the button markup and the popup flow; we
//! hand it a client id plus a callback and receive credential responses.

use js_sys::{Object, Reflect};
use shared::models::GoogleCredential;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::Callback;

use crate::config::FrontendConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gis_initialize(config: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gis_render_button(parent: &Element, options: &JsValue);
}

/// Initialize GIS with our client id and render the sign-in button into
/// `parent`. Completed popup flows arrive on `on_credential`; responses we
/// cannot decode are logged and dropped.
pub fn mount_button(
    parent: &Element,
    config: &FrontendConfig,
    on_credential: Callback<GoogleCredential>,
) {
    let callback = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |response: JsValue| {
        match credential_from_js(&response) {
            Ok(credential) => on_credential.emit(credential),
            Err(err) => log::error!("Login Failed: {err}"),
        }
    }));

    let init = Object::new();
    let _ = Reflect::set(
        &init,
        &JsValue::from_str("client_id"),
        &JsValue::from_str(config.google_client_id()),
    );
    let _ = Reflect::set(&init, &JsValue::from_str("callback"), callback.as_ref());
    gis_initialize(&init);
    // The closure has to outlive this call; GIS keeps invoking it for the
    // lifetime of the page.
    callback.forget();

    let options = Object::new();
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("type"),
        &JsValue::from_str("standard"),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("theme"),
        &JsValue::from_str("outline"),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("size"),
        &JsValue::from_str("large"),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("text"),
        &JsValue::from_str("continue_with"),
    );
    gis_render_button(parent, &options);
}

/// Deserialize a GIS credential response through its JSON form. Keeps the
/// shared model free of `JsValue`.
fn credential_from_js(value: &JsValue) -> Result<GoogleCredential, String> {
    let json = js_sys::JSON::stringify(value).map_err(|err| format!("{err:?}"))?;
    serde_json::from_str(&String::from(json)).map_err(|err| err.to_string())
}
