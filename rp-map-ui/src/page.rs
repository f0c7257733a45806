//! Values the hosting page provides.

use log::warn;
use rp_client::ClientConfig;
use wasm_bindgen::JsValue;

fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// The optional `userRole` global set by the server-rendered page.
pub fn user_role() -> Option<String> {
    global("userRole")?.as_string()
}

/// Page origin, used as the API base URL.
pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Client configuration from the optional `window.roadpulseConfig` object.
/// Missing or invalid config falls back to the defaults.
pub fn load_config() -> ClientConfig {
    let Some(raw) = global("roadpulseConfig") else {
        return ClientConfig::default();
    };
    let json = match js_sys::JSON::stringify(&raw) {
        Ok(s) => String::from(s),
        Err(_) => {
            warn!("roadpulseConfig is not serializable; using defaults");
            return ClientConfig::default();
        }
    };
    ClientConfig::from_json(&json).unwrap_or_else(|e| {
        warn!("Invalid roadpulseConfig ({e}); using defaults");
        ClientConfig::default()
    })
}
