//! Browser-backed capability implementations.
//!
//! [`LocalStorage`] persists through `window.localStorage` and
//! [`WindowBus`] broadcasts through `CustomEvent`s on the window, the two
//! ambient resources the storefront pages already share. Failures never
//! propagate past this module: the cart above degrades to an empty read
//! or an ignored write.

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{CustomEvent, CustomEventInit};

use crate::core::cart::CartStore;
use crate::core::error::StoreError;
use crate::core::store::{Broadcaster, KeyValueStore};
use crate::utils::dom;

/// localStorage-backed [`KeyValueStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = dom::local_storage() else {
            return Err(StoreError::Unavailable);
        };
        storage.set_item(key, value).map_err(|_| {
            web_sys::console::warn_1(&format!("cart: failed to write {key}").into());
            StoreError::WriteFailed
        })
    }
}

/// Window-event-backed [`Broadcaster`].
///
/// Events are dispatched as `CustomEvent`s whose `detail` carries the
/// JSON payload, so plain JavaScript listeners on the page see the same
/// shape they always did.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowBus;

impl Broadcaster for WindowBus {
    fn emit(&self, event: &str, payload: Value) {
        let Some(window) = dom::window() else { return };

        let init = CustomEventInit::new();
        if let Ok(detail) = serde_wasm_bindgen::to_value(&payload) {
            init.set_detail(&detail);
        }
        if let Ok(event) = CustomEvent::new_with_event_init_dict(event, &init) {
            let _ = window.dispatch_event(&event);
        }
    }

    fn subscribe(&self, event: &str, callback: Box<dyn Fn(&Value)>) {
        let Some(window) = dom::window() else { return };

        let closure = Closure::wrap(Box::new(move |raw: web_sys::Event| {
            if let Ok(custom) = raw.dyn_into::<CustomEvent>()
                && let Ok(payload) = serde_wasm_bindgen::from_value::<Value>(custom.detail())
            {
                callback(&payload);
            }
        }) as Box<dyn Fn(web_sys::Event)>);

        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());

        // Leaked intentionally: cart subscriptions persist for the
        // lifetime of the page.
        closure.forget();
    }
}

/// Cart wired to the browser's localStorage and window event target.
pub fn browser_cart() -> CartStore<LocalStorage, WindowBus> {
    CartStore::new(LocalStorage, WindowBus)
}
