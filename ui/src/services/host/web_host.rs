//! Browser implementation of the host bridge. Toasts and the close signal
//! are delivered as DOM `CustomEvent`s the embedding page listens for;
//! navigation assigns `window.location`.

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

use super::{HostBridge, NavigationTarget, ToastSeverity};
use crate::console_error;

/// Event the host page listens on to render a toast.
pub const TOAST_EVENT: &str = "changeorder:toast";
/// Event signalling the host to dismiss the wizard panel.
pub const CLOSE_EVENT: &str = "changeorder:close";

#[derive(Serialize)]
struct ToastDetail<'a> {
    title: &'a str,
    message: &'a str,
    variant: &'a str,
}

#[derive(Clone, Copy, Default)]
pub struct WebHost;

impl WebHost {
    fn dispatch_host_event(&self, name: &str, detail: Option<JsValue>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            console_error!("[Host] No document available to dispatch {}", name);
            return;
        };

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        if let Some(detail) = detail {
            init.set_detail(&detail);
        }

        match CustomEvent::new_with_event_init_dict(name, &init) {
            Ok(event) => {
                let _ = document.dispatch_event(&event);
            }
            Err(_) => {
                console_error!("[Host] Failed to construct {} event", name);
            }
        }
    }
}

impl HostBridge for WebHost {
    fn notify(&self, title: &str, message: &str, severity: ToastSeverity) {
        let detail = ToastDetail {
            title,
            message,
            variant: severity.as_str(),
        };
        match serde_wasm_bindgen::to_value(&detail) {
            Ok(value) => self.dispatch_host_event(TOAST_EVENT, Some(value)),
            Err(error) => {
                console_error!("[Host] Failed to serialize toast detail: {}", error);
            }
        }
    }

    fn navigate(&self, target: &NavigationTarget) {
        let url = target.url();
        let Some(window) = web_sys::window() else {
            console_error!("[Host] No window available to navigate to {}", url);
            return;
        };
        if window.location().assign(&url).is_err() {
            console_error!("[Host] Failed to navigate to {}", url);
        }
    }

    fn close_wizard(&self) {
        self.dispatch_host_event(CLOSE_EVENT, None);
    }
}
