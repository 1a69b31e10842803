//! System clipboard access for the result copy buttons.
//!
//! Native builds go through `arboard`. On X11 and Wayland the copied text is
//! served by the process that owns the clipboard handle, so the handle is
//! opened on first copy and kept in [`App`](crate::App) for the session.
//! The browser build copies via a hidden textarea and `execCommand("copy")`,
//! which works without extra permissions.

use lamina_core::errors::{LaminaError, LaminaResult};

/// Anything text can be copied into.
pub trait TextTarget {
    fn set_text(&mut self, text: &str) -> LaminaResult<()>;
}

/// A clipboard handle opened lazily and then kept alive.
pub struct SessionClipboard<T> {
    handle: Option<T>,
    open: fn() -> LaminaResult<T>,
}

impl<T: TextTarget> SessionClipboard<T> {
    pub fn new(open: fn() -> LaminaResult<T>) -> Self {
        Self { handle: None, open }
    }

    /// Put `text` on the clipboard, opening the handle on first use.
    pub fn write_text(&mut self, text: &str) -> LaminaResult<()> {
        let mut handle = match self.handle.take() {
            Some(handle) => handle,
            None => (self.open)()?,
        };
        let result = handle.set_text(text);
        self.handle = Some(handle);
        result
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type SystemClipboard = SessionClipboard<arboard::Clipboard>;

#[cfg(not(target_arch = "wasm32"))]
impl TextTarget for arboard::Clipboard {
    fn set_text(&mut self, text: &str) -> LaminaResult<()> {
        arboard::Clipboard::set_text(self, text.to_owned())
            .map_err(|e| LaminaError::clipboard(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClipboard {
    fn default() -> Self {
        SessionClipboard::new(|| {
            arboard::Clipboard::new().map_err(|e| LaminaError::clipboard(e.to_string()))
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub type SystemClipboard = SessionClipboard<BrowserClipboard>;

#[cfg(target_arch = "wasm32")]
impl Default for SystemClipboard {
    fn default() -> Self {
        SessionClipboard::new(|| Ok(BrowserClipboard))
    }
}

/// `execCommand("copy")` on a throwaway textarea.
#[cfg(target_arch = "wasm32")]
pub struct BrowserClipboard;

#[cfg(target_arch = "wasm32")]
impl TextTarget for BrowserClipboard {
    fn set_text(&mut self, text: &str) -> LaminaResult<()> {
        use wasm_bindgen::JsCast;

        let window =
            web_sys::window().ok_or_else(|| LaminaError::clipboard("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| LaminaError::clipboard("document unavailable"))?;
        let body = document
            .body()
            .ok_or_else(|| LaminaError::clipboard("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| LaminaError::clipboard("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| LaminaError::clipboard("textarea cast failed"))?;
        textarea.set_value(text);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|doc| doc.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();

        if copied {
            Ok(())
        } else {
            Err(LaminaError::clipboard("copy blocked by the browser"))
        }
    }
}
