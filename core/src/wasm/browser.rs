//! Navigation surface backed by `window.location` and `window.history`

use crate::error::{Result, SyncError};
use crate::location::Location;
use crate::navigator::Navigator;
use wasm_bindgen::JsValue;

/// The real address bar
///
/// Reads `window.location.href` on every call and writes through
/// `history.replaceState(null, "", href)`, which neither reloads the page
/// nor adds a history entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| SyncError::Navigation("no global window".to_string()))
}

fn js_error(value: JsValue) -> SyncError {
    SyncError::Navigation(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl Navigator for BrowserNavigator {
    fn location(&self) -> Result<Location> {
        let href = window()?.location().href().map_err(js_error)?;
        Location::parse(&href)
    }

    fn replace(&self, location: &Location) -> Result<()> {
        let href = location.href();
        window()?
            .history()
            .map_err(js_error)?
            .replace_state_with_url(&JsValue::NULL, "", Some(&href))
            .map_err(js_error)
    }
}
