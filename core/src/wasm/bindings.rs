//! JavaScript bindings for urlstate core types

use super::browser::BrowserNavigator;
use crate::error::SyncError;
use crate::mode::Mode;
use crate::options::ParamOptions;
use crate::param::QueryParam;
use wasm_bindgen::prelude::*;

fn to_js(err: SyncError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Carries either a JS exception or a sync error out of an updater
struct UpdaterError(JsValue);

impl From<SyncError> for UpdaterError {
    fn from(err: SyncError) -> Self {
        UpdaterError(to_js(err))
    }
}

/// JavaScript-friendly wrapper for QueryParam bound to the browser URL
#[wasm_bindgen]
pub struct WasmQueryParam {
    inner: QueryParam<BrowserNavigator>,
}

#[wasm_bindgen]
impl WasmQueryParam {
    /// Bind a query parameter
    ///
    /// # Arguments
    /// * `name` - Query-string key
    /// * `default_value` - Value assumed when the key is absent (defaults to "")
    /// * `mode` - "simple", "required" or "suppress" (defaults to "suppress")
    #[wasm_bindgen(constructor)]
    pub fn new(
        name: String,
        default_value: Option<String>,
        mode: Option<String>,
    ) -> Result<WasmQueryParam, JsValue> {
        let mode = match mode {
            Some(mode) => mode.parse::<Mode>().map_err(to_js)?,
            None => Mode::default(),
        };

        let inner = QueryParam::new(
            name,
            default_value.unwrap_or_default(),
            mode,
            BrowserNavigator::new(),
        )
        .map_err(to_js)?;

        Ok(Self { inner })
    }

    /// Bind from a JSON options string
    ///
    /// # Example
    /// ```javascript
    /// const page = WasmQueryParam.fromOptions('{"name":"page","defaultValue":"1"}');
    /// ```
    #[wasm_bindgen(js_name = fromOptions)]
    pub fn from_options(json: String) -> Result<WasmQueryParam, JsValue> {
        let options = ParamOptions::from_json(&json).map_err(to_js)?;
        let inner = QueryParam::with_options(options, BrowserNavigator::new()).map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Get the current value
    #[wasm_bindgen(js_name = value)]
    pub fn value(&self) -> String {
        self.inner.value().to_string()
    }

    /// Get the parameter name
    #[wasm_bindgen(js_name = name)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Get the mode as a string
    #[wasm_bindgen(js_name = mode)]
    pub fn mode(&self) -> String {
        self.inner.mode().to_string()
    }

    /// Set a literal value, returning the resolved value
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, value: String) -> Result<String, JsValue> {
        self.inner.set_value(value).map_err(to_js)
    }

    /// Derive the next value from the previous one
    ///
    /// `updater` receives the previous value and must return a string.
    /// Exceptions thrown by `updater` propagate and leave the URL untouched.
    #[wasm_bindgen(js_name = update)]
    pub fn update(&mut self, updater: &js_sys::Function) -> Result<String, JsValue> {
        self.inner
            .try_update(|prev| {
                let next = updater
                    .call1(&JsValue::NULL, &JsValue::from_str(prev))
                    .map_err(UpdaterError)?;
                next.as_string()
                    .ok_or_else(|| UpdaterError(JsValue::from_str("Updater must return a string")))
            })
            .map_err(|UpdaterError(err)| err)
    }

    /// Re-read the URL (call from a `popstate` listener)
    ///
    /// Returns true if the value changed.
    #[wasm_bindgen(js_name = sync)]
    pub fn sync(&mut self) -> Result<bool, JsValue> {
        self.inner.reconcile().map_err(to_js)
    }

    /// Rebind to another parameter name
    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&mut self, name: String) -> Result<bool, JsValue> {
        self.inner.set_name(name).map_err(to_js)
    }

    /// Switch mode ("simple", "required" or "suppress")
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: String) -> Result<bool, JsValue> {
        let mode = mode.parse::<Mode>().map_err(to_js)?;
        self.inner.set_mode(mode).map_err(to_js)
    }
}
