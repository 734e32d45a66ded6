//! WASM bindings for urlstate
//!
//! This module provides the browser navigation surface and JavaScript-friendly
//! bindings for the parameter synchronizer.
//!
//! The crate emits `tracing` events but installs no subscriber. Nothing shows
//! up in the browser console unless the host application installs a
//! wasm-capable `tracing` subscriber itself.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod browser;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::WasmQueryParam;

#[cfg(feature = "wasm")]
pub use browser::BrowserNavigator;
