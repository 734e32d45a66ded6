//! urlstate core - keep a value in sync with the address bar
//!
//! Binds one query-string parameter to an in-memory value, compiled to both
//! native and WASM. It implements:
//! - Reconciliation between memory and the URL under three presence modes
//! - An updater taking either a literal or a function of the previous value
//! - A pluggable navigation surface (in-memory or the browser's history)
//! - A small ordered query-string codec
//!
//! URL writes always replace the current history entry, so back/forward
//! navigation is never polluted by internal corrections.
//!
//! # Examples
//!
//! ```rust
//! use urlstate_core::{MemoryNavigator, Mode, QueryParam};
//!
//! let nav = MemoryNavigator::new("http://localhost/?mockExistingParam=mockExistingValue").unwrap();
//! let mut key = QueryParam::new("mockKey", "", Mode::Suppress, nav.clone()).unwrap();
//!
//! key.set_value("mockValue").unwrap();
//! assert_eq!(nav.search(), "?mockExistingParam=mockExistingValue&mockKey=mockValue");
//!
//! key.set_value("").unwrap();
//! assert_eq!(nav.search(), "?mockExistingParam=mockExistingValue");
//! ```

pub mod error;
pub mod location;
pub mod mode;
pub mod navigator;
pub mod options;
pub mod param;
pub mod query;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use error::{Result, SyncError};
pub use location::Location;
pub use mode::Mode;
pub use navigator::{MemoryNavigator, Navigator};
pub use options::ParamOptions;
pub use param::{QueryParam, Update};
pub use query::QueryParams;
