//! Parameter synchronizer
//!
//! [`QueryParam`] mirrors one query-string parameter into memory. Three
//! sources are reconciled: the in-memory value, the live URL, and the value
//! a caller asks for through [`QueryParam::set`].
//!
//! # Reconciliation pass
//!
//! Runs on construction, whenever the name, mode or current value changes,
//! and whenever the host calls [`QueryParam::reconcile`] (e.g. after the user
//! navigates back or forward):
//!
//! 1. `required` and the key is missing: insert `name=default`
//! 2. Adopt the URL value (absent reads as `""`), except that a default
//!    value is kept while the key is genuinely absent
//! 3. `suppress` and the key is present with the default value: remove it
//! 4. Remember the value for function-form updates
//!
//! Every URL write replaces the current history entry; nothing is pushed.

use crate::error::{Result, SyncError};
use crate::location::Location;
use crate::mode::Mode;
use crate::navigator::Navigator;
use crate::options::ParamOptions;
use std::fmt;

/// Upper bound on consecutive passes while the value settles
const MAX_SETTLE_PASSES: usize = 8;

/// Next value for a binding: either literal or derived from the previous one
pub enum Update<'a> {
    Value(String),
    With(Box<dyn FnOnce(&str) -> String + 'a>),
}

impl<'a> Update<'a> {
    /// Derive the next value from the previous one
    pub fn with(f: impl FnOnce(&str) -> String + 'a) -> Self {
        Update::With(Box::new(f))
    }
}

impl From<String> for Update<'_> {
    fn from(value: String) -> Self {
        Update::Value(value)
    }
}

impl From<&str> for Update<'_> {
    fn from(value: &str) -> Self {
        Update::Value(value.to_string())
    }
}

impl fmt::Debug for Update<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Update::With(_) => f.write_str("With(<fn>)"),
        }
    }
}

/// A value bound to one query-string parameter
#[derive(Debug)]
pub struct QueryParam<N: Navigator> {
    name: String,
    default: String,
    mode: Mode,

    /// Rendered value
    value: String,

    /// Last reconciled value, handed to function-form updates
    previous: String,

    navigator: N,
}

impl<N: Navigator> QueryParam<N> {
    /// Bind `name` and run the first reconciliation pass
    ///
    /// # Errors
    ///
    /// Returns `SyncError::EmptyName` for an empty name, or whatever the
    /// navigator reports when the location cannot be read or replaced.
    pub fn new(
        name: impl Into<String>,
        default: impl Into<String>,
        mode: Mode,
        navigator: N,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SyncError::EmptyName);
        }

        let default = default.into();
        let mut param = Self {
            name,
            value: default.clone(),
            previous: default.clone(),
            default,
            mode,
            navigator,
        };

        param.settle()?;
        Ok(param)
    }

    /// Bind using decoded [`ParamOptions`]
    pub fn with_options(options: ParamOptions, navigator: N) -> Result<Self> {
        Self::new(
            options.name,
            options.default_value,
            options.mode,
            navigator,
        )
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Rebind to another parameter name and reconcile
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<bool> {
        let name = name.into();
        if name.is_empty() {
            return Err(SyncError::EmptyName);
        }
        if name == self.name {
            return Ok(false);
        }

        self.name = name;
        self.settle()
    }

    /// Switch presence policy and reconcile
    pub fn set_mode(&mut self, mode: Mode) -> Result<bool> {
        if mode == self.mode {
            return Ok(false);
        }

        self.mode = mode;
        self.settle()
    }

    /// Reconcile with the current URL
    ///
    /// Call after anything outside this binding may have changed the
    /// location. Returns whether the value changed.
    pub fn reconcile(&mut self) -> Result<bool> {
        self.settle()
    }

    /// Set a literal value; see [`QueryParam::set`]
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<String> {
        self.set(Update::Value(value.into()))
    }

    /// Derive the next value from the previous one; see [`QueryParam::set`]
    pub fn update(&mut self, f: impl FnOnce(&str) -> String) -> Result<String> {
        self.set(Update::with(f))
    }

    /// Write the next value to the URL and to memory
    ///
    /// Nothing is written when the URL already holds the resolved value.
    /// Returns the resolved value either way.
    pub fn set(&mut self, update: Update<'_>) -> Result<String> {
        match update {
            Update::Value(value) => self.commit(value),
            Update::With(f) => self.try_update(|prev| Ok::<_, SyncError>(f(prev))),
        }
    }

    /// Fallible function-form update
    ///
    /// `f` sees the value currently in the URL when it differs from the last
    /// reconciled one, so external navigation between renders is not lost.
    /// An absent key reads as the default while the default is the value
    /// being kept, and as `""` otherwise. If `f` fails nothing is written.
    pub fn try_update<E, F>(&mut self, f: F) -> std::result::Result<String, E>
    where
        E: From<SyncError>,
        F: FnOnce(&str) -> std::result::Result<String, E>,
    {
        let location = self.navigator.location()?;
        let live = match location.query().get(&self.name) {
            Some(value) => value,
            None if self.previous == self.default => self.default.as_str(),
            None => "",
        };

        if live != self.previous {
            tracing::debug!(
                name = %self.name,
                stale = %self.previous,
                live = %live,
                "refreshing previous value from url"
            );
            self.previous = live.to_string();
        }

        let next = f(&self.previous)?;
        Ok(self.commit(next)?)
    }

    fn commit(&mut self, next: String) -> Result<String> {
        let mut location = self.navigator.location()?;

        if location.query().get(&self.name) == Some(next.as_str()) {
            tracing::trace!(name = %self.name, value = %next, "url already up to date");
            return Ok(next);
        }

        location.query_mut().set(&self.name, &next);
        self.replace(&location)?;

        if next != self.value {
            self.value = next.clone();
            self.settle()?;
        }

        Ok(next)
    }

    /// Repeat the pass until the value stops changing
    fn settle(&mut self) -> Result<bool> {
        let mut changed = false;
        for _ in 0..MAX_SETTLE_PASSES {
            if !self.reconcile_once()? {
                break;
            }
            changed = true;
        }
        Ok(changed)
    }

    fn reconcile_once(&mut self) -> Result<bool> {
        let mut location = self.navigator.location()?;

        if self.mode == Mode::Required && !location.query().has(&self.name) {
            location.query_mut().set(&self.name, &self.default);
            self.replace(&location)?;
        }

        let raw = location.query().get(&self.name).map(str::to_owned);
        let normalized = raw.as_deref().unwrap_or("");

        let mut changed = false;
        if normalized != self.value {
            // Keep the in-memory default while the key is absent
            let keep_default = raw.is_none() && self.value == self.default;
            if !keep_default {
                tracing::debug!(
                    name = %self.name,
                    from = %self.value,
                    to = %normalized,
                    "adopting url value"
                );
                self.value = normalized.to_string();
                changed = true;
            }
        }

        if self.mode == Mode::Suppress && raw.is_some() && normalized == self.default {
            location.query_mut().delete(&self.name);
            self.replace(&location)?;
        }

        self.previous = self.value.clone();
        Ok(changed)
    }

    fn replace(&self, location: &Location) -> Result<()> {
        tracing::debug!(
            name = %self.name,
            mode = %self.mode,
            search = %location.search(),
            "replacing history entry"
        );
        self.navigator.replace(location)
    }
}
