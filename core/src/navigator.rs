//! Navigation surface
//!
//! The address bar is process-wide mutable state owned by the browser. The
//! synchronizer only needs two capabilities from it: read the current
//! location and replace the current history entry. [`Navigator`] captures
//! exactly that, so bindings can run against the real browser (see
//! `wasm::BrowserNavigator`) or against [`MemoryNavigator`] in tests and
//! native hosts.

use crate::error::Result;
use crate::location::Location;
use std::cell::RefCell;
use std::rc::Rc;

/// Read and replace access to the current history entry
pub trait Navigator {
    /// Current location, parsed
    fn location(&self) -> Result<Location>;

    /// Replace the current history entry with `location`
    ///
    /// Must not push a new entry or reload the page.
    fn replace(&self, location: &Location) -> Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn location(&self) -> Result<Location> {
        (**self).location()
    }

    fn replace(&self, location: &Location) -> Result<()> {
        (**self).replace(location)
    }
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn location(&self) -> Result<Location> {
        (**self).location()
    }

    fn replace(&self, location: &Location) -> Result<()> {
        (**self).replace(location)
    }
}

#[derive(Debug)]
struct History {
    entries: Vec<Location>,
    index: usize,
    replacements: usize,
}

/// In-memory history stack
///
/// Clones share the same history, so a test can hand one handle to a
/// binding and keep another to simulate the user navigating.
///
/// # Example
///
/// ```
/// use urlstate_core::{MemoryNavigator, Mode, QueryParam};
///
/// let nav = MemoryNavigator::new("http://localhost/?page=2").unwrap();
/// let mut page = QueryParam::new("page", "1", Mode::Suppress, nav.clone()).unwrap();
/// assert_eq!(page.value(), "2");
///
/// page.set_value("1").unwrap();
/// assert_eq!(nav.search(), "");
/// assert_eq!(nav.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    history: Rc<RefCell<History>>,
}

impl MemoryNavigator {
    /// Create a history holding a single entry
    pub fn new(href: &str) -> Result<Self> {
        let location = Location::parse(href)?;
        Ok(Self {
            history: Rc::new(RefCell::new(History {
                entries: vec![location],
                index: 0,
                replacements: 0,
            })),
        })
    }

    /// Navigate to `href` as a user would, pushing a new entry
    ///
    /// Entries ahead of the current one are discarded.
    pub fn push(&self, href: &str) -> Result<()> {
        let location = Location::parse(href)?;
        let mut history = self.history.borrow_mut();
        let keep = history.index + 1;
        history.entries.truncate(keep);
        history.entries.push(location);
        history.index = keep;
        Ok(())
    }

    /// Step back one entry; returns false at the start of history
    pub fn back(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    /// Step forward one entry; returns false at the end of history
    pub fn forward(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }

    /// Full href of the current entry
    pub fn href(&self) -> String {
        let history = self.history.borrow();
        history.entries[history.index].href()
    }

    /// `location.search` of the current entry
    pub fn search(&self) -> String {
        let history = self.history.borrow();
        history.entries[history.index].search()
    }

    /// Number of entries in the history stack
    pub fn len(&self) -> usize {
        self.history.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.borrow().entries.is_empty()
    }

    /// Number of replace operations performed so far
    pub fn replace_count(&self) -> usize {
        self.history.borrow().replacements
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Result<Location> {
        let history = self.history.borrow();
        Ok(history.entries[history.index].clone())
    }

    fn replace(&self, location: &Location) -> Result<()> {
        let mut history = self.history.borrow_mut();
        let index = history.index;
        history.entries[index] = location.clone();
        history.replacements += 1;
        Ok(())
    }
}
