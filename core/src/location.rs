//! Parsed address-bar location
//!
//! Splits an absolute href into the part before the query (scheme, host and
//! path), the query parameters and the fragment. Only the query is ever
//! rewritten; base and fragment round-trip verbatim.

use crate::error::{Result, SyncError};
use crate::query::QueryParams;
use std::fmt;

/// A browser location split for query rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    base: String,
    query: QueryParams,
    fragment: Option<String>,
}

impl Location {
    /// Parse an absolute href such as `http://localhost/?a=1#top`
    ///
    /// # Errors
    ///
    /// Returns `SyncError::InvalidUrl` if the href has no `scheme://` prefix
    pub fn parse(href: &str) -> Result<Self> {
        let scheme_ok = href
            .split_once("://")
            .map(|(scheme, _)| {
                !scheme.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            })
            .unwrap_or(false);

        if !scheme_ok {
            return Err(SyncError::InvalidUrl(href.to_string()));
        }

        let (rest, fragment) = match href.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (href, None),
        };

        let (base, query) = match rest.split_once('?') {
            Some((base, query)) => (base, QueryParams::parse(query)),
            None => (rest, QueryParams::new()),
        };

        Ok(Self {
            base: base.to_string(),
            query,
            fragment,
        })
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    /// `?name=value&...`, or an empty string when there are no parameters
    pub fn search(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.query)
        }
    }

    /// Re-assemble the full href
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.search())?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
