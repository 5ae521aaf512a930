//! The stylesheet document.
//!
//! # Example
//!
//! ```
//! use darwcss::{Document, Style};
//!
//! let mut css = Document::new();
//! {
//!     let mut selector = css.selector(".home");
//!     selector.append(Style::new("a", "b"));
//!     selector.append(Style::new("c", "d"));
//! }
//!
//! assert_eq!(css.render(), ".home{\n    a: b;\n    c: d;\n}\n");
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::scope::SelectorScope;
use crate::selector::Selector;
use crate::value::ToCss;

/// Derive the storage key for a selector: a leading `.` becomes `cls_`, a
/// leading `#` becomes `id_`, anything else is used as is.
pub fn normalize_key(area: &str) -> String {
    if let Some(rest) = area.strip_prefix('.') {
        format!("cls_{rest}")
    } else if let Some(rest) = area.strip_prefix('#') {
        format!("id_{rest}")
    } else {
        area.to_string()
    }
}

/// Selectors keyed by [`normalize_key`], rendered in the order their keys
/// were first committed.
///
/// Committing a selector whose key is already present replaces the earlier
/// selector wholesale; the key keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Document {
    selectors: IndexMap<String, Selector>,
    config: Config,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            selectors: IndexMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open a selector for `area`. It is committed when the returned scope
    /// is dropped.
    pub fn selector(&mut self, area: impl Into<String>) -> SelectorScope<'_> {
        self.selector_with(area, Config::default())
    }

    /// Like [`Document::selector`], with configuration that applies to this
    /// selector only, on top of the document's.
    pub fn selector_with(&mut self, area: impl Into<String>, config: Config) -> SelectorScope<'_> {
        let selector = Selector::with_config(area, config.merged_over(&self.config));
        SelectorScope::open(self, selector)
    }

    /// Build a selector inside `body` and commit it once `body` returns,
    /// whatever it returns.
    ///
    /// ```
    /// use darwcss::{Document, NumericValue};
    ///
    /// let mut css = Document::new();
    /// css.with_selector("#main", |selector| {
    ///     selector.style("width", NumericValue::percent(100));
    /// });
    /// assert_eq!(css.render(), "#main{\n    width: 100%;\n}\n");
    /// ```
    pub fn with_selector<R>(
        &mut self,
        area: impl Into<String>,
        body: impl FnOnce(&mut SelectorScope<'_>) -> R,
    ) -> R {
        let mut scope = self.selector(area);
        body(&mut scope)
    }

    /// Add a finished selector, returning the one it replaced, if any.
    pub fn insert(&mut self, selector: Selector) -> Option<Selector> {
        self.commit(selector)
    }

    pub(crate) fn commit(&mut self, mut selector: Selector) -> Option<Selector> {
        selector.inherit_config(&self.config);
        let key = normalize_key(selector.area());
        log::debug!(
            "committing selector {} as {} ({} styles)",
            selector.area(),
            key,
            selector.len()
        );
        let previous = self.selectors.insert(key, selector);
        if let Some(previous) = &previous {
            log::warn!("selector {} replaced an earlier definition", previous.area());
        }
        previous
    }

    /// Look up a selector by its normalized key, e.g. `cls_home` for `.home`.
    pub fn get(&self, key: &str) -> Result<&Selector> {
        self.selectors
            .get(key)
            .ok_or_else(|| Error::UnknownSelectorKey(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.selectors.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.selectors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selector)> {
        self.selectors.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Render every selector to CSS text.
    pub fn render(&self) -> String {
        self.to_css_string()
    }
}

impl ToCss for Document {
    fn to_css(&self, buf: &mut String) {
        for selector in self.selectors.values() {
            selector.to_css(buf);
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
