//! Scoped selector building.
//!
//! [`Document::selector`](crate::Document::selector) hands out a
//! [`SelectorScope`], a guard that owns the selector under construction and
//! commits it to the document when dropped. The commit therefore happens on
//! every exit path: normal scope end, early return through `?`, or a panic
//! unwinding through the block. Styles appended before the exit are kept.
//!
//! The scope also stands in for the caller's local namespace during
//! auto-collection. It is bound under a name (`"selector"` unless changed with
//! [`SelectorScope::bind_as`]) and can carry ambient values for the
//! auto-collection flag and the target name, which apply when no
//! configuration sets them.

use std::ops::{AddAssign, Deref, DerefMut};

use crate::config::{Config, DEFAULT_SELECTOR_NAME};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::selector::Selector;
use crate::style::Style;
use crate::value::ToCss;

pub struct SelectorScope<'a> {
    document: &'a mut Document,
    selector: Selector,
    binding: String,
    ambient: Config,
}

impl<'a> SelectorScope<'a> {
    pub(crate) fn open(document: &'a mut Document, selector: Selector) -> Self {
        log::debug!("opening selector {}", selector.area());
        Self {
            document,
            selector,
            binding: DEFAULT_SELECTOR_NAME.to_string(),
            ambient: Config::default(),
        }
    }

    /// Bind the scope under another name, so it is found by styles whose
    /// target name is `name`.
    pub fn bind_as(&mut self, name: impl Into<String>) -> &mut Self {
        self.binding = name.into();
        self
    }

    /// The name this scope is bound under.
    pub fn binding(&self) -> &str {
        &self.binding
    }

    /// Set the ambient auto-collection flag.
    pub fn set_auto_collect(&mut self, enabled: bool) -> &mut Self {
        self.ambient.auto_collect = Some(enabled);
        self
    }

    /// Set the ambient target name.
    pub fn set_selector_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.ambient.selector_name = Some(name.into());
        self
    }

    /// Append a declaration to the open selector.
    pub fn style(&mut self, name: impl Into<String>, value: impl ToCss) -> &mut Self {
        self.selector.append(Style::new(name, value));
        self
    }

    /// Append an `!important` declaration to the open selector.
    pub fn important(&mut self, name: impl Into<String>, value: impl ToCss) -> &mut Self {
        self.selector.append(Style::important(name, value));
        self
    }

    /// Commit now instead of at the end of the enclosing block.
    pub fn commit(self) {}

    pub(crate) fn auto_collect_for(&self, config: &Config) -> bool {
        config
            .auto_collect
            .or(self.ambient.auto_collect)
            .unwrap_or(false)
    }

    pub(crate) fn selector_name_for<'c>(&'c self, config: &'c Config) -> &'c str {
        config
            .selector_name
            .as_deref()
            .or(self.ambient.selector_name.as_deref())
            .unwrap_or(DEFAULT_SELECTOR_NAME)
    }

    /// Resolve a binding name to the selector it holds.
    pub(crate) fn lookup(&mut self, name: &str) -> Result<&mut Selector> {
        if name == self.binding {
            Ok(&mut self.selector)
        } else {
            Err(Error::SelectorNotFoundInScope(name.to_string()))
        }
    }
}

impl Deref for SelectorScope<'_> {
    type Target = Selector;

    fn deref(&self) -> &Selector {
        &self.selector
    }
}

impl DerefMut for SelectorScope<'_> {
    fn deref_mut(&mut self) -> &mut Selector {
        &mut self.selector
    }
}

impl AddAssign<Style> for SelectorScope<'_> {
    fn add_assign(&mut self, style: Style) {
        self.selector.append(style);
    }
}

impl Drop for SelectorScope<'_> {
    fn drop(&mut self) {
        let selector = std::mem::take(&mut self.selector);
        self.document.commit(selector);
    }
}

impl std::fmt::Debug for SelectorScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorScope")
            .field("selector", &self.selector)
            .field("binding", &self.binding)
            .field("ambient", &self.ambient)
            .finish()
    }
}
