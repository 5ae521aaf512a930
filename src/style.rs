//! Style declarations.

use crate::config::Config;
use crate::error::Result;
use crate::scope::SelectorScope;
use crate::value::ToCss;

/// One `name: value` declaration, optionally `!important`.
///
/// The value is rendered once, when the style is created, and only the
/// resulting text is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    name: String,
    value: String,
    important: bool,
    config: Config,
}

impl Style {
    pub fn new(name: impl Into<String>, value: impl ToCss) -> Self {
        Self {
            name: name.into(),
            value: value.to_css_string(),
            important: false,
            config: Config::default(),
        }
    }

    /// Create a declaration flagged `!important`.
    pub fn important(name: impl Into<String>, value: impl ToCss) -> Self {
        Self {
            important: true,
            ..Self::new(name, value)
        }
    }

    /// Give the style its own configuration. A style with a non-empty
    /// configuration does not inherit its selector's on append.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Create a style and offer it to `scope` for auto-collection.
    ///
    /// See [`Style::attach`].
    pub fn in_scope(
        name: impl Into<String>,
        value: impl ToCss,
        scope: &mut SelectorScope<'_>,
    ) -> Result<Self> {
        Self::new(name, value).attach(scope)
    }

    /// Offer this style to `scope` for auto-collection.
    ///
    /// When auto-collection is enabled, the style is appended to the scope's
    /// selector provided the scope is bound under the target name. The flag
    /// and the target name come from the style's configuration layered over
    /// the selector's, then from the scope's ambient bindings, then from the
    /// defaults (`false` and `"selector"`). When auto-collection is disabled
    /// the style is returned untouched.
    ///
    /// Fails with [`Error::SelectorNotFoundInScope`](crate::Error::SelectorNotFoundInScope)
    /// when auto-collection is enabled but no binding matches the target name.
    pub fn attach(self, scope: &mut SelectorScope<'_>) -> Result<Self> {
        let effective = self.config.merged_over(scope.config());
        if !scope.auto_collect_for(&effective) {
            return Ok(self);
        }
        let target = scope.selector_name_for(&effective).to_string();
        let selector = scope.lookup(&target)?;
        log::trace!("auto-collecting {} into {}", self.name, selector.area());
        selector.append(self.clone());
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Inherit `config` if this style has none of its own.
    pub(crate) fn inherit_config(&mut self, config: &Config) {
        if self.config.is_empty() {
            self.config = config.clone();
        }
    }

    /// Write the declaration line without indentation or newline.
    pub(crate) fn write_declaration(&self, buf: &mut String) {
        buf.push_str(&self.name);
        buf.push_str(": ");
        buf.push_str(&self.value);
        if self.important {
            buf.push_str(" !important");
        }
        buf.push(';');
    }
}

impl ToCss for Style {
    fn to_css(&self, buf: &mut String) {
        self.write_declaration(buf);
    }
}
