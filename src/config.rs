//! Rendering and auto-collection options.
//!
//! A [`Config`] behaves like a mapping: every field is optional so that an
//! unset key can be told apart from one explicitly set to its default. This
//! matters for inheritance, where a style only picks up its selector's
//! configuration when its own is empty, and for auto-collection, where a
//! configured value wins over an ambient scope binding.

/// Default number of spaces before each declaration line.
pub const DEFAULT_INDENT: usize = 4;

/// Default name of the binding auto-collected styles are routed to.
pub const DEFAULT_SELECTOR_NAME: &str = "selector";

/// Options shared by a document, its selectors and their styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Indent width for declaration lines.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub indent: Option<usize>,

    /// Whether styles attach themselves to the target selector on creation.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "darwcss_auto", default, skip_serializing_if = "Option::is_none")
    )]
    pub auto_collect: Option<bool>,

    /// Name of the binding that holds the target selector.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "darwcss_selector", default, skip_serializing_if = "Option::is_none")
    )]
    pub selector_name: Option<String>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn with_auto_collect(mut self, enabled: bool) -> Self {
        self.auto_collect = Some(enabled);
        self
    }

    pub fn with_selector_name(mut self, name: impl Into<String>) -> Self {
        self.selector_name = Some(name.into());
        self
    }

    /// True when no key is set.
    pub fn is_empty(&self) -> bool {
        self.indent.is_none() && self.auto_collect.is_none() && self.selector_name.is_none()
    }

    /// Indent width, falling back to [`DEFAULT_INDENT`].
    #[inline]
    pub fn indent(&self) -> usize {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }

    /// Auto-collection flag, falling back to `false`.
    #[inline]
    pub fn auto_collect(&self) -> bool {
        self.auto_collect.unwrap_or(false)
    }

    /// Target binding name, falling back to [`DEFAULT_SELECTOR_NAME`].
    #[inline]
    pub fn selector_name(&self) -> &str {
        self.selector_name.as_deref().unwrap_or(DEFAULT_SELECTOR_NAME)
    }

    /// Layer `self` over `base`: keys set here win, unset keys come from `base`.
    pub fn merged_over(&self, base: &Config) -> Config {
        Config {
            indent: self.indent.or(base.indent),
            auto_collect: self.auto_collect.or(base.auto_collect),
            selector_name: self
                .selector_name
                .clone()
                .or_else(|| base.selector_name.clone()),
        }
    }

    /// Parse a configuration from a JSON object such as
    /// `{"indent": 2, "darwcss_auto": true}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert!(config.is_empty());
        assert_eq!(config.indent(), 4);
        assert!(!config.auto_collect());
        assert_eq!(config.selector_name(), "selector");
    }

    #[test]
    fn test_explicit_default_is_not_empty() {
        let config = Config::new().with_auto_collect(false);
        assert!(!config.is_empty());
        assert!(!config.auto_collect());
    }

    #[test]
    fn test_merged_over() {
        let document = Config::new().with_indent(2).with_auto_collect(true);
        let selector = Config::new().with_indent(8).with_selector_name("test");

        let merged = selector.merged_over(&document);
        assert_eq!(merged.indent, Some(8));
        assert_eq!(merged.auto_collect, Some(true));
        assert_eq!(merged.selector_name(), "test");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = Config::from_json(r#"{"darwcss_auto": true, "darwcss_selector": "test"}"#)
            .unwrap();
        assert_eq!(config.auto_collect, Some(true));
        assert_eq!(config.selector_name(), "test");
        assert_eq!(config.indent, None);

        assert!(matches!(
            Config::from_json("[1, 2]"),
            Err(crate::Error::InvalidConfig(_))
        ));
    }
}
