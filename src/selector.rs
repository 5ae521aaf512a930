//! Selectors: a CSS selector string and its declarations in insertion order.

use std::ops::{Add, AddAssign};

use crate::config::Config;
use crate::style::Style;
use crate::value::ToCss;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    area: String,
    styles: Vec<Style>,
    config: Config,
}

impl Selector {
    pub fn new(area: impl Into<String>) -> Self {
        Self::with_config(area, Config::default())
    }

    pub fn with_config(area: impl Into<String>, config: Config) -> Self {
        Self {
            area: area.into(),
            styles: Vec::new(),
            config,
        }
    }

    /// Add a style at the end.
    ///
    /// A style without configuration of its own inherits this selector's.
    pub fn append(&mut self, mut style: Style) {
        style.inherit_config(&self.config);
        self.styles.push(style);
    }

    /// The raw selector text, e.g. `.home`.
    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.styles.iter()
    }

    /// Layer `base` under this selector's own configuration.
    pub(crate) fn inherit_config(&mut self, base: &Config) {
        self.config = self.config.merged_over(base);
    }
}

impl<'a> IntoIterator for &'a Selector {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}

impl Add<Style> for Selector {
    type Output = Selector;

    fn add(mut self, style: Style) -> Selector {
        self.append(style);
        self
    }
}

impl AddAssign<Style> for Selector {
    fn add_assign(&mut self, style: Style) {
        self.append(style);
    }
}

/// Writes the whole rule block, indented per the selector's configuration.
impl ToCss for Selector {
    fn to_css(&self, buf: &mut String) {
        let indent = self.config.indent();
        buf.push_str(&self.area);
        buf.push_str("{\n");
        let mut declaration = String::new();
        for style in &self.styles {
            declaration.clear();
            style.write_declaration(&mut declaration);
            // Values may span lines; every non-blank line gets the indent.
            for (i, line) in declaration.split('\n').enumerate() {
                if i > 0 {
                    buf.push('\n');
                }
                if !line.trim().is_empty() {
                    buf.extend(std::iter::repeat_n(' ', indent));
                }
                buf.push_str(line);
            }
            buf.push('\n');
        }
        buf.push_str("}\n");
    }
}
