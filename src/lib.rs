//! # darwcss
//!
//! Build CSS stylesheets from Rust code.
//!
//! ## Features
//!
//! - Typed values ([`ColorValue`], [`NumericValue`]) alongside plain strings
//!   and numbers, all rendered through the [`ToCss`] trait
//! - Space-joined compound values with `+`
//! - Selectors built in a scope that commits them to the [`Document`] on exit
//! - Optional auto-collection, where declarations attach themselves to the
//!   open selector
//!
//! ## Quick Start
//!
//! ```
//! use darwcss::{ColorValue, Document, NumericValue, Style};
//!
//! let mut css = Document::new();
//! {
//!     let mut selector = css.selector(".home");
//!     selector.append(Style::new("color", ColorValue::rgb(255, 0, 0)));
//!     selector += Style::new(
//!         "border",
//!         NumericValue::px(5) + "solid" + ColorValue::hex("fa", "ff", "ca"),
//!     );
//!     selector.important("margin", 0);
//! }
//!
//! assert_eq!(
//!     css.render(),
//!     ".home{\n    color: rgb(255, 0, 0);\n    border: 5px solid #faffca;\n    margin: 0 !important;\n}\n"
//! );
//! ```
//!
//! ## Auto-collection
//!
//! With `darwcss_auto` enabled, a style offered to the open scope appends
//! itself to the selector bound under the configured name (`"selector"` by
//! default):
//!
//! ```
//! use darwcss::{Config, Document, Style};
//!
//! let mut css = Document::with_config(Config::new().with_auto_collect(true));
//! {
//!     let mut selector = css.selector(".home");
//!     Style::in_scope("a", "b", &mut selector)?;
//!     Style::in_scope("c", "d", &mut selector)?;
//! }
//! assert_eq!(css.render(), ".home{\n    a: b;\n    c: d;\n}\n");
//! # Ok::<(), darwcss::Error>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod scope;
pub mod selector;
pub mod style;
pub mod value;

pub use config::Config;
pub use document::{Document, normalize_key};
pub use error::{Error, Result};
pub use scope::SelectorScope;
pub use selector::Selector;
pub use style::Style;
pub use value::{ColorKind, ColorValue, Component, Hls, Joined, Number, NumericValue, ToCss, concat, render};
