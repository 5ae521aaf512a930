//! End-to-end document building and rendering.

use std::panic::{AssertUnwindSafe, catch_unwind};

use darwcss::{ColorValue, Config, Document, Error, NumericValue, Selector, Style};

const RENDERED: &str = ".home{\n    a: b;\n    c: d;\n}\n";

fn home_document() -> Document {
    let mut css = Document::new();
    {
        let mut selector = css.selector(".home");
        selector.append(Style::new("a", "b"));
        selector.append(Style::new("c", "d"));
    }
    css
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_single_selector() {
    assert_eq!(home_document().render(), RENDERED);
}

#[test]
fn test_render_is_idempotent() {
    let css = home_document();
    let first = css.render();
    let second = css.render();
    assert_eq!(first, second);
    assert_eq!(css.to_string(), first);
}

#[test]
fn test_render_before_all_selectors_added() {
    let mut css = home_document();
    assert_eq!(css.render(), RENDERED);

    css.with_selector("#main", |s| {
        s.style("width", NumericValue::percent(50));
    });
    assert_eq!(css.render(), format!("{}#main{{\n    width: 50%;\n}}\n", RENDERED));
}

#[test]
fn test_render_important_and_typed_values() {
    let mut css = Document::new();
    css.with_selector("a:hover", |s| {
        s.important("color", ColorValue::hex("fa", "ff", "ca"))
            .style(
                "border",
                NumericValue::px(1) + "dashed" + ColorValue::rgb(0, 0, 255),
            )
            .style("outline", None::<&str>);
    });

    assert_eq!(
        css.render(),
        "a:hover{\n    color: #faffca !important;\n    border: 1px dashed rgb(0, 0, 255);\n    outline: none;\n}\n"
    );
}

#[test]
fn test_selectors_render_in_commit_order() {
    let mut css = Document::new();
    for area in ["body", ".b", "#c", ".a"] {
        css.with_selector(area, |s| {
            s.style("x", 1);
        });
    }

    let keys: Vec<_> = css.keys().collect();
    assert_eq!(keys, ["body", "cls_b", "id_c", "cls_a"]);

    let areas: Vec<_> = css
        .render()
        .lines()
        .filter(|line| line.ends_with('{'))
        .map(str::to_string)
        .collect();
    assert_eq!(areas, ["body{", ".b{", "#c{", ".a{"]);
}

#[test]
fn test_custom_indent() {
    let mut css = Document::with_config(Config::new().with_indent(1));
    css.with_selector(".home", |s| {
        s.style("a", "b").style("c", "d");
    });
    assert_eq!(css.render(), ".home{\n a: b;\n c: d;\n}\n");
}

#[test]
fn test_multiline_value_keeps_indent() {
    let mut css = Document::with_config(Config::new().with_indent(2));
    css.with_selector(".grid", |s| {
        s.style("grid-template-areas", "\"head head\"\n\"side main\"")
            .style("gap", NumericValue::px(4.0));
    });
    assert_eq!(
        css.render(),
        ".grid{\n  grid-template-areas: \"head head\"\n  \"side main\";\n  gap: 4.0px;\n}\n"
    );
}

// ============================================================================
// Keys and lookup
// ============================================================================

#[test]
fn test_class_and_id_keys_do_not_collide() {
    let mut css = Document::new();
    css.with_selector(".home", |s| {
        s.style("a", "class");
    });
    css.with_selector("#home", |s| {
        s.style("a", "id");
    });

    assert_eq!(css.len(), 2);
    assert_eq!(css.get("cls_home").unwrap().area(), ".home");
    assert_eq!(css.get("id_home").unwrap().area(), "#home");
    assert_eq!(css.get("cls_home").unwrap().styles()[0].value(), "class");
    assert_eq!(css.get("id_home").unwrap().styles()[0].value(), "id");
}

#[test]
fn test_unknown_key() {
    let css = home_document();
    assert_eq!(
        css.get(".home").unwrap_err(),
        Error::UnknownSelectorKey(".home".to_string())
    );
    assert!(css.contains_key("cls_home"));
}

#[test]
fn test_duplicate_key_replaces_in_place() {
    let mut css = Document::new();
    css.with_selector(".home", |s| {
        s.style("a", "b");
    });
    css.with_selector("p", |s| {
        s.style("c", "d");
    });
    css.with_selector(".home", |s| {
        s.style("e", "f");
    });

    assert_eq!(css.len(), 2);
    assert_eq!(css.render(), ".home{\n    e: f;\n}\np{\n    c: d;\n}\n");
}

#[test]
fn test_insert_returns_replaced_selector() {
    let mut css = Document::new();
    assert!(css.insert(Selector::new("#x") + Style::new("a", "b")).is_none());

    let replaced = css.insert(Selector::new("#x")).unwrap();
    assert_eq!(replaced.len(), 1);
    assert!(css.get("id_x").unwrap().is_empty());
}

// ============================================================================
// Scoped commit
// ============================================================================

#[test]
fn test_scope_commits_on_error() {
    let mut css = Document::new();
    let result: Result<(), Error> = css.with_selector(".home", |s| -> Result<(), Error> {
        s.style("a", "b");
        let color = ColorValue::with_kind_tag(1, 2, 3, "cmyk")?;
        s.style("color", color);
        Ok(())
    });

    assert_eq!(result, Err(Error::InvalidColorKind("cmyk".to_string())));
    assert_eq!(css.render(), ".home{\n    a: b;\n}\n");
}

#[test]
fn test_scope_commits_on_panic() {
    let mut css = Document::new();
    let outcome: std::thread::Result<()> = catch_unwind(AssertUnwindSafe(|| {
        let mut selector = css.selector(".home");
        selector.style("a", "b");
        panic!("interrupted");
    }));

    assert!(outcome.is_err());
    assert_eq!(css.get("cls_home").unwrap().len(), 1);
}

#[test]
fn test_scope_commits_exactly_once() {
    let mut css = Document::new();
    let mut selector = css.selector(".home");
    selector.style("a", "b");
    selector.commit();

    assert_eq!(css.len(), 1);
    assert_eq!(css.render(), ".home{\n    a: b;\n}\n");
}
