#![allow(missing_docs)]

use pretty_assertions::assert_eq;
use sdui_service::create_sdui_service;
use sdui_service::validator::{ValidationEngine, validate};

#[test]
fn independent_violations_are_all_reported() -> anyhow::Result<()> {
    let service = create_sdui_service();

    // Three independent rule violations on one node: missing text,
    // zero font size, bad emphasis.
    let tree = service.parse(
        r#"{"id":"t","type":"text","fontSize":0,"emphasis":"shouty"}"#,
    )?;
    let result = validate(&tree);

    assert_eq!(result.error_count(), 3);
    Ok(())
}

#[test]
fn one_bad_leaf_is_found_at_any_depth() -> anyhow::Result<()> {
    let service = create_sdui_service();

    let mut text = r#"{"id":"needle","type":"image"}"#.to_string();
    for level in 0..12 {
        text = format!(r#"{{"id":"wrap{level}","type":"column","children":[{text}]}}"#);
    }

    let tree = service.parse(&text)?;
    let result = service.validate(&tree);

    assert!(result.is_failure());
    assert_eq!(result.error_count(), 1);
    assert!(
        result.errors()[0].contains("needle"),
        "error must identify the leaf: {}",
        result.errors()[0]
    );
    Ok(())
}

#[test]
fn sibling_errors_accumulate_in_order() -> anyhow::Result<()> {
    let service = create_sdui_service();

    let tree = service.parse(
        r#"{
            "id": "root",
            "type": "row",
            "children": [
                {"id": "first", "type": "image"},
                {"id": "mid", "type": "text", "text": "fine"},
                {"id": "last", "type": "fab"}
            ]
        }"#,
    )?;
    let result = service.validate(&tree);

    assert_eq!(result.error_count(), 2);
    assert!(result.errors()[0].contains("first"));
    assert!(result.errors()[1].contains("last"));
    Ok(())
}

#[test]
fn select_and_slider_rules() -> anyhow::Result<()> {
    let service = create_sdui_service();

    let tree = service.parse(r#"{"id":"s","type":"select","options":[]}"#)?;
    let result = service.validate(&tree);
    assert_eq!(result.error_count(), 1);
    assert!(result.errors()[0].contains("option"));

    let tree = service.parse(
        r#"{"id":"vol","type":"slider","minValue":10.0,"maxValue":10.0}"#,
    )?;
    let result = service.validate(&tree);
    assert_eq!(result.error_count(), 1);
    assert!(result.errors()[0].contains("less than"));
    Ok(())
}

#[test]
fn item_template_defects_are_reported() -> anyhow::Result<()> {
    let service = create_sdui_service();

    let tree = service.parse(
        r#"{
            "id": "feed",
            "type": "list",
            "items": [{"n": 1}],
            "itemTemplate": {"id": "cell", "type": "button"}
        }"#,
    )?;
    let result = service.validate(&tree);

    assert_eq!(result.error_count(), 1);
    assert!(result.errors()[0].contains("cell"));
    Ok(())
}

#[test]
fn a_clean_tree_is_a_success() -> anyhow::Result<()> {
    let service = create_sdui_service();

    let tree = service.parse(
        r#"{
            "id": "home",
            "type": "column",
            "alignment": "center",
            "children": [
                {"id": "hero", "type": "image", "url": "https://cdn/x.png", "contentFit": "cover"},
                {"id": "cta", "type": "button", "text": "Start", "actionId": "start"},
                {"id": "more", "type": "fab", "icon": "plus"}
            ]
        }"#,
    )?;

    let result = ValidationEngine::new().validate(&tree);
    assert!(result.is_success(), "unexpected errors: {result}");
    assert_eq!(result.errors(), &[] as &[String]);
    Ok(())
}
