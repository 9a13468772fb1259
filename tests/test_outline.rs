//! Integration tests for outlines and destinations against a live registry.

use pdf_doctree::{
    Destination, DocumentRegistry, FitMode, Object, ObjectRef, ObjectSerializer, OutlineId,
    Outlines, OutlineStyle, ToObject,
};

#[test]
fn test_destination_one_shot_binding() {
    let mut dest = Destination::new(FitMode::FitV, 100.0);
    let ref1 = ObjectRef::new(1, 0);
    let ref2 = ObjectRef::new(2, 0);

    assert!(dest.add_page(ref1));
    assert!(dest.has_page());
    let elements = dest.elements();
    assert_eq!(elements[0].as_reference(), Some(ref1));
    assert_eq!(elements[1].as_name(), Some("FitV"));
    assert_eq!(elements[2].as_real(), Some(100.0));

    assert!(!dest.add_page(ref2));
    assert_eq!(dest.elements(), elements);
}

#[test]
fn test_chain_levels() {
    let mut registry = DocumentRegistry::new();
    registry.begin_page();
    let mut outlines = Outlines::new();
    let root = outlines.root();
    let a = outlines.add(&mut registry, root, "A", None, true).unwrap();
    let b = outlines.add(&mut registry, a, "B", None, true).unwrap();
    let c = outlines.add(&mut registry, b, "C", None, true).unwrap();

    assert_eq!(outlines.level(root), 0);
    assert_eq!(outlines.level(c), 3);
}

#[test]
fn test_bookmarks_capture_page_open_at_declaration() {
    let mut registry = DocumentRegistry::new();
    let mut outlines = Outlines::new();
    let root = outlines.root();

    let page1 = registry.begin_page();
    let ch1 = outlines
        .add(&mut registry, root, "Chapter 1", Some(Destination::new(FitMode::FitH, 792.0)), true)
        .unwrap();

    let page2 = registry.begin_page();
    let ch2 = outlines
        .add(&mut registry, root, "Chapter 2", Some(Destination::new(FitMode::FitH, 792.0)), true)
        .unwrap();

    let d1 = outlines.destination(ch1).unwrap();
    let d2 = outlines.destination(ch2).unwrap();
    assert!(d1.has_page() && d2.has_page());
    assert_eq!(d1.elements()[0].as_reference(), Some(page1));
    assert_eq!(d2.elements()[0].as_reference(), Some(page2));
}

/// Walk a finished tree and store counts per the PDF convention: open
/// entries get their number of open descendants, closed entries the negated
/// number of all descendants.
fn assign_counts(outlines: &mut Outlines, id: OutlineId) -> (i64, i64) {
    let children: Vec<OutlineId> = outlines.children(id).to_vec();
    let mut total = 0i64;
    let mut visible = 0i64;
    for child in children {
        let (child_total, child_visible) = assign_counts(outlines, child);
        total += 1 + child_total;
        visible += 1 + if outlines.is_open(child) { child_visible } else { 0 };
    }
    let count = if outlines.is_open(id) { visible } else { -total };
    outlines.set_count(id, count);
    (total, visible)
}

#[test]
fn test_count_convention_and_omission() {
    let mut registry = DocumentRegistry::new();
    registry.begin_page();
    let mut outlines = Outlines::new();
    let root = outlines.root();

    let open_chapter = outlines.add(&mut registry, root, "Open", None, true).unwrap();
    outlines.add(&mut registry, open_chapter, "Leaf 1", None, true).unwrap();
    outlines.add(&mut registry, open_chapter, "Leaf 2", None, true).unwrap();

    let closed_chapter = outlines.add(&mut registry, root, "Closed", None, false).unwrap();
    let closed_child = outlines
        .add(&mut registry, closed_chapter, "Hidden", None, true)
        .unwrap();

    assign_counts(&mut outlines, root);
    assert_eq!(outlines.count(open_chapter), 2);
    assert_eq!(outlines.count(closed_chapter), -1);
    assert_eq!(outlines.count(closed_child), 0);

    // A leaf's zero count is omitted from its dictionary entirely.
    let leaf_dict = outlines.to_dictionary(&mut registry, closed_child);
    assert!(!leaf_dict.as_dict().unwrap().contains_key("Count"));

    let closed_dict = outlines.to_dictionary(&mut registry, closed_chapter);
    assert_eq!(
        closed_dict.as_dict().unwrap().get("Count").and_then(Object::as_integer),
        Some(-1)
    );
}

#[test]
fn test_outline_dictionary_bytes() {
    let mut registry = DocumentRegistry::new();
    let page = registry.begin_page();
    let mut outlines = Outlines::new();
    let root = outlines.root();
    let entry = outlines
        .add(&mut registry, root, "Intro", Some(Destination::new(FitMode::FitV, 50.0)), true)
        .unwrap();
    outlines.set_style(entry, OutlineStyle::BOLD | OutlineStyle::ITALIC);

    let root_ref = outlines.reference(&mut registry, root);
    let dict = outlines.to_dictionary(&mut registry, entry);
    let rendered = ObjectSerializer::new().serialize_to_string(&dict);

    assert!(rendered.contains("/Title (Intro)"));
    assert!(rendered.contains(&format!("/Parent {}", root_ref)));
    assert!(rendered.contains(&format!("/Dest [{}/FitV 50]", page)));
    assert!(rendered.contains("/F 3"));
}

#[test]
fn test_unicode_title_rendered_as_text_string() {
    let mut registry = DocumentRegistry::new();
    registry.begin_page();
    let mut outlines = Outlines::new();
    let root = outlines.root();
    let entry = outlines.add(&mut registry, root, "Einführung", None, true).unwrap();

    let dict = outlines.to_dictionary(&mut registry, entry);
    let rendered = ObjectSerializer::new().serialize_to_string(&dict);
    // UTF-16BE with BOM hex string
    assert!(rendered.contains("/Title <FEFF"));
}

#[test]
fn test_sibling_order_preserved() {
    let mut registry = DocumentRegistry::new();
    registry.begin_page();
    let mut outlines = Outlines::new();
    let root = outlines.root();

    let mut added = Vec::new();
    for i in 0..10 {
        added.push(
            outlines
                .add(&mut registry, root, format!("Entry {}", i), None, true)
                .unwrap(),
        );
    }
    assert_eq!(outlines.children(root), added.as_slice());
}

#[test]
fn test_destination_to_object_matches_elements() {
    let mut dest = Destination::new(FitMode::FitBH, 12.5);
    dest.add_page(ObjectRef::new(9, 0));
    let obj = dest.to_object();
    assert_eq!(obj.as_array().map(|a| a.len()), Some(3));
    let rendered = ObjectSerializer::new().serialize_to_string(&obj);
    assert_eq!(rendered, "[9 0 R/FitBH 12.5]");
}
