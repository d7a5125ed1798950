use super::*;
use crate::host::element::NodeRef;

fn rect(y: f64) -> Rect {
    Rect::new(0.0, y, 100.0, y + 50.0)
}

#[test]
fn marked_descendants_follow_document_order() {
    let mut doc = Document::new();
    let root = doc.create(doc.body(), rect(0.0));
    let a = doc.create(root, rect(0.0));
    let wrapper = doc.create(root, rect(60.0));
    let b = doc.create(wrapper, rect(60.0));
    let c = doc.create(wrapper, rect(120.0));
    let d = doc.create(root, rect(180.0));
    for el in [a, b, d] {
        doc.add_class(el, "animate-item");
    }
    doc.add_class(c, "other");
    doc.add_class(root, "animate-item");

    assert_eq!(doc.marked_descendants(root, "animate-item"), vec![a, b, d]);
}

#[test]
fn removed_subtree_answers_as_missing() {
    let mut doc = Document::new();
    let root = doc.create(doc.body(), rect(0.0));
    let child = doc.create(root, rect(0.0));
    doc.add_class(child, "animate-item");
    doc.remove(root);

    assert!(!doc.is_attached(root));
    assert!(!doc.is_attached(child));
    assert!(doc.bounds(child).is_none());
    assert!(doc.style(child).is_none());
    assert!(doc.marked_descendants(root, "animate-item").is_empty());

    doc.write_style(child, Property::Opacity, 0.5);
    doc.write_text(child, "ignored");
    assert_eq!(doc.text(child), Some(""));
}

#[test]
fn body_cannot_be_removed() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.remove(body);
    assert!(doc.is_attached(body));
}

#[test]
fn children_of_detached_parents_start_detached() {
    let mut doc = Document::new();
    let root = doc.create(doc.body(), rect(0.0));
    doc.remove(root);
    let late = doc.create(root, rect(0.0));
    assert!(!doc.is_attached(late));
}

#[test]
fn elements_lists_live_nodes_preorder() {
    let mut doc = Document::new();
    let a = doc.create(doc.body(), rect(0.0));
    let a1 = doc.create(a, rect(0.0));
    let b = doc.create(doc.body(), rect(100.0));
    let gone = doc.create(b, rect(100.0));
    doc.remove(gone);
    assert_eq!(doc.elements(), vec![doc.body(), a, a1, b]);
}

#[test]
fn node_ref_resolves_only_live_elements() {
    let mut doc = Document::new();
    let el = doc.create(doc.body(), rect(0.0));
    let handle = NodeRef::new();
    assert_eq!(handle.resolve(&doc), None);

    let shared = handle.clone();
    shared.attach(el);
    assert_eq!(handle.resolve(&doc), Some(el));

    doc.remove(el);
    assert_eq!(handle.get(), Some(el));
    assert_eq!(handle.resolve(&doc), None);
}

#[test]
fn attributes_and_text_round_trip() {
    let mut doc = Document::new();
    let el = doc.create(doc.body(), rect(0.0));
    doc.set_attribute(el, "data-target", "42");
    doc.write_text(el, "17");
    assert_eq!(doc.attribute(el, "data-target").as_deref(), Some("42"));
    assert_eq!(doc.attribute(el, "missing"), None);
    assert_eq!(doc.text(el), Some("17"));
}
