use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use disclosure_dom::{DomError, Document, Element, EventKind, Handler, Key, NodeHandle, NodeRef};

fn counter() -> (Arc<AtomicUsize>, Handler) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    let handler = Handler::new(move |_| {
        inner.fetch_add(1, Ordering::SeqCst);
    });
    (count, handler)
}

// ============================================================================
// Mounting & Refs
// ============================================================================

#[test]
fn test_mount_renders_once() {
    let doc = Document::mount(|| Element::div().text("hello"));
    assert_eq!(doc.render_count(), 1);
    assert_eq!(doc.to_markup(), "<div>hello</div>");
}

#[test]
fn test_refs_attach_to_same_node() {
    let a = NodeRef::new();
    let b = NodeRef::new();
    let (a2, b2) = (a.clone(), b.clone());

    let _doc = Document::mount(move || {
        Element::div().child(Element::button().text("x").node_ref(&a2).node_ref(&b2))
    });

    assert_eq!(a.get(), Some(NodeHandle::root().child(0)));
    assert_eq!(a.get(), b.get());
}

#[test]
fn test_get_unknown_handle() {
    let doc = Document::mount(Element::div);
    let missing = NodeHandle::root().child(4);
    assert_eq!(doc.get(&missing).err(), Some(DomError::NodeNotFound(missing)));
}

// ============================================================================
// Click Dispatch
// ============================================================================

#[test]
fn test_click_runs_handlers_and_rerenders() {
    let (count, handler) = counter();
    let mut doc = Document::mount(move || {
        Element::div().child(Element::button().text("Go").on(EventKind::Click, handler.clone()))
    });

    let button = doc.find_by_text("go").unwrap();
    doc.click(&button).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(doc.render_count(), 2);
    assert_eq!(doc.focused(), Some(&button));
}

#[test]
fn test_click_bubbles_to_ancestors() {
    let (count, handler) = counter();
    let mut doc = Document::mount(move || {
        Element::div()
            .on(EventKind::Click, handler.clone())
            .child(Element::span().text("inner"))
    });

    let inner = doc.find_by_text("inner").unwrap();
    doc.click(&inner).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_prevented_mouse_down_keeps_focus() {
    let mut doc = Document::mount(|| {
        Element::div().child(
            Element::button()
                .text("Go")
                .on(EventKind::MouseDown, Handler::new(|cx| cx.prevent_default())),
        )
    });

    let button = doc.find_by_text("go").unwrap();
    doc.click(&button).unwrap();
    assert_eq!(doc.focused(), None);
}

#[test]
fn test_handler_focus_request() {
    let target = NodeRef::new();
    let target_in = target.clone();
    let mut doc = Document::mount(move || {
        let focus_ref = target_in.clone();
        Element::div()
            .child(
                Element::span()
                    .text("trigger")
                    .on(EventKind::Click, Handler::new(move |cx| cx.focus(&focus_ref))),
            )
            .child(
                Element::div()
                    .attr("tabindex", "-1")
                    .text("region")
                    .node_ref(&target_in),
            )
    });

    let trigger = doc.find_by_text("trigger").unwrap();
    doc.click(&trigger).unwrap();
    assert_eq!(doc.focused(), target.get().as_ref());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_space_and_enter_click_buttons() {
    let (count, handler) = counter();
    let mut doc = Document::mount(move || {
        Element::div().child(Element::button().text("Go").on(EventKind::Click, handler.clone()))
    });

    let button = doc.find_by_text("go").unwrap();
    doc.focus(&button).unwrap();

    assert!(doc.key(Key::Char(' ')).unwrap());
    assert!(doc.key(Key::Enter).unwrap());
    assert!(doc.key(Key::Char('x')).unwrap());
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_space_on_non_button_does_not_click() {
    let (count, handler) = counter();
    let mut doc = Document::mount(move || {
        Element::div().child(
            Element::div()
                .attr("tabindex", "0")
                .text("box")
                .on(EventKind::Click, handler.clone()),
        )
    });

    let node = doc.find_by_text("box").unwrap();
    doc.focus(&node).unwrap();
    doc.key(Key::Char(' ')).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_key_without_focus() {
    let mut doc = Document::mount(|| Element::div().child(Element::button().text("Go")));
    assert!(!doc.key(Key::Enter).unwrap());
}

#[test]
fn test_tab_skips_negative_tabindex_and_hidden() {
    let mut doc = Document::mount(|| {
        Element::div()
            .child(Element::button().text("first"))
            .child(Element::div().attr("tabindex", "-1").text("skipped"))
            .child(Element::div().flag("hidden", true).child(Element::button().text("hidden")))
            .child(Element::button().text("second"))
    });

    let first = doc.find_by_text("first").unwrap();
    let second = doc.find_by_text("second").unwrap();
    assert_eq!(doc.tab_order(), vec![first.clone(), second.clone()]);

    doc.focus(&first).unwrap();
    doc.key(Key::Tab).unwrap();
    assert_eq!(doc.focused(), Some(&second));
    doc.key(Key::Tab).unwrap();
    assert_eq!(doc.focused(), Some(&first));
    doc.key(Key::BackTab).unwrap();
    assert_eq!(doc.focused(), Some(&second));
}

#[test]
fn test_focus_non_focusable() {
    let mut doc = Document::mount(|| Element::div().child(Element::span().text("plain")));
    let span = doc.find_by_text("plain").unwrap();
    assert_eq!(doc.focus(&span), Err(DomError::NotFocusable(span.clone())));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_visibility_follows_hidden_ancestors() {
    let doc = Document::mount(|| {
        Element::div()
            .flag("hidden", true)
            .child(Element::span().text("inside"))
    });

    let inside = doc.find_by_text("inside").unwrap();
    assert!(!doc.is_visible(&inside));
    assert!(!doc.is_visible(&NodeHandle::root().child(9)));
}

#[test]
fn test_find_by_attr_and_tag() {
    let doc = Document::mount(|| {
        Element::div()
            .child(Element::button().attr("id", "one"))
            .child(Element::button().attr("id", "two"))
    });

    assert_eq!(doc.find_all_by_tag("button").len(), 2);
    assert_eq!(doc.find_by_attr("id", "two"), Some(NodeHandle::root().child(1)));
    assert_eq!(doc.find_by_attr("id", "three"), None);
}
