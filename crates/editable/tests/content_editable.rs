mod common;

use common::{page, surface_selection};
use dom::{Document, DomPoint, DomSelection, Node, first_element_child};
use editable::{
    ChangeSource, ChangeStats, CommitOutcome, ContentEditable, EditError, EditableOptions,
    FreeFormHost, HostSurface, MemoryClipboard, RefSink, TransformError,
};
use input_core::{EditEvent, EditableState, EditableValue, Key, SelectionRange};
use pollster::block_on;
use std::cell::RefCell;
use std::rc::Rc;

fn mounted(text: &str, sel: SelectionRange, opts: EditableOptions) -> (Document, ContentEditable) {
    let mut p = page("", "");
    let mut surface = ContentEditable::new(p.surface, opts);
    surface.mount(&mut p.doc, text, Some(sel)).unwrap();
    (p.doc, surface)
}

fn send(
    surface: &mut ContentEditable,
    doc: &mut Document,
    event: EditEvent,
) -> Result<CommitOutcome, EditError> {
    let mut event = event;
    let mut clipboard = MemoryClipboard::new();
    block_on(surface.handle_event(&mut event, doc, &mut clipboard))
}

#[test]
fn mount_renders_wrapper_placeholder_and_container_class() {
    let opts = EditableOptions {
        placeholder: Some("Write here".to_string()),
        placeholder_css: Some("muted".to_string()),
        linear: true,
        ..EditableOptions::default()
    };
    let (doc, surface) = mounted("", SelectionRange::caret(0), opts);

    let root = doc.node(surface.root()).unwrap();
    assert_eq!(root.attr("contenteditable"), Some("true"));
    assert_eq!(root.attr("class"), Some("linear-container"));
    let children = root.children();
    assert_eq!(children.len(), 2);
    assert!(children[0].is_element("span"));
    assert_eq!(children[1].attr("class"), Some("placeholder muted"));
}

#[test]
fn typed_insertion_replaces_the_collapsed_selection() {
    let (mut doc, mut surface) = mounted("ab", SelectionRange::caret(1), EditableOptions::default());
    send(&mut surface, &mut doc, EditEvent::text_input("x")).unwrap();

    assert_eq!(surface.state(), &EditableState::text("axb", SelectionRange::caret(2)));
    assert_eq!(surface_selection(&doc, surface.root()), Some(SelectionRange::caret(2)));
}

#[test]
fn paste_lands_caret_after_pasted_text() {
    let (mut doc, mut surface) = mounted("hi ", SelectionRange::caret(3), EditableOptions::default());
    send(&mut surface, &mut doc, EditEvent::paste("world")).unwrap();

    assert_eq!(surface.state(), &EditableState::text("hi world", SelectionRange::caret(8)));
    assert_eq!(doc.text_content(surface.root()).as_deref(), Some("hi world"));
}

#[test]
fn backspace_over_a_selection_empties_the_surface_and_shows_placeholder() {
    let opts = EditableOptions {
        placeholder: Some("empty".to_string()),
        ..EditableOptions::default()
    };
    let (mut doc, mut surface) = mounted("ab", SelectionRange::new(0, 2), opts);
    assert_eq!(doc.node(surface.root()).unwrap().children().len(), 1);

    send(&mut surface, &mut doc, EditEvent::key_down(Key::Backspace)).unwrap();

    assert_eq!(surface.state(), &EditableState::text("", SelectionRange::caret(0)));
    assert_eq!(doc.node(surface.root()).unwrap().children().len(), 2);
    // The placeholder is rendered but never counted as content.
    assert_eq!(surface_selection(&doc, surface.root()), Some(SelectionRange::caret(0)));
}

#[test]
fn cut_moves_selected_text_to_the_clipboard() {
    let (mut doc, mut surface) =
        mounted("hello world", SelectionRange::new(5, 11), EditableOptions::default());
    let mut clipboard = MemoryClipboard::new();
    let mut event = EditEvent::cut();
    block_on(surface.handle_event(&mut event, &mut doc, &mut clipboard)).unwrap();

    assert!(event.default_prevented());
    assert_eq!(editable::Clipboard::read_text(&clipboard).as_deref(), Some(" world"));
    assert_eq!(surface.state(), &EditableState::text("hello", SelectionRange::caret(5)));
}

#[test]
fn keep_overflow_only_flags_the_transform() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let opts = EditableOptions {
        max_length: Some(5),
        keep_overflow: true,
        ..EditableOptions::default()
    };
    let mut p = page("", "");
    let mut surface = ContentEditable::new(p.surface, opts).with_transform(
        move |value: EditableValue, stats: ChangeStats| {
            log.borrow_mut().push(stats.clone());
            async move { Ok::<_, TransformError>(value) }
        },
    );
    surface.mount(&mut p.doc, "abcde", Some(SelectionRange::caret(5))).unwrap();
    send(&mut surface, &mut p.doc, EditEvent::text_input("f")).unwrap();

    assert_eq!(surface.state(), &EditableState::text("abcdef", SelectionRange::caret(6)));
    assert_eq!(
        *seen.borrow(),
        vec![ChangeStats {
            overflows: true,
            source: ChangeSource::Target(p.surface),
        }]
    );
}

#[test]
fn truncating_overflow_clamps_the_caret_into_the_value() {
    let opts = EditableOptions {
        max_length: Some(5),
        ..EditableOptions::default()
    };
    let (mut doc, mut surface) = mounted("abcde", SelectionRange::caret(5), opts);
    send(&mut surface, &mut doc, EditEvent::paste("xyz")).unwrap();
    assert_eq!(surface.state(), &EditableState::text("abcde", SelectionRange::caret(5)));
}

#[test]
fn rejected_transform_keeps_content_and_selection() {
    let mut p = page("", "");
    let mut surface = ContentEditable::new(p.surface, EditableOptions::default()).with_transform(
        |_: EditableValue, _: ChangeStats| async move {
            Err::<EditableValue, _>(TransformError::new("server said no"))
        },
    );
    surface.mount(&mut p.doc, "keep", Some(SelectionRange::caret(2))).unwrap();
    let before = p.doc.selection();

    let err = send(&mut surface, &mut p.doc, EditEvent::text_input("!")).unwrap_err();
    assert!(matches!(err, EditError::TransformRejected(ref e) if e.message() == "server said no"));
    assert_eq!(surface.state(), &EditableState::text("keep", SelectionRange::caret(2)));
    assert_eq!(p.doc.text_content(p.surface).as_deref(), Some("keep"));
    assert_eq!(p.doc.selection(), before);
}

#[test]
fn transform_output_length_does_not_move_the_caret_by_default() {
    let mut p = page("", "");
    let mut surface = ContentEditable::new(p.surface, EditableOptions::default()).with_transform(
        |value: EditableValue, _: ChangeStats| async move {
            Ok::<_, TransformError>(EditableValue::Text(format!(">>{value}")))
        },
    );
    surface.mount(&mut p.doc, "ab", Some(SelectionRange::caret(2))).unwrap();
    send(&mut surface, &mut p.doc, EditEvent::text_input("c")).unwrap();

    assert_eq!(surface.state(), &EditableState::text(">>abc", SelectionRange::caret(3)));
}

#[test]
fn follow_transform_caret_policy_tracks_inserted_prefix() {
    let mut p = page("", "");
    let opts = EditableOptions {
        caret_policy: editable::CaretPolicy::FollowTransform,
        ..EditableOptions::default()
    };
    let mut surface = ContentEditable::new(p.surface, opts).with_transform(
        |value: EditableValue, _: ChangeStats| async move {
            Ok::<_, TransformError>(EditableValue::Text(format!(">>{value}")))
        },
    );
    surface.mount(&mut p.doc, "ab", Some(SelectionRange::caret(2))).unwrap();
    send(&mut surface, &mut p.doc, EditEvent::text_input("c")).unwrap();

    assert_eq!(surface.state(), &EditableState::text(">>abc", SelectionRange::caret(5)));
}

#[test]
fn prevent_post_computing_leaves_the_live_selection_alone() {
    let opts = EditableOptions {
        prevent_post_computing: true,
        ..EditableOptions::default()
    };
    let (mut doc, mut surface) = mounted("ab", SelectionRange::caret(1), opts);
    send(&mut surface, &mut doc, EditEvent::text_input("x")).unwrap();

    assert_eq!(surface.state().value, EditableValue::from("axb"));
    assert_eq!(surface.state().selection(), SelectionRange::caret(1));
    assert!(surface.controller().scheduler().pending().is_none());
    // The re-render dropped the old text node; nothing restored a new one.
    assert_eq!(surface_selection(&doc, surface.root()), None);
}

#[test]
fn prevent_post_computing_keeps_editing_at_the_committed_caret() {
    let opts = EditableOptions {
        prevent_post_computing: true,
        ..EditableOptions::default()
    };
    let (mut doc, mut surface) = mounted("ab", SelectionRange::caret(1), opts);
    send(&mut surface, &mut doc, EditEvent::text_input("x")).unwrap();
    send(&mut surface, &mut doc, EditEvent::text_input("y")).unwrap();

    assert_eq!(surface.state(), &EditableState::text("ayxb", SelectionRange::caret(1)));
    assert_eq!(doc.text_content(surface.root()).as_deref(), Some("ayxb"));
}

#[test]
fn mount_without_selection_seeds_the_caret_at_the_end() {
    let mut p = page("", "");
    let mut surface = ContentEditable::new(p.surface, EditableOptions::default());
    surface.mount(&mut p.doc, "abc", None).unwrap();
    assert_eq!(surface.state(), &EditableState::text("abc", SelectionRange::caret(3)));
    assert_eq!(surface_selection(&p.doc, p.surface), None);

    send(&mut surface, &mut p.doc, EditEvent::text_input("x")).unwrap();
    assert_eq!(surface.state(), &EditableState::text("abcx", SelectionRange::caret(4)));
    assert_eq!(surface_selection(&p.doc, p.surface), Some(SelectionRange::caret(4)));
}

#[test]
fn edits_follow_the_state_caret_when_the_document_selection_is_elsewhere() {
    let mut p = page("", "");
    let mut surface = ContentEditable::new(p.surface, EditableOptions::default());
    surface.mount(&mut p.doc, "hello", Some(SelectionRange::caret(2))).unwrap();

    // The selection moved into the textarea.
    p.doc.set_selection(Some(DomSelection::collapsed(DomPoint::new(p.textarea, 0))));

    send(&mut surface, &mut p.doc, EditEvent::text_input("-")).unwrap();
    assert_eq!(surface.state(), &EditableState::text("he-llo", SelectionRange::caret(3)));
}

#[test]
fn reads_and_restores_against_the_same_wrapped_node() {
    // root > [ span > [ "hel", b > "lo" ], " tail" ]: the trailing text is
    // outside the content wrapper and must never shift offsets. The surface
    // owns the root's children, so the re-render drops it.
    let mut doc = Document::new(vec![Node::element(
        "div",
        vec![
            Node::element(
                "span",
                vec![Node::text("hel"), Node::element("b", vec![Node::text("lo")])],
            ),
            Node::text(" tail"),
        ],
    )]);
    let root = doc.root().children()[0].id();
    let lo = {
        let span = first_element_child(doc.node(root).unwrap()).unwrap();
        span.children()[1].children()[0].id()
    };
    doc.set_selection(Some(DomSelection::collapsed(DomPoint::new(lo, 1))));

    let host = FreeFormHost::new(&mut doc, root);
    assert_eq!(host.read_text().unwrap(), "hello");
    assert_eq!(host.read_selection().unwrap(), Some(SelectionRange::caret(4)));

    let mut controller = editable::EditableController::new(EditableOptions::default(), true);
    let mut clipboard = MemoryClipboard::new();
    let mut host = FreeFormHost::new(&mut doc, root);
    let mut event = EditEvent::key_down(Key::Delete);
    let out = block_on(controller.apply(&mut event, &mut host, &mut clipboard)).unwrap();

    assert_eq!(out.state(), Some(&EditableState::text("hell", SelectionRange::caret(4))));
    assert_eq!(surface_selection(&doc, root), Some(SelectionRange::caret(4)));
    assert_eq!(doc.node(root).unwrap().children().len(), 1);
    assert_eq!(doc.text_content(root).as_deref(), Some("hell"));
}

#[test]
fn committed_caret_always_matches_what_the_surface_reports() {
    let (mut doc, mut surface) = mounted("", SelectionRange::caret(0), EditableOptions::default());
    let events = [
        EditEvent::text_input("h€llo"),
        EditEvent::key_down(Key::Backspace),
        EditEvent::paste("\r\nworld"),
        EditEvent::key_down(Key::Backspace),
        EditEvent::text_input("d"),
    ];
    for event in events {
        send(&mut surface, &mut doc, event).unwrap();
        assert_eq!(
            surface_selection(&doc, surface.root()),
            Some(surface.state().selection()),
            "after committing {:?}",
            surface.state()
        );
    }
    assert_eq!(surface.state().value, EditableValue::from("h€ll\nworld"));
}

#[test]
fn restoring_the_same_caret_twice_does_not_drift() {
    let (mut doc, surface) = mounted("hello", SelectionRange::caret(0), EditableOptions::default());
    for _ in 0..2 {
        let mut host = surface.host(&mut doc).unwrap();
        host.write_selection(SelectionRange::caret(3)).unwrap();
        assert_eq!(host.read_selection().unwrap(), Some(SelectionRange::caret(3)));
    }
}

#[test]
fn unmount_detaches_and_clears_the_ref() {
    let (sink, cell) = RefSink::container();
    let mut p = page("", "");
    let mut surface = ContentEditable::new(p.surface, EditableOptions::default()).with_ref(sink);
    surface.mount(&mut p.doc, "x", None).unwrap();
    assert_eq!(*cell.borrow(), Some(p.surface));

    surface.unmount();
    assert_eq!(*cell.borrow(), None);
    let err = send(&mut surface, &mut p.doc, EditEvent::text_input("y")).unwrap_err();
    assert!(matches!(err, EditError::Detached(_)));
}
