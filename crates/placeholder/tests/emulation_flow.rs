//! Full-session flow: selection, attach, and a focus/type/clear/blur round
//! trip against a host without native placeholder rendering.

use dom::{DomTree, Id, Node, attr, collect_placeholder_candidates, has_attr};
use placeholder::{
    Environment, IDLE_CLASS, Options, Outcome, OverlayStore, Signal, dispatch, emulate,
    overlay_visible,
};

fn element(
    id: u32,
    name: &str,
    attributes: &[(&str, Option<&str>)],
    style: &[(&str, &str)],
    children: Vec<Node>,
) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect(),
        style: style
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        children,
    }
}

fn sample_document() -> Node {
    Node::Document {
        id: Id(0),
        children: vec![element(
            1,
            "body",
            &[],
            &[],
            vec![element(
                2,
                "form",
                &[],
                &[],
                vec![
                    element(
                        3,
                        "input",
                        &[("type", Some("text")), ("placeholder", Some("Name"))],
                        &[
                            ("left", "10px"),
                            ("top", "20px"),
                            ("width", "100px"),
                            ("height", "20px"),
                        ],
                        Vec::new(),
                    ),
                    element(
                        4,
                        "input",
                        &[("type", Some("checkbox")), ("placeholder", Some("nope"))],
                        &[],
                        Vec::new(),
                    ),
                ],
            )],
        )],
    }
}

fn set_value(dom: &mut DomTree, target: Id, value: &str) {
    let node = dom.node_mut(target).expect("target should exist");
    dom::set_attr(node, "value", Some(value.to_string()));
}

#[test]
fn end_to_end_name_scenario() {
    let mut dom = DomTree::new(sample_document());
    let mut store = OverlayStore::new();

    let mut candidates = Vec::new();
    collect_placeholder_candidates(dom.root(), &mut candidates);
    assert_eq!(candidates, vec![Id(3), Id(4)]);

    let outcome = emulate(
        &mut dom,
        &candidates,
        &Environment::legacy(),
        &Options::default(),
        &mut store,
    );
    // The checkbox is selected but never emulated.
    assert_eq!(
        outcome,
        Outcome::Emulated {
            attached: 1,
            skipped: 1
        }
    );

    // Exactly one overlay, sitting right before the target, geometry from
    // the target's box, text carried over.
    let form = dom.node(Id(2)).unwrap();
    let labels: Vec<&Node> = form
        .children()
        .iter()
        .filter(|c| c.is_element_named("label"))
        .collect();
    assert_eq!(labels.len(), 1);
    let overlay = labels[0];
    assert!(form.children()[0].is_element_named("label"));
    assert_eq!(attr(overlay, "class"), Some(IDLE_CLASS));
    assert_eq!(dom::style_value(overlay, "left"), Some("10px"));
    assert_eq!(dom::style_value(overlay, "top"), Some("20px"));
    assert_eq!(dom::style_value(overlay, "width"), Some("100px"));
    assert_eq!(dom::style_value(overlay, "height"), Some("20px"));
    match &overlay.children()[0] {
        Node::Text { text, .. } => assert_eq!(text, "Name"),
        other => panic!("expected text child, got {other:?}"),
    }
    let overlay_id = overlay.id();
    assert!(overlay_visible(&dom, overlay_id));

    // The native attribute is consumed, the text preserved for reuse.
    let target = dom.node(Id(3)).unwrap();
    assert!(!has_attr(target, "placeholder"));
    assert_eq!(attr(target, "data-placeholder"), Some("Name"));

    // Typing hides the overlay.
    dispatch(&mut dom, &mut store, Id(3), Signal::Focus);
    set_value(&mut dom, Id(3), "A");
    dispatch(&mut dom, &mut store, Id(3), Signal::Input);
    assert!(!overlay_visible(&dom, overlay_id));

    // Clearing and blurring shows it again, back on the idle class.
    set_value(&mut dom, Id(3), "");
    dispatch(&mut dom, &mut store, Id(3), Signal::Input);
    dispatch(&mut dom, &mut store, Id(3), Signal::Blur);
    assert!(overlay_visible(&dom, overlay_id));
    assert_eq!(
        attr(dom.node(overlay_id).unwrap(), "class"),
        Some(IDLE_CLASS)
    );
}

#[test]
fn repeated_invocations_stay_idempotent_across_the_document() {
    let mut dom = DomTree::new(sample_document());
    let mut store = OverlayStore::new();
    let env = Environment::legacy();
    let opts = Options::default();

    let mut candidates = Vec::new();
    collect_placeholder_candidates(dom.root(), &mut candidates);

    emulate(&mut dom, &candidates, &env, &opts, &mut store);
    emulate(&mut dom, &candidates, &env, &opts, &mut store);
    emulate(&mut dom, &candidates, &env, &opts, &mut store);

    let form = dom.node(Id(2)).unwrap();
    let labels = form
        .children()
        .iter()
        .filter(|c| c.is_element_named("label"))
        .count();
    assert_eq!(labels, 1);
    assert_eq!(store.overlay_count(), 1);
}
