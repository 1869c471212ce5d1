//! Demo driver: build a small form document, run placeholder emulation
//! against a legacy host profile, then replay a short editing session and
//! dump the tree after each step.

use dom::{DomTree, Id, Node, collect_placeholder_candidates, outline, set_attr};
use placeholder::{Environment, Options, OverlayStore, Signal, dispatch, emulate};

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
                            ("width", "160px"),
                            ("height", "20px"),
                            ("font-size", "13px"),
                        ],
                        Vec::new(),
                    ),
                    element(
                        4,
                        "input",
                        &[
                            ("id", Some("email")),
                            ("type", Some("email")),
                            ("placeholder", Some("Email")),
                            ("value", Some("ada@example.org")),
                        ],
                        &[
                            ("left", "10px"),
                            ("top", "48px"),
                            ("width", "160px"),
                            ("height", "20px"),
                        ],
                        Vec::new(),
                    ),
                    element(
                        5,
                        "input",
                        &[("type", Some("checkbox")), ("placeholder", Some("ignored"))],
                        &[],
                        Vec::new(),
                    ),
                ],
            )],
        )],
    }
}

fn dump(title: &str, dom: &DomTree) {
    println!("--- {title}");
    for line in outline(dom.root()) {
        println!("{line}");
    }
    println!();
}

fn main() {
    let mut dom = DomTree::new(sample_document());
    let mut store = OverlayStore::new();
    let env = Environment::legacy();

    dump("before emulation", &dom);

    let mut candidates = Vec::new();
    collect_placeholder_candidates(dom.root(), &mut candidates);
    let outcome = emulate(&mut dom, &candidates, &env, &Options::default(), &mut store);
    println!("emulate over {} candidates: {outcome:?}\n", candidates.len());

    dump("after emulation", &dom);

    // A short editing session on the Name field.
    dispatch(&mut dom, &mut store, Id(3), Signal::Focus);
    dump("Name focused (overlay in focus class)", &dom);

    if let Some(node) = dom.node_mut(Id(3)) {
        set_attr(node, "value", Some("Ada".to_string()));
    }
    dispatch(&mut dom, &mut store, Id(3), Signal::Input);
    dump("typed \"Ada\" (overlay hidden)", &dom);

    if let Some(node) = dom.node_mut(Id(3)) {
        set_attr(node, "value", Some(String::new()));
    }
    dispatch(&mut dom, &mut store, Id(3), Signal::Input);
    dispatch(&mut dom, &mut store, Id(3), Signal::Blur);
    dump("cleared and blurred (overlay back, idle class)", &dom);
}
