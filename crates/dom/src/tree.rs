use crate::types::{Id, Node, NodeId};

/// Owns a document root and allocates structural ids for nodes created
/// after the fact (overlays). Allocation starts past the highest id already
/// present so programmatically built trees never collide with new nodes.
#[derive(Clone, Debug)]
pub struct DomTree {
    root: Node,
    next_id: NodeId,
}

impl DomTree {
    pub fn new(root: Node) -> Self {
        let next_id = max_id(&root).wrapping_add(1);
        Self { root, next_id }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn alloc_id(&mut self) -> Id {
        let id = Id(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        find(&self.root, id)
    }

    pub fn node_mut(&mut self, id: Id) -> Option<&mut Node> {
        find_mut(&mut self.root, id)
    }

    pub fn parent_of(&self, id: Id) -> Option<Id> {
        parent(&self.root, id)
    }

    /// Splice `node` into the tree immediately before the `anchor` sibling.
    /// Returns `false` if the anchor is missing or has no parent (the root).
    pub fn insert_before(&mut self, anchor: Id, node: Node) -> bool {
        match try_insert(&mut self.root, anchor, node) {
            None => true,
            Some(_rejected) => {
                log::trace!(target: "dom.tree", "insert_before: no parent for anchor {anchor:?}");
                false
            }
        }
    }
}

fn max_id(node: &Node) -> NodeId {
    let mut max = node.id().0;
    for child in node.children() {
        max = max.max(max_id(child));
    }
    max
}

fn find(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children().iter().find_map(|c| find(c, id))
}

fn find_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?.iter_mut().find_map(|c| find_mut(c, id))
}

fn parent(node: &Node, id: Id) -> Option<Id> {
    let children = node.children();
    if children.iter().any(|c| c.id() == id) {
        return Some(node.id());
    }
    children.iter().find_map(|c| parent(c, id))
}

// Hands the node back (`Some`) when no spot was found in this subtree.
fn try_insert(node: &mut Node, anchor: Id, new: Node) -> Option<Node> {
    let Some(children) = node.children_mut() else {
        return Some(new);
    };
    if let Some(idx) = children.iter().position(|c| c.id() == anchor) {
        children.insert(idx, new);
        return None;
    }
    let mut new = new;
    for child in children {
        match try_insert(child, anchor, new) {
            None => return None,
            Some(back) => new = back,
        }
    }
    Some(new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: u32, s: &str) -> Node {
        Node::Text {
            id: Id(id),
            text: s.to_string(),
        }
    }

    fn elem(id: u32, name: &str, children: Vec<Node>) -> Node {
        Node::Element {
            id: Id(id),
            name: name.to_string(),
            attributes: Vec::new(),
            style: Vec::new(),
            children,
        }
    }

    fn doc(children: Vec<Node>) -> Node {
        Node::Document {
            id: Id(0),
            children,
        }
    }

    #[test]
    fn alloc_starts_past_existing_ids() {
        let mut tree = DomTree::new(doc(vec![elem(7, "div", vec![text(3, "x")])]));
        assert_eq!(tree.alloc_id(), Id(8));
        assert_eq!(tree.alloc_id(), Id(9));
    }

    #[test]
    fn finds_nodes_and_parents() {
        let tree = DomTree::new(doc(vec![elem(1, "div", vec![elem(2, "input", Vec::new())])]));
        assert!(tree.node(Id(2)).is_some());
        assert!(tree.node(Id(9)).is_none());
        assert_eq!(tree.parent_of(Id(2)), Some(Id(1)));
        assert_eq!(tree.parent_of(Id(1)), Some(Id(0)));
        assert_eq!(tree.parent_of(Id(0)), None);
    }

    #[test]
    fn insert_before_splices_in_front_of_anchor() {
        let mut tree = DomTree::new(doc(vec![elem(
            1,
            "div",
            vec![elem(2, "input", Vec::new()), elem(3, "input", Vec::new())],
        )]));

        let id = tree.alloc_id();
        assert!(tree.insert_before(Id(3), elem(id.0, "label", Vec::new())));

        let parent = tree.node(Id(1)).unwrap();
        let order: Vec<Id> = parent.children().iter().map(Node::id).collect();
        assert_eq!(order, vec![Id(2), id, Id(3)]);
    }

    #[test]
    fn insert_before_root_is_rejected() {
        let mut tree = DomTree::new(doc(Vec::new()));
        assert!(!tree.insert_before(Id(0), elem(1, "label", Vec::new())));
    }
}
