// src/dom/tree.rs
// =============================================================================
// An arena-backed, read-only HTML tree.
//
// All nodes live in one Vec and refer to each other through NodeId indices,
// so the tree has no shared ownership and can never contain a cycle.
// The Document node is always stored at index 0.
// =============================================================================

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The document root is always the first node in the arena.
    pub const ROOT: NodeId = NodeId(0);
}

/// One key/value pair on an element or a doctype declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An element's tag name and its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Element {
    // Returns the value of the first attribute with the given key
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The root of the tree
    Document,
    /// `<!DOCTYPE ...>`, carrying `public` / `system` identifiers as attributes
    Doctype(Vec<Attribute>),
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub next_sibling: Option<NodeId>,
}

/// A parsed HTML document.
///
/// Built once (by [`crate::dom::parse_document`] or by hand with the
/// `append_*` methods) and then only read.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    // Creates a tree holding only the Document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
                next_sibling: None,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    // NodeIds are only ever handed out by this tree, so indexing cannot
    // go out of bounds for ids that came from it
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.first().copied()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists
        self.nodes.len() == 1
    }

    // Adds a node as the last child of `parent` and returns its id
    //
    // The previous last child (if any) gets its next_sibling pointed
    // at the new node, so sibling links always follow document order.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());

        if let Some(&last) = self.nodes[parent.0].children.last() {
            self.nodes[last.0].next_sibling = Some(id);
        }

        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            next_sibling: None,
        });
        self.nodes[parent.0].children.push(id);

        id
    }

    pub fn append_element(&mut self, parent: NodeId, name: &str, attributes: Vec<Attribute>) -> NodeId {
        self.append(
            parent,
            NodeKind::Element(Element {
                name: name.to_string(),
                attributes,
            }),
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, NodeKind::Text(text.to_string()))
    }

    pub fn append_doctype(&mut self, attributes: Vec<Attribute>) -> NodeId {
        self.append(NodeId::ROOT, NodeKind::Doctype(attributes))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is an arena?
//    - One Vec owns every node, and nodes point at each other by index
//    - A NodeId is just that index wrapped in its own type
//    - Parents, children and siblings are all plain NodeIds, so there are
//      no Rc/RefCell and no borrow checker fights
//
// 2. Why wrap usize in NodeId instead of using usize directly?
//    - It's a "newtype": the compiler won't let you pass a heading count
//      where a node is expected
//    - The inner field is private, so ids can only come from a Document
//
// 3. What does impl Into<String> in Attribute::new mean?
//    - The function accepts anything that converts into a String
//    - Both Attribute::new("href", "/a") and Attribute::new(key, value)
//      with owned Strings work
//
// 4. Why #[derive(Clone, Copy)] on NodeId?
//    - Copy types are duplicated on assignment instead of moved
//    - A NodeId is one number, so copying it is free
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_only_root() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.kind(doc.root()), &NodeKind::Document);
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_append_links_siblings_in_order() {
        let mut doc = Document::new();
        let html = doc.append_element(doc.root(), "html", vec![]);
        let head = doc.append_element(html, "head", vec![]);
        let body = doc.append_element(html, "body", vec![]);

        assert_eq!(doc.children(html), &[head, body]);
        assert_eq!(doc.first_child(html), Some(head));
        assert_eq!(doc.next_sibling(head), Some(body));
        assert_eq!(doc.next_sibling(body), None);
        assert_eq!(doc.node(body).parent, Some(html));
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_attr_returns_first_match() {
        let element = Element {
            name: "a".to_string(),
            attributes: vec![
                Attribute::new("class", "nav"),
                Attribute::new("href", "/first"),
                Attribute::new("href", "/second"),
            ],
        };
        assert_eq!(element.attr("href"), Some("/first"));
        assert_eq!(element.attr("title"), None);
    }
}
