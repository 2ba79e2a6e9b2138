//! Retained element tree produced by the renderers.
//!
//! A `Node` describes one element: its tag, classes, attributes, text and
//! children, plus the click behaviour the dismissal policy needs. Nodes are
//! addressed by a `NodePath` of child indices from the root, which is how
//! clicks get routed back from the painter.

use std::collections::BTreeMap;

use crate::modal::DialogAction;

/// Child indices from the root node to a target node. Empty = the root.
pub type NodePath = Vec<usize>;

/// Element kinds the renderers and callers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Aside,
    Section,
    Article,
    Header,
    Footer,
    Button,
    I,
    H1,
    H2,
    P,
    Span,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Aside => "aside",
            Self::Section => "section",
            Self::Article => "article",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Button => "button",
            Self::I => "i",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::P => "p",
            Self::Span => "span",
        }
    }
}

/// One element of a rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<Node>,
    /// Action emitted when a click reaches this node
    pub on_click: Option<DialogAction>,
    /// Clicks that reach this node do not bubble further up
    pub stop_propagation: bool,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
            on_click: None,
            stop_propagation: false,
        }
    }

    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(mut self, action: DialogAction) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Node at `path`, or None if any index is out of range.
    pub fn at(&self, path: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &index in path {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// Depth-first search for the first node carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<NodePath> {
        if self.has_class(class) {
            return Some(Vec::new());
        }
        for (index, child) in self.children.iter().enumerate() {
            if let Some(mut path) = child.find_by_class(class) {
                path.insert(0, index);
                return Some(path);
            }
        }
        None
    }

    /// Total number of nodes in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// True if any node in this subtree has a click action.
    pub fn is_interactive(&self) -> bool {
        self.on_click.is_some() || self.children.iter().any(Node::is_interactive)
    }
}

/// Resolve a click on the node at `path`.
///
/// The click starts at the target and bubbles towards the root. Every node on
/// the way contributes its action; a node flagged `stop_propagation` ends the
/// walk after contributing its own. An invalid path yields no actions.
pub fn dispatch_click(root: &Node, path: &[usize]) -> Vec<DialogAction> {
    let mut chain: Vec<&Node> = Vec::with_capacity(path.len() + 1);
    let mut node = root;
    chain.push(node);
    for &index in path {
        match node.children.get(index) {
            Some(child) => {
                node = child;
                chain.push(node);
            }
            None => {
                tracing::warn!(?path, "click dispatched to a path outside the tree");
                return Vec::new();
            }
        }
    }

    let mut actions = Vec::new();
    for node in chain.into_iter().rev() {
        if let Some(action) = node.on_click {
            actions.push(action);
        }
        if node.stop_propagation {
            break;
        }
    }
    tracing::trace!(?path, count = actions.len(), "click resolved");
    actions
}
