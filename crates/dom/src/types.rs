pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        style: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    /// Element with no id yet; ids are handed out by [`Document`](crate::Document).
    pub fn element(name: &str, children: Vec<Node>) -> Self {
        Node::Element {
            id: Id(0),
            name: name.to_string(),
            attributes: Vec::new(),
            style: Vec::new(),
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            id: Id(0),
            text: text.into(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, key: &str, value: Option<&str>) -> Self {
        if let Node::Element { attributes, .. } = &mut self {
            attributes.push((key.to_string(), value.map(str::to_string)));
        }
        self
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.set_id(id);
        self
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Document { id, .. } => *id = new_id,
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
            Node::Comment { id, .. } => *id = new_id,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } => Some(children),
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Tag name, for elements.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_element(&self, tag: &str) -> bool {
        self.name().is_some_and(|n| n.eq_ignore_ascii_case(tag))
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }

    /// Set or replace an attribute. No-op on non-elements.
    pub fn set_attr(&mut self, key: &str, value: Option<&str>) {
        if let Node::Element { attributes, .. } = self {
            let value = value.map(str::to_string);
            match attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
                Some((_, v)) => *v = value,
                None => attributes.push((key.to_string(), value)),
            }
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { style, .. } => style
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Set or replace an inline style declaration. No-op on non-elements.
    pub fn set_style(&mut self, key: &str, value: &str) {
        if let Node::Element { style, .. } = self {
            match style.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
                Some((_, v)) => *v = value.to_string(),
                None => style.push((key.to_string(), value.to_string())),
            }
        }
    }
}
