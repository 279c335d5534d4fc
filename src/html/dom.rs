use std::fmt::Display;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DOMNode {
    pub children: Vec<DOMNode>,
    pub node_type: DOMNodeType,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DOMNodeType {
    Element(DOMElement),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DOMElement {
    pub tag_name: String,
    pub attributes: DOMAttributes,
}

/// Attributes of an element, kept in insertion order
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DOMAttributes(Vec<(String, String)>);

impl DOMAttributes {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Set `name` to `value`. An existing attribute keeps its position and has its value replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DOMAttributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::empty();
        iter.into_iter()
            .for_each(|(name, value)| attributes.insert(name, value));
        attributes
    }
}

/// Build a [`DOMAttributes`] from `name => value` pairs, in order
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::html::DOMAttributes::empty()
    };
    ($($name:expr => $value:expr),* $(,)?) => {
        $crate::html::DOMAttributes::from_iter([$(($name.to_string(), $value.to_string())),*])
    };
}

impl DOMElement {
    pub fn new(name: impl Display, attributes: Option<DOMAttributes>) -> Self {
        Self {
            tag_name: name.to_string(),
            attributes: attributes.unwrap_or_default(),
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}

impl DOMNode {
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            children: vec![],
            node_type: DOMNodeType::Text(data.into()),
        }
    }

    pub fn comment(data: impl Into<String>) -> Self {
        Self {
            children: vec![],
            node_type: DOMNodeType::Comment(data.into()),
        }
    }

    pub fn element(name: impl Display, attributes: DOMAttributes, children: Vec<DOMNode>) -> Self {
        Self {
            children,
            node_type: DOMNodeType::Element(DOMElement::new(name, Some(attributes))),
        }
    }

    /// Element with children but no attributes
    pub fn tag(name: impl Display, children: Vec<DOMNode>) -> Self {
        Self::element(name, DOMAttributes::empty(), children)
    }

    pub fn as_element(&self) -> Option<&DOMElement> {
        match &self.node_type {
            DOMNodeType::Element(elt) => Some(elt),
            _ => None,
        }
    }
}

impl From<DOMElement> for DOMNode {
    fn from(elt: DOMElement) -> Self {
        Self {
            children: vec![],
            node_type: DOMNodeType::Element(elt),
        }
    }
}

impl From<&str> for DOMNode {
    fn from(s: &str) -> Self {
        DOMNode::text(s)
    }
}

impl From<String> for DOMNode {
    fn from(s: String) -> Self {
        DOMNode::text(s)
    }
}

#[cfg(test)]
#[test]
fn test_attribute_order() {
    let attrs = attributes!("type" => "text", "id" => "name", "class" => "wide");
    assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["type", "id", "class"]);
    assert_eq!(attrs.get("id"), Some("name"));
    assert_eq!(attrs.get("missing"), None);
}

#[cfg(test)]
#[test]
fn test_attribute_replace_keeps_position() {
    let mut attrs = attributes!("a" => 1, "b" => 2);
    attrs.insert("a", "3");
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
}

#[cfg(test)]
#[test]
fn test_node_builders() {
    let node: DOMNode = DOMElement::new("p", None).into();
    assert!(node.children.is_empty());
    assert_eq!(node.as_element().map(|e| e.tag_name.as_str()), Some("p"));

    let text: DOMNode = "Some paragraph".into();
    assert_eq!(text.node_type, DOMNodeType::Text("Some paragraph".to_string()));
    assert!(text.as_element().is_none());
}
