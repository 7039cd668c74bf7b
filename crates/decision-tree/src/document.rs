//! Tagged-element tree descriptions.
//!
//! An [`Element`] is the reader-agnostic form of a tree description: a tag,
//! string or number attributes, and ordered child elements. The
//! [`TreeBuilder`](crate::TreeBuilder) only ever sees elements, so any
//! document format that can produce them can describe a tree.

use std::collections::BTreeMap;
use std::fmt;

/// An attribute value: text or a number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    /// Text form of the value; numbers are not converted.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            AttrValue::Number(_) => None,
        }
    }

    /// Numeric form of the value, parsing numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(number) => Some(*number),
            AttrValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(number) => write!(f, "{}", number),
            AttrValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Text(text.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Text(text)
    }
}

impl From<f64> for AttrValue {
    fn from(number: f64) -> Self {
        AttrValue::Number(number)
    }
}

/// A single tagged element of a tree description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: BTreeMap<String, AttrValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Adds or replaces an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child elements.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Text attribute, if present and textual.
    pub fn str_attr(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// Numeric attribute, if present and numeric.
    pub fn number_attr(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttrValue::as_number)
    }
}
