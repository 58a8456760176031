//! UiNode definition.
//!
//! The document node produced by the built-in parsers: one node per
//! `{"type": ..., "children": [...]}` object of a server-driven layout.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::{NodeId, TreeNode};

/// A node of a server-driven UI document.
///
/// All borrowed data lives in the [`AstArena`](crate::AstArena) the
/// document was parsed into, so the node itself is `Copy`.
///
/// # Example
///
/// ```rust
/// use treeform_ast::{AstArena, NodeId, Prop, PropValue, UiNode};
///
/// let arena = AstArena::new();
///
/// let props = arena.alloc_slice_copy(&[Prop::new("text", PropValue::Str("Hello"))]);
/// let text = UiNode::leaf(NodeId(1), "text").with_props(props);
///
/// let children = arena.alloc_slice_copy(&[text]);
/// let column = UiNode::composite(NodeId(0), "vStack", children);
///
/// assert_eq!(column.children.map(|c| c.len()), Some(1));
/// assert_eq!(text.str_prop("text"), Some("Hello"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UiNode<'a> {
    /// Parser-assigned identity.
    pub id: NodeId,

    /// The document's `"type"` tag, e.g. `hStack` or `text`.
    pub kind: &'a str,

    /// The document's optional `"id"` member.
    pub key: Option<&'a str>,

    /// Remaining scalar members, in document order.
    pub props: &'a [Prop<'a>],

    /// `None` for a leaf, `Some` for a composite (possibly empty).
    pub children: Option<&'a [UiNode<'a>]>,
}

/// A named scalar attribute of a [`UiNode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prop<'a> {
    pub name: &'a str,
    pub value: PropValue<'a>,
}

/// Scalar attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PropValue<'a> {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Str(&'a str),
}

impl<'a> UiNode<'a> {
    /// Creates a leaf node (no children sequence).
    #[inline]
    pub const fn leaf(id: NodeId, kind: &'a str) -> Self {
        Self {
            id,
            kind,
            key: None,
            props: &[],
            children: None,
        }
    }

    /// Creates a composite node. An empty slice is still a composite.
    #[inline]
    pub const fn composite(id: NodeId, kind: &'a str, children: &'a [UiNode<'a>]) -> Self {
        Self {
            id,
            kind,
            key: None,
            props: &[],
            children: Some(children),
        }
    }

    /// Sets the authored `"id"` key.
    #[inline]
    pub const fn with_key(mut self, key: &'a str) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets the props.
    #[inline]
    pub const fn with_props(mut self, props: &'a [Prop<'a>]) -> Self {
        self.props = props;
        self
    }

    /// Returns the value of the first prop with the given name.
    pub fn prop(&self, name: &str) -> Option<PropValue<'a>> {
        self.props
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| prop.value)
    }

    /// Returns a string prop, or `None` if missing or not a string.
    pub fn str_prop(&self, name: &str) -> Option<&'a str> {
        self.prop(name).and_then(|value| value.as_str())
    }

    /// Returns a number prop, or `None` if missing or not a number.
    pub fn number_prop(&self, name: &str) -> Option<f64> {
        self.prop(name).and_then(|value| value.as_number())
    }

    /// Returns a boolean prop, or `None` if missing or not a boolean.
    pub fn bool_prop(&self, name: &str) -> Option<bool> {
        self.prop(name).and_then(|value| value.as_bool())
    }
}

impl<'a> TreeNode for UiNode<'a> {
    type Id = NodeId;

    #[inline]
    fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    fn children(&self) -> Option<&[Self]> {
        self.children
    }
}

impl<'a> Prop<'a> {
    #[inline]
    pub const fn new(name: &'a str, value: PropValue<'a>) -> Self {
        Self { name, value }
    }
}

impl<'a> PropValue<'a> {
    #[inline]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            PropValue::Str(s) => Some(*s),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the value's type, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            PropValue::Null => "null",
            PropValue::Bool(_) => "boolean",
            PropValue::Number(_) => "number",
            PropValue::Str(_) => "string",
        }
    }
}

impl Serialize for PropValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            PropValue::Null => serializer.serialize_unit(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Number(n) => serializer.serialize_f64(*n),
            PropValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// Serializes back to the document shape: `type`, optional `id`, the props
/// flattened, then `children` only for composites.
impl Serialize for UiNode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut len = 1 + self.props.len();
        if self.key.is_some() {
            len += 1;
        }
        if self.children.is_some() {
            len += 1;
        }

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", self.kind)?;
        if let Some(key) = self.key {
            map.serialize_entry("id", key)?;
        }
        for prop in self.props {
            map.serialize_entry(prop.name, &prop.value)?;
        }
        if let Some(children) = self.children {
            map.serialize_entry("children", children)?;
        }
        map.end()
    }
}
