//! Server-driven UI strategy: [`UiNode`] documents to [`View`] trees.

use serde::{Deserialize, Serialize};
use tracing::warn;
use treeform_ast::{NodeId, PropValue, UiNode};

use crate::error::{ConversionError, ConversionResult};
use crate::strategy::ConversionStrategy;
use crate::view::View;

/// What to do with a node whose `type` has no conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownNodePolicy {
    /// Fail the transform with `UnsupportedNode`.
    #[default]
    Error,
    /// Convert to [`View::Placeholder`] and keep going.
    Placeholder,
}

/// Converts layout documents into [`View`]s.
///
/// | `type`   | shape     | view                         |
/// |----------|-----------|------------------------------|
/// | `text`   | leaf      | `Text` from prop `text`      |
/// | `widget` | leaf      | `Text` from the `id` or `text` |
/// | `image`  | leaf      | `Image` from prop `src`      |
/// | `spacer` | leaf      | `Spacer`                     |
/// | `hStack` | composite | `HStack`, optional `spacing` |
/// | `vStack` | composite | `VStack`, optional `spacing` |
/// | `zStack` | composite | `ZStack`                     |
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewStrategy {
    unknown_nodes: UnknownNodePolicy,
}

impl ViewStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_nodes(mut self, policy: UnknownNodePolicy) -> Self {
        self.unknown_nodes = policy;
        self
    }

    pub fn unknown_nodes(&self) -> UnknownNodePolicy {
        self.unknown_nodes
    }

    fn unknown(
        &self,
        node: &UiNode<'_>,
        children: Vec<View>,
    ) -> Result<View, ConversionError<NodeId>> {
        match self.unknown_nodes {
            UnknownNodePolicy::Error => Err(ConversionError::unsupported(
                node.id,
                format!("unknown node type \"{}\"", node.kind),
            )),
            UnknownNodePolicy::Placeholder => {
                warn!("{}: unknown node type \"{}\", using placeholder", node.id, node.kind);
                Ok(View::Placeholder {
                    kind: node.kind.to_string(),
                    children,
                })
            }
        }
    }
}

impl<'a> ConversionStrategy<UiNode<'a>> for ViewStrategy {
    type Output = View;

    fn convert_leaf(&self, node: &UiNode<'a>) -> ConversionResult<View, UiNode<'a>> {
        match node.kind {
            "text" => Ok(View::Text {
                content: required_str(node, "text")?.to_string(),
            }),
            "widget" => {
                let content = match node.key {
                    Some(key) => key,
                    None => required_str(node, "text")?,
                };
                Ok(View::Text {
                    content: content.to_string(),
                })
            }
            "image" => Ok(View::Image {
                source: required_str(node, "src")?.to_string(),
            }),
            "spacer" => Ok(View::Spacer),
            "hStack" | "vStack" | "zStack" => Err(ConversionError::invalid_state(
                node.id,
                format!("\"{}\" is a container but has no children", node.kind),
            )),
            _ => self.unknown(node, Vec::new()),
        }
    }

    fn convert_composite(
        &self,
        node: &UiNode<'a>,
        children: Vec<View>,
    ) -> ConversionResult<View, UiNode<'a>> {
        match node.kind {
            "hStack" => Ok(View::HStack {
                spacing: optional_number(node, "spacing")?,
                children,
            }),
            "vStack" => Ok(View::VStack {
                spacing: optional_number(node, "spacing")?,
                children,
            }),
            "zStack" => Ok(View::ZStack { children }),
            "text" | "widget" | "image" | "spacer" => Err(ConversionError::invalid_state(
                node.id,
                format!("\"{}\" cannot have children", node.kind),
            )),
            _ => self.unknown(node, children),
        }
    }
}

fn required_str<'a>(node: &UiNode<'a>, name: &str) -> Result<&'a str, ConversionError<NodeId>> {
    match node.prop(name) {
        Some(PropValue::Str(value)) => Ok(value),
        Some(other) => Err(ConversionError::invalid_state(
            node.id,
            format!(
                "prop \"{name}\" of \"{}\" must be a string, found {}",
                node.kind,
                other.type_name()
            ),
        )),
        None => Err(ConversionError::invalid_state(
            node.id,
            format!("\"{}\" is missing required prop \"{name}\"", node.kind),
        )),
    }
}

fn optional_number(node: &UiNode<'_>, name: &str) -> Result<Option<f64>, ConversionError<NodeId>> {
    match node.prop(name) {
        None | Some(PropValue::Null) => Ok(None),
        Some(PropValue::Number(value)) => Ok(Some(value)),
        Some(other) => Err(ConversionError::invalid_state(
            node.id,
            format!(
                "prop \"{name}\" of \"{}\" must be a number, found {}",
                node.kind,
                other.type_name()
            ),
        )),
    }
}
