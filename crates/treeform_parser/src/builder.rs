//! Conversion from a `serde_json::Value` document to a `UiNode` tree.
//!
//! Shared by the JSON and JSONC parsers, which only differ in how they get
//! from text to a `Value`.

use serde_json::Value;
use treeform_ast::{AstArena, NodeId, Prop, PropValue, UiNode};

use crate::ParseError;

const TYPE_KEY: &str = "type";
const ID_KEY: &str = "id";
const CHILDREN_KEY: &str = "children";

/// Builds a node tree in an arena, assigning ids in pre-order.
pub(crate) struct DocumentBuilder<'a> {
    arena: &'a AstArena,
    next_id: u32,
}

impl<'a> DocumentBuilder<'a> {
    pub(crate) fn new(arena: &'a AstArena) -> Self {
        Self { arena, next_id: 0 }
    }

    /// Converts the document root.
    pub(crate) fn build(mut self, root: &Value) -> Result<UiNode<'a>, ParseError> {
        self.convert_node(root, "$")
    }

    fn convert_node(&mut self, value: &Value, path: &str) -> Result<UiNode<'a>, ParseError> {
        let Value::Object(object) = value else {
            return Err(ParseError::invalid_node(
                path,
                format!("expected a node object, found {}", json_type_name(value)),
            ));
        };

        // The id is taken before any child so ids follow pre-order.
        let id = self.allocate_id()?;

        let kind = match object.get(TYPE_KEY) {
            Some(Value::String(kind)) => self.arena.alloc_str(kind),
            Some(other) => {
                return Err(ParseError::invalid_node(
                    path,
                    format!("\"type\" must be a string, found {}", json_type_name(other)),
                ));
            }
            None => return Err(ParseError::invalid_node(path, "missing \"type\"")),
        };

        let key = match object.get(ID_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(key)) => Some(self.arena.alloc_str(key)),
            Some(other) => {
                return Err(ParseError::invalid_node(
                    path,
                    format!("\"id\" must be a string, found {}", json_type_name(other)),
                ));
            }
        };

        let mut props = Vec::new();
        for (name, value) in object {
            if matches!(name.as_str(), TYPE_KEY | ID_KEY | CHILDREN_KEY) {
                continue;
            }
            let value = self.convert_prop(value, &format!("{path}.{name}"))?;
            props.push(Prop::new(self.arena.alloc_str(name), value));
        }

        let mut node = match object.get(CHILDREN_KEY) {
            None | Some(Value::Null) => UiNode::leaf(id, kind),
            Some(Value::Array(items)) => {
                let children = self.convert_children(items, path)?;
                UiNode::composite(id, kind, children)
            }
            Some(other) => {
                return Err(ParseError::invalid_node(
                    path,
                    format!(
                        "\"children\" must be an array, found {}",
                        json_type_name(other)
                    ),
                ));
            }
        };

        node.key = key;
        node.props = self.arena.alloc_slice_copy(&props);
        Ok(node)
    }

    fn convert_children(
        &mut self,
        items: &[Value],
        path: &str,
    ) -> Result<&'a [UiNode<'a>], ParseError> {
        let mut children = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let child_path = format!("{path}.children[{index}]");
            children.push(self.convert_node(item, &child_path)?);
        }
        Ok(self.arena.alloc_slice_copy(&children))
    }

    fn convert_prop(&self, value: &Value, path: &str) -> Result<PropValue<'a>, ParseError> {
        match value {
            Value::Null => Ok(PropValue::Null),
            Value::Bool(b) => Ok(PropValue::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(PropValue::Number)
                .ok_or_else(|| ParseError::unsupported(path, format!("number {n}"))),
            Value::String(s) => Ok(PropValue::Str(self.arena.alloc_str(s))),
            Value::Array(_) | Value::Object(_) => Err(ParseError::unsupported(
                path,
                format!("{} prop (only scalar props are supported)", json_type_name(value)),
            )),
        }
    }

    fn allocate_id(&mut self) -> Result<NodeId, ParseError> {
        let id = NodeId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| ParseError::internal("document has too many nodes"))?;
        Ok(id)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use treeform_ast::TreeNode;

    use super::*;

    #[test]
    fn test_ids_follow_pre_order() {
        let arena = AstArena::new();
        let doc = json!({
            "type": "vStack",
            "children": [
                { "type": "hStack", "children": [ { "type": "text", "text": "A" } ] },
                { "type": "spacer" }
            ]
        });

        let root = DocumentBuilder::new(&arena).build(&doc).unwrap();
        let row = root.children.unwrap()[0];

        assert_eq!(root.id, NodeId(0));
        assert_eq!(row.id, NodeId(1));
        assert_eq!(row.children.unwrap()[0].id, NodeId(2));
        assert_eq!(root.children.unwrap()[1].id, NodeId(3));
    }

    #[test]
    fn test_children_null_is_leaf() {
        let arena = AstArena::new();
        let root = DocumentBuilder::new(&arena)
            .build(&json!({ "type": "spacer", "children": null }))
            .unwrap();

        assert!(root.is_leaf());
    }

    #[test]
    fn test_key_and_props_are_captured() {
        let arena = AstArena::new();
        let root = DocumentBuilder::new(&arena)
            .build(&json!({ "type": "text", "id": "title", "text": "Hi", "bold": true }))
            .unwrap();

        assert_eq!(root.key, Some("title"));
        assert_eq!(root.props.len(), 2);
        assert_eq!(root.str_prop("text"), Some("Hi"));
        assert_eq!(root.bool_prop("bold"), Some(true));
        assert_eq!(root.prop("id"), None);
    }

    #[test]
    fn test_error_path_points_at_nested_node() {
        let arena = AstArena::new();
        let doc = json!({ "type": "vStack", "children": [ { "type": "text" }, { "text": "x" } ] });

        let err = DocumentBuilder::new(&arena).build(&doc).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid node at $.children[1]: missing \"type\""
        );
    }

    #[test]
    fn test_nested_prop_is_unsupported() {
        let arena = AstArena::new();
        let doc = json!({ "type": "text", "style": { "color": "red" } });

        let err = DocumentBuilder::new(&arena).build(&doc).unwrap_err();

        assert!(matches!(err, ParseError::Unsupported { ref path, .. } if path == "$.style"));
    }
}
