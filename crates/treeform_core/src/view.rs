//! Platform-neutral view tree produced by [`ViewStrategy`](crate::ViewStrategy).

use std::fmt::{self, Write};
use std::mem;

use serde::Serialize;

/// A rendered view.
///
/// Serializes as an internally tagged object:
///
/// ```json
/// { "view": "hStack", "spacing": 8.0, "children": [{ "view": "text", "content": "A" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum View {
    Text {
        content: String,
    },
    Image {
        source: String,
    },
    Spacer,
    HStack {
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<f64>,
        children: Vec<View>,
    },
    VStack {
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<f64>,
        children: Vec<View>,
    },
    ZStack {
        children: Vec<View>,
    },
    /// Stand-in for a node type the strategy does not know.
    Placeholder {
        kind: String,
        children: Vec<View>,
    },
}

impl View {
    /// Tag used in the serialized form and in outlines.
    pub fn name(&self) -> &'static str {
        match self {
            View::Text { .. } => "text",
            View::Image { .. } => "image",
            View::Spacer => "spacer",
            View::HStack { .. } => "hStack",
            View::VStack { .. } => "vStack",
            View::ZStack { .. } => "zStack",
            View::Placeholder { .. } => "placeholder",
        }
    }

    /// Child views; empty for leaf views.
    pub fn children(&self) -> &[View] {
        match self {
            View::HStack { children, .. }
            | View::VStack { children, .. }
            | View::ZStack { children }
            | View::Placeholder { children, .. } => children,
            View::Text { .. } | View::Image { .. } | View::Spacer => &[],
        }
    }

    /// Total number of views in this tree.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(view) = pending.pop() {
            count += 1;
            pending.extend(view.children());
        }
        count
    }

    /// Renders the tree as an indented outline, one view per line.
    ///
    /// ```text
    /// hStack spacing=8
    ///   text "A"
    ///   spacer
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        // Explicit stack: outlines of very deep views must not overflow.
        let mut pending = vec![(self, 0usize)];
        while let Some((view, level)) = pending.pop() {
            for _ in 0..level {
                out.push_str("  ");
            }
            let _ = writeln!(out, "{}", Header(view));
            pending.extend(view.children().iter().rev().map(|child| (child, level + 1)));
        }
        out
    }
}

impl View {
    fn take_children(&mut self) -> Vec<View> {
        match self {
            View::HStack { children, .. }
            | View::VStack { children, .. }
            | View::ZStack { children }
            | View::Placeholder { children, .. } => mem::take(children),
            View::Text { .. } | View::Image { .. } | View::Spacer => Vec::new(),
        }
    }
}

// Views nest as deep as their documents; drop them without recursing.
impl Drop for View {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut view) = pending.pop() {
            pending.append(&mut view.take_children());
        }
    }
}

/// One outline line, without indentation.
struct Header<'v>(&'v View);

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        f.write_str(view.name())?;
        match view {
            View::Text { content } => write!(f, " {content:?}"),
            View::Image { source } => write!(f, " src={source:?}"),
            View::HStack {
                spacing: Some(spacing),
                ..
            }
            | View::VStack {
                spacing: Some(spacing),
                ..
            } => write!(f, " spacing={spacing}"),
            View::Placeholder { kind, .. } => write!(f, " type={kind:?}"),
            _ => Ok(()),
        }
    }
}
