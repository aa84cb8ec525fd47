//! Rich chat text.
//!
//! The profiler engine builds messages as trees of [`Component`]s and the
//! platform forwards them to command sources untouched. Rendering is the
//! host's job.

use serde::{Deserialize, Serialize};

/// Named chat colours understood by every client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    DarkGray,
    Gray,
    White,
    Red,
    Gold,
    Yellow,
    Green,
    Aqua,
}

/// A styled piece of text with optional children appended after it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Component {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NamedColor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    /// Create an unstyled text component.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            children: Vec::new(),
        }
    }

    /// Set the colour of this component.
    pub fn color(mut self, color: NamedColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Append a child component.
    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Flatten to plain text, depth first.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.write_plain(out);
        }
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_plain_walks_children_in_order() {
        let message = Component::text("[")
            .append(Component::text("spark").color(NamedColor::Gold))
            .append(Component::text("] ").append(Component::text("TPS: 20.0")));
        assert_eq!(message.to_plain(), "[spark] TPS: 20.0");
    }

    #[test]
    fn serializes_without_empty_fields() {
        let json = serde_json::to_string(&Component::text("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);

        let json = serde_json::to_string(&Component::text("hi").color(NamedColor::DarkGray)).unwrap();
        assert_eq!(json, r#"{"text":"hi","color":"dark_gray"}"#);
    }
}
