//! Typed property values.

use serde::{Deserialize, Serialize};

/// One segment of rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

impl RichText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
        }
    }
}

/// A selected option of a `select` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A property value, tagged by its declared type.
///
/// Decodes the `{"type": "<kind>", "<kind>": <value>}` shape used by the
/// record source. Kinds the pipeline does not read decode as [`Property::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    Url {
        #[serde(default)]
        url: Option<String>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    #[serde(other)]
    Other,
}

impl Property {
    pub fn title(text: impl Into<String>) -> Self {
        Property::Title {
            title: vec![RichText::new(text)],
        }
    }

    pub fn rich_text(text: impl Into<String>) -> Self {
        Property::RichText {
            rich_text: vec![RichText::new(text)],
        }
    }

    pub fn select(name: impl Into<String>) -> Self {
        Property::Select {
            select: Some(SelectOption {
                name: name.into(),
                color: None,
            }),
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Property::Url {
            url: Some(url.into()),
        }
    }

    pub fn number(value: f64) -> Self {
        Property::Number {
            number: Some(value),
        }
    }

    /// The declared type name.
    pub fn kind(&self) -> &'static str {
        match self {
            Property::Title { .. } => "title",
            Property::RichText { .. } => "rich_text",
            Property::Select { .. } => "select",
            Property::Url { .. } => "url",
            Property::Number { .. } => "number",
            Property::Other => "other",
        }
    }

    /// Plain text of the first segment of a text-bearing property.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Property::Title { title: segments } | Property::RichText { rich_text: segments } => {
                segments.first().map(|t| t.plain_text.as_str())
            }
            _ => None,
        }
    }
}
