use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AiOverview {
    #[serde(deserialize_with = "null_as_default")]
    pub text_blocks: Vec<TextBlock>,
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
}

impl AiOverview {
    /// Decodes an `ai_overview` payload. A `null` payload is an empty overview.
    pub fn from_value(value: &Value) -> serde_json::Result<AiOverview> {
        Ok(Option::<AiOverview>::deserialize(value)?.unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.text_blocks.is_empty() && self.references.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TextBlock {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub snippet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub snippet_highlighted_words: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_indexes: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub list: Vec<ListItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ListItem {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub snippet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_indexes: Vec<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Reference {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub snippet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub index: i64,
}

/// What the primary search returns instead of an overview when the overview
/// has to be fetched separately.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub page_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub serpapi_link: String,
}

impl SearchMetadata {
    pub fn from_value(value: &Value) -> serde_json::Result<SearchMetadata> {
        Ok(Option::<SearchMetadata>::deserialize(value)?.unwrap_or_default())
    }
}
