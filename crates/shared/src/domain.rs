use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ProductId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw image field as the catalog sends it: one URL, a list of URLs, or nothing.
///
/// Decoding never fails. Shapes other than a string or an array decode to
/// [`ProductImages::None`], and non-string array entries become empty strings
/// that candidate normalization later discards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductImages {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl ProductImages {
    pub fn raw_entries(&self) -> &[String] {
        match self {
            Self::None => &[],
            Self::Single(url) => std::slice::from_ref(url),
            Self::Many(urls) => urls,
        }
    }
}

impl From<Value> for ProductImages {
    fn from(value: Value) -> Self {
        match value {
            Value::String(url) => Self::Single(url),
            Value::Array(items) => Self::Many(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(url) => url,
                        _ => String::new(),
                    })
                    .collect(),
            ),
            _ => Self::None,
        }
    }
}

impl<'de> Deserialize<'de> for ProductImages {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Keeps string values; any other JSON shape reads as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default)]
    pub images: ProductImages,
}

impl Product {
    /// Category name, treating a missing category and an empty name alike.
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(|category| category.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}
