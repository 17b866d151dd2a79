use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A `flavors` value as it may appear on disk: a list, or one bare value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Flavors {
    List(Vec<Value>),
    Scalar(Value),
}

impl Flavors {
    pub fn is_list(&self) -> bool {
        matches!(self, Flavors::List(_))
    }

    /// Collapse either shape into a list. A scalar becomes a one-element list.
    pub fn into_list(self) -> Vec<Value> {
        match self {
            Flavors::List(items) => items,
            Flavors::Scalar(value) => vec![value],
        }
    }
}

impl From<Value> for Flavors {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Flavors::List(items),
            other => Flavors::Scalar(other),
        }
    }
}

/// Deserialize a field that holds either one value or a list of values,
/// always yielding a list.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Flavors::deserialize(deserializer).map(Flavors::into_list)
}

/// Typed view of a food record. Accepts documents before and after migration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodRecord {
    #[serde(deserialize_with = "one_or_many")]
    pub flavors: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typed view of a whole document, with `flavors` already collapsed to lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub favorite_foods: Vec<FoodRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
