use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coerce;

pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_WEIGHT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// Stored text goes through [`Gender::parse`]; `null` or a missing value
/// falls back to the default.
impl From<Value> for Gender {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Gender::parse(&s),
            Value::Null => Gender::default(),
            _ => Gender::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "coerce::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub last_name: String,
    #[serde(default)]
    pub gender: Gender,
    /// Body weight in kg.
    #[serde(default, deserialize_with = "coerce::number")]
    pub weight: f64,
    #[serde(default, deserialize_with = "coerce::count")]
    pub age: u32,
    /// Height in cm.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_number"
    )]
    pub height: Option<f64>,
    /// Inline photo, typically a data URL.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_text"
    )]
    pub image: Option<String>,
}

/// What the identity provider hands over after sign-in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl Profile {
    /// First-time profile derived from the signed-in identity.
    pub fn from_identity(identity: &Identity) -> Self {
        let mut words = identity
            .name
            .as_deref()
            .unwrap_or_default()
            .split_whitespace();

        Self {
            first_name: words.next().unwrap_or("User").to_string(),
            last_name: words.next().unwrap_or_default().to_string(),
            gender: Gender::Male,
            weight: DEFAULT_WEIGHT,
            age: DEFAULT_AGE,
            height: None,
            image: identity.image.clone().filter(|url| !url.is_empty()),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
