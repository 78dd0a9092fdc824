//! Model identifier value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a locally served model (Value Object)
///
/// Ollama names models as `family:tag` (e.g. `deepseek-r1:14b`). The
/// identifier is kept verbatim; [`ModelId::family`] and [`ModelId::tag`]
/// split it for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Model family, the part before `:` (`deepseek-r1` for `deepseek-r1:14b`)
    pub fn family(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(family, _)| family)
    }

    /// Size/variant tag, the part after `:` if present
    pub fn tag(&self) -> Option<&str> {
        self.0.split_once(':').map(|(_, tag)| tag)
    }

    /// Default single-model baselines
    pub fn default_baselines() -> Vec<ModelId> {
        [
            "deepseek-r1:7b",
            "deepseek-r1:8b",
            "deepseek-r1:14b",
            "mistral:7b",
            "phi3:3.8b",
        ]
        .into_iter()
        .map(ModelId::from)
        .collect()
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelId::new(s.trim()))
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        ModelId::new(s)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        ModelId::new(s)
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ModelId::new)
    }
}
