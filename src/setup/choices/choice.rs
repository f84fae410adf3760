use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

use crate::setup::build::BuildError;

/// One selectable kind of a choice enum, as a presentation layer would list it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption<K> {
    pub kind: K,
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Contract for any "choice enum": a serde tagged enum (`type` + `params`)
/// whose discriminants are listed by a strum `Kind` enum.
pub trait Choice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// JSON Schema for the whole tagged enum.
    fn schema() -> Schema;

    /// Default `params` JSON for a given kind (usually from `*Parameters::default()`).
    fn default_params(kind: Self::Kind) -> Value;

    /// Build the typed enum from kind + params.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self, BuildError> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }

    fn with_defaults(kind: Self::Kind) -> Result<Self, BuildError> {
        Self::from_parts(kind, Self::default_params(kind))
    }

    fn options() -> Vec<ChoiceOption<Self::Kind>> {
        Self::Kind::iter()
            .map(|kind| {
                let key: &'static str = kind.into();
                ChoiceOption {
                    kind,
                    key,
                    label: kind.get_message().unwrap_or(key),
                    description: kind.get_detailed_message().unwrap_or(""),
                }
            })
            .collect()
    }
}
