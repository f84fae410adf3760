use crate::setup::choices::Choice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct UniformSquareParameters {
    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "PRNG seed; empty = fresh entropy on every build"
    )]
    pub seed: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Max Points",
        description = "Upper bound on points per sampler; empty = infinite"
    )]
    pub max_points: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SamplerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SamplerChoice {
    #[strum_discriminants(strum(
        message = "Uniform Square",
        detailed_message = "Independent uniform x and y in the unit square."
    ))]
    UniformSquare(UniformSquareParameters),
}

impl Default for SamplerChoice {
    fn default() -> Self {
        SamplerChoice::UniformSquare(UniformSquareParameters::default())
    }
}

impl Choice for SamplerChoice {
    type Kind = SamplerKind;

    fn schema() -> Schema {
        schema_for!(SamplerChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            SamplerKind::UniformSquare => {
                serde_json::to_value(UniformSquareParameters::default()).unwrap_or(Value::Null)
            }
        }
    }
}
