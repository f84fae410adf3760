use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use crate::setup::build::BuildError;
use crate::setup::choices::{SamplerChoice, SchedulerChoice};

/// Everything needed to assemble a driver. Missing parts take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct SimulationConfig {
    #[serde(default)]
    #[schemars(title = "Sampler", description = "Where sample points come from")]
    pub sampler: SamplerChoice,

    #[serde(default)]
    #[schemars(title = "Scheduler", description = "What paces the frames")]
    pub scheduler: SchedulerChoice,
}

impl SimulationConfig {
    pub fn from_json_str(text: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn schema() -> Schema {
        schema_for!(SimulationConfig)
    }
}
