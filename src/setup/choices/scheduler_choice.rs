use crate::setup::choices::Choice;
use crate::tasks::scheduler::DEFAULT_FRAMES_PER_SECOND;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_frames_per_second() -> f64 {
    DEFAULT_FRAMES_PER_SECOND
}

/// Empty parameter object so every variant still carries "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoSchedulerParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FixedRateParameters {
    #[serde(default = "default_frames_per_second")]
    #[schemars(
        title = "Frames per second",
        description = "How many frames fire per second (> 0)",
        default = "default_frames_per_second"
    )]
    pub frames_per_second: f64,
}

impl Default for FixedRateParameters {
    fn default() -> Self {
        Self {
            frames_per_second: default_frames_per_second(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SchedulerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SchedulerChoice {
    #[strum_discriminants(strum(
        message = "Frame Queue",
        detailed_message = "Frames fire when the host pumps them (e.g. from its own refresh callback)."
    ))]
    FrameQueue(NoSchedulerParams),

    #[strum_discriminants(strum(
        message = "Fixed Rate",
        detailed_message = "Timer-driven frames at a fixed rate."
    ))]
    FixedRate(FixedRateParameters),
}

impl Default for SchedulerChoice {
    fn default() -> Self {
        SchedulerChoice::FixedRate(FixedRateParameters::default())
    }
}

impl Choice for SchedulerChoice {
    type Kind = SchedulerKind;

    fn schema() -> Schema {
        schema_for!(SchedulerChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        let params = match kind {
            SchedulerKind::FrameQueue => serde_json::to_value(NoSchedulerParams::default()),
            SchedulerKind::FixedRate => serde_json::to_value(FixedRateParameters::default()),
        };
        params.unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn default_is_sixty_fps() {
        assert_eq!(
            SchedulerChoice::default(),
            SchedulerChoice::FixedRate(FixedRateParameters {
                frames_per_second: 60.0
            })
        );
    }

    #[test]
    fn missing_rate_applies_default() {
        let c: SchedulerChoice =
            serde_json::from_value(json!({"type": "fixed-rate", "params": {}})).unwrap();
        assert_eq!(c, SchedulerChoice::default());
    }

    #[test]
    fn frame_queue_roundtrip() {
        let c = SchedulerChoice::with_defaults(SchedulerKind::FrameQueue).unwrap();
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, json!({"type": "frame-queue", "params": {}}));
        let back: SchedulerChoice = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn kinds_parse_from_keys() {
        assert_eq!(
            SchedulerKind::from_str("fixed-rate").unwrap(),
            SchedulerKind::FixedRate
        );
        let keys: Vec<&str> = SchedulerChoice::options().iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["frame-queue", "fixed-rate"]);
    }

    #[test]
    fn schema_has_rate_default() {
        let text = serde_json::to_value(SchedulerChoice::schema())
            .unwrap()
            .to_string();
        assert!(text.contains("Frames per second"));
        assert!(text.contains("fixed-rate"));
    }
}
