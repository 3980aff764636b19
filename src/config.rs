//! Configuration defaults and the per-render range configuration.

use serde::{Deserialize, Serialize};

// Default values for the configuration surface
pub const DEFAULT_BEGIN_VALUE: f64 = 0.0;
pub const DEFAULT_END_VALUE: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;

// Percent space limits
pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;

/// Immutable description of a range slider for one render.
///
/// Field names follow the JavaScript convention when (de)serialized, so a host
/// can hand over `{ beginValue, endValue, step, minValue, maxValue }` directly.
/// Missing fields fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeConfig {
    pub begin_value: f64,
    pub end_value: f64,
    /// Quantization unit in value space. Zero (or negative) means continuous.
    pub step: f64,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            begin_value: DEFAULT_BEGIN_VALUE,
            end_value: DEFAULT_END_VALUE,
            step: DEFAULT_STEP,
            min_value: None,
            max_value: None,
        }
    }
}

impl RangeConfig {
    pub fn new(begin_value: f64, end_value: f64) -> Self {
        Self {
            begin_value,
            end_value,
            ..Self::default()
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Whether `step` selects quantized movement.
    pub fn is_stepped(&self) -> bool {
        self.step.is_finite() && self.step > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: RangeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RangeConfig::default());
        assert_eq!(config.step, DEFAULT_STEP);
    }

    #[test]
    fn camel_case_fields_are_recognized() {
        let config: RangeConfig = serde_json::from_str(
            r#"{"beginValue": 10, "endValue": 20, "step": 2, "minValue": 12, "maxValue": null}"#,
        )
        .unwrap();
        assert_eq!(config.begin_value, 10.0);
        assert_eq!(config.end_value, 20.0);
        assert_eq!(config.step, 2.0);
        assert_eq!(config.min_value, Some(12.0));
        assert_eq!(config.max_value, None);
    }

    #[test]
    fn zero_or_negative_step_is_continuous() {
        assert!(RangeConfig::default().is_stepped());
        assert!(!RangeConfig::default().with_step(0.0).is_stepped());
        assert!(!RangeConfig::default().with_step(-1.0).is_stepped());
        assert!(!RangeConfig::default().with_step(f64::NAN).is_stepped());
    }
}
