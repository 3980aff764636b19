//! Range and step math shared by every input path.
//!
//! A [`RangeScale`] maps the caller's value space `[begin, end]` onto percent
//! space `[0, 100]` and snaps percentages onto the step grid. Click, drag and
//! external sync all quantize through [`RangeScale::quantize`].

use crate::config::{RangeConfig, PERCENT_MAX, PERCENT_MIN};
use crate::RangeError;

/// Corrected value bounds plus the quantization unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeScale {
    begin: f64,
    end: f64,
    step: f64,
}

impl RangeScale {
    /// Build a scale from raw boundary values given in either order.
    ///
    /// Fails with [`RangeError::DegenerateRange`] when both boundaries are
    /// equal, since there is no span to map percentages onto.
    pub fn new(begin_value: f64, end_value: f64, step: f64) -> Result<Self, RangeError> {
        if !begin_value.is_finite() || !end_value.is_finite() {
            return Err(RangeError::NonFiniteBound);
        }
        if begin_value == end_value {
            return Err(RangeError::DegenerateRange { value: begin_value });
        }

        Ok(Self {
            begin: begin_value.min(end_value),
            end: begin_value.max(end_value),
            step,
        })
    }

    pub fn from_config(config: &RangeConfig) -> Result<Self, RangeError> {
        Self::new(config.begin_value, config.end_value, config.step)
    }

    /// Lower corrected boundary, `min(begin_value, end_value)`.
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// Upper corrected boundary, `max(begin_value, end_value)`.
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn span(&self) -> f64 {
        self.end - self.begin
    }

    /// Step expressed in percent of the track, `None` in continuous mode.
    pub fn step_percent(&self) -> Option<f64> {
        if self.step.is_finite() && self.step > 0.0 {
            Some(self.step * 100.0 / self.span())
        } else {
            None
        }
    }

    /// Clamp `percent` into `[0, 100]` and snap it to the nearer step boundary.
    ///
    /// Ties go to the upper boundary. A boundary past 100 (when the step does
    /// not divide the span) is pulled back to 100.
    pub fn quantize(&self, percent: f64) -> f64 {
        let percent = percent.clamp(PERCENT_MIN, PERCENT_MAX);
        let Some(step_percent) = self.step_percent() else {
            return percent;
        };

        let low = percent - percent % step_percent;
        let high = low + step_percent;
        let snapped = if percent - low < high - percent {
            low
        } else {
            high
        };
        snapped.min(PERCENT_MAX)
    }

    /// Map a percentage onto the caller's value space, rounded half away from zero.
    pub fn value_from_percent(&self, percent: f64) -> f64 {
        (percent * self.span() / 100.0).round() + self.begin
    }

    /// Map a value onto percent space. The value is clamped into the corrected
    /// bounds first and the result is quantized.
    pub fn percent_from_value(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.begin, self.end);
        self.quantize((clamped - self.begin) * 100.0 / self.span())
    }

    /// Handle positions for an externally supplied selection.
    ///
    /// An inverted pair is swapped before mapping. A missing lower bound pins
    /// the min handle to 0%, a missing upper bound pins the max handle to 100%.
    pub fn initial_percents(&self, min_value: Option<f64>, max_value: Option<f64>) -> (f64, f64) {
        let (min_value, max_value) = match (min_value, max_value) {
            (Some(min), Some(max)) if min > max => (Some(max), Some(min)),
            other => other,
        };

        let min_percent = match min_value {
            Some(min) => self.percent_from_value(min.max(self.begin)),
            None => PERCENT_MIN,
        };
        let max_percent = match max_value {
            Some(max) => self.percent_from_value(max.min(self.end)),
            None => PERCENT_MAX,
        };
        (min_percent, max_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn scale(begin: f64, end: f64, step: f64) -> RangeScale {
        RangeScale::new(begin, end, step).unwrap()
    }

    #[test]
    fn bounds_are_corrected_regardless_of_order() {
        let s = scale(100.0, -20.0, 1.0);
        assert_eq!(s.begin(), -20.0);
        assert_eq!(s.end(), 100.0);
        assert_eq!(s.span(), 120.0);
    }

    #[test]
    fn equal_bounds_are_degenerate() {
        assert!(matches!(
            RangeScale::new(50.0, 50.0, 1.0),
            Err(RangeError::DegenerateRange { value }) if value == 50.0
        ));
        assert!(matches!(
            RangeScale::new(f64::NAN, 50.0, 1.0),
            Err(RangeError::NonFiniteBound)
        ));
    }

    #[test]
    fn step_percent_follows_span() {
        assert!(approx(scale(0.0, 100.0, 10.0).step_percent().unwrap(), 10.0));
        assert!(approx(scale(0.0, 200.0, 10.0).step_percent().unwrap(), 5.0));
        assert_eq!(scale(0.0, 100.0, 0.0).step_percent(), None);
    }

    #[test]
    fn quantize_snaps_to_nearer_boundary() {
        let s = scale(0.0, 100.0, 10.0);
        assert!(approx(s.quantize(24.0), 20.0));
        assert!(approx(s.quantize(26.0), 30.0));
        assert!(approx(s.quantize(70.0), 70.0));
    }

    #[test]
    fn quantize_tie_goes_to_upper_boundary() {
        let s = scale(0.0, 100.0, 10.0);
        assert!(approx(s.quantize(25.0), 30.0));
        assert!(approx(s.quantize(5.0), 10.0));
    }

    #[test]
    fn quantize_clamps_out_of_range_input() {
        let s = scale(0.0, 100.0, 10.0);
        assert_eq!(s.quantize(-15.0), 0.0);
        assert_eq!(s.quantize(140.0), 100.0);
    }

    #[test]
    fn quantize_never_leaves_percent_space() {
        // step 2 over a span of 5 is 40%; 100% ties between 80% and 120%
        let s = scale(0.0, 5.0, 2.0);
        assert_eq!(s.quantize(100.0), 100.0);
        assert!(approx(s.quantize(50.0), 40.0));
    }

    #[test]
    fn continuous_mode_only_clamps() {
        let s = scale(0.0, 100.0, 0.0);
        assert_eq!(s.quantize(33.3), 33.3);
        assert_eq!(s.quantize(101.0), 100.0);
    }

    #[test]
    fn quantize_is_idempotent() {
        let s = scale(0.0, 100.0, 10.0);
        for i in 0..=200 {
            let x = i as f64 * 0.5;
            let once = s.quantize(x);
            assert_eq!(s.quantize(once), once, "input {x}");
        }

        let uneven = scale(0.0, 30.0, 7.0);
        for i in 0..=100 {
            let once = uneven.quantize(i as f64);
            assert!(approx(uneven.quantize(once), once), "input {i}");
        }
    }

    #[test]
    fn value_from_percent_rounds_and_offsets() {
        let s = scale(-50.0, 50.0, 1.0);
        assert_eq!(s.value_from_percent(0.0), -50.0);
        assert_eq!(s.value_from_percent(100.0), 50.0);
        assert_eq!(s.value_from_percent(12.5), -37.0);
        assert_eq!(s.value_from_percent(12.4), -38.0);
    }

    #[test]
    fn aligned_values_survive_a_round_trip() {
        let s = scale(-50.0, 50.0, 5.0);
        let mut v = -50.0;
        while v <= 50.0 {
            assert_eq!(s.value_from_percent(s.percent_from_value(v)), v);
            v += 5.0;
        }

        let s = scale(0.0, 1000.0, 25.0);
        for v in (0..=1000).step_by(25) {
            let v = v as f64;
            assert_eq!(s.value_from_percent(s.percent_from_value(v)), v);
        }
    }

    #[test]
    fn percent_from_value_clamps_into_bounds() {
        let s = scale(0.0, 100.0, 1.0);
        assert_eq!(s.percent_from_value(-10.0), 0.0);
        assert_eq!(s.percent_from_value(250.0), 100.0);
    }

    #[test]
    fn initial_percents_default_to_full_track() {
        let s = scale(0.0, 100.0, 1.0);
        assert_eq!(s.initial_percents(None, None), (0.0, 100.0));
        assert_eq!(s.initial_percents(Some(30.0), None), (30.0, 100.0));
        assert_eq!(s.initial_percents(None, Some(60.0)), (0.0, 60.0));
    }

    #[test]
    fn initial_percents_swap_inverted_selection() {
        let s = scale(0.0, 200.0, 10.0);
        assert_eq!(
            s.initial_percents(Some(150.0), Some(40.0)),
            s.initial_percents(Some(40.0), Some(150.0))
        );
        assert_eq!(s.initial_percents(Some(150.0), Some(40.0)), (20.0, 75.0));
    }

    #[test]
    fn initial_percents_clamp_out_of_range_selection() {
        let s = scale(10.0, 20.0, 1.0);
        assert_eq!(s.initial_percents(Some(-5.0), Some(99.0)), (0.0, 100.0));
    }

    #[test]
    fn initial_percents_are_quantized() {
        let s = scale(0.0, 100.0, 10.0);
        assert_eq!(s.initial_percents(Some(24.0), Some(76.0)), (20.0, 80.0));
    }
}
