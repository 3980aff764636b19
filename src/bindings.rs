//! JavaScript bindings for hosts that render the slider themselves.
//!
//! ```js
//! const slider = new RangeSlider({ beginValue: 0, endValue: 1000, step: 50 });
//! slider.setOnChange(({ min, max }) => console.log(min, max));
//! track.onmousedown = (e) => {
//!     const { left, width } = track.getBoundingClientRect();
//!     slider.pressTrack(e.clientX, left, width);
//! };
//! ```

use wasm_bindgen::prelude::*;

use crate::config::RangeConfig;
use crate::controller::{ControllerSlot, Handle, RangeValues, TrackGeometry};
use crate::RangeError;

/// Read a `{ beginValue, endValue, step, minValue, maxValue }` object.
/// `undefined` and `null` select the defaults.
fn read_config(value: JsValue) -> Result<RangeConfig, RangeError> {
    if value.is_undefined() || value.is_null() {
        return Ok(RangeConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| RangeError::InvalidConfig(e.to_string()))
}

fn to_js_error(err: RangeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Range slider state machine driven from JavaScript.
#[wasm_bindgen]
pub struct RangeSlider {
    slot: ControllerSlot,
    on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl RangeSlider {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RangeSlider, JsValue> {
        let config = read_config(config).map_err(to_js_error)?;
        Ok(RangeSlider {
            slot: ControllerSlot::new(config),
            on_change: None,
        })
    }

    /// False when `beginValue == endValue`; the host should render nothing.
    pub fn enabled(&self) -> bool {
        self.slot.is_enabled()
    }

    #[wasm_bindgen(js_name = minPercent)]
    pub fn min_percent(&self) -> Option<f64> {
        self.slot.percents().map(|(min, _)| min)
    }

    #[wasm_bindgen(js_name = maxPercent)]
    pub fn max_percent(&self) -> Option<f64> {
        self.slot.percents().map(|(_, max)| max)
    }

    /// Apply a new configuration. Handles are only reset if it changed.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config = read_config(config).map_err(to_js_error)?;
        self.slot.reconcile(config);
        Ok(())
    }

    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: Option<js_sys::Function>) {
        self.on_change = callback;
    }

    #[wasm_bindgen(js_name = pressTrack)]
    pub fn press_track(&mut self, x: f64, left: f64, width: f64) -> Result<(), JsValue> {
        let changed = self
            .slot
            .active_mut()
            .and_then(|controller| controller.press_track(x, TrackGeometry::new(left, width)));
        self.emit(changed)
    }

    #[wasm_bindgen(js_name = pressHandle)]
    pub fn press_handle(&mut self, is_max: bool) {
        let handle = if is_max { Handle::Max } else { Handle::Min };
        if let Some(controller) = self.slot.active_mut() {
            controller.press_handle(handle);
        }
    }

    #[wasm_bindgen(js_name = movePointer)]
    pub fn move_pointer(&mut self, x: f64, left: f64, width: f64) -> Result<(), JsValue> {
        let changed = self
            .slot
            .active_mut()
            .and_then(|controller| controller.move_pointer(x, TrackGeometry::new(left, width)));
        self.emit(changed)
    }

    /// End the interaction. Returns true when the host must call
    /// `preventDefault()` and `stopPropagation()` on the release event.
    pub fn release(&mut self) -> bool {
        self.slot
            .active_mut()
            .is_some_and(|controller| controller.release().suppresses_event())
    }
}

impl RangeSlider {
    fn emit(&self, changed: Option<RangeValues>) -> Result<(), JsValue> {
        let (Some(values), Some(callback)) = (changed, &self.on_change) else {
            return Ok(());
        };
        let payload = serde_wasm_bindgen::to_value(&values)?;
        callback.call1(&JsValue::NULL, &payload)?;
        Ok(())
    }
}
