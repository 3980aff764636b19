//! Handle resolution and the drag state machine.
//!
//! The controller owns the two handle percentages and the drag state. Hosts
//! feed it raw pointer X coordinates together with the track geometry measured
//! for that event, and get back the new selection whenever a handle moved.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{RangeConfig, PERCENT_MAX, PERCENT_MIN};
use crate::range::RangeScale;
use crate::RangeError;

/// One of the two draggable markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

/// Which handle, if any, is under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pressed on a handle, no movement yet.
    Armed(Handle),
    Dragging(Handle),
}

impl DragState {
    pub fn handle(&self) -> Option<Handle> {
        match *self {
            DragState::Idle => None,
            DragState::Armed(handle) | DragState::Dragging(handle) => Some(handle),
        }
    }
}

/// Track bounding box in pixels, measured at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Unquantized position of `pointer_x` as a percentage of the track.
    ///
    /// `None` for a collapsed or non-finite track, or a non-finite pointer.
    pub fn percent_at(&self, pointer_x: f64) -> Option<f64> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !self.left.is_finite()
            || !pointer_x.is_finite()
        {
            return None;
        }
        Some((pointer_x - self.left) * 100.0 / self.width)
    }
}

/// The selection in the caller's value space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeValues {
    pub min: f64,
    pub max: f64,
}

/// What a release did, and whether the host should swallow the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nothing was pressed.
    Ignored,
    Released { handle: Handle, moved: bool },
}

impl ReleaseOutcome {
    /// True when the release ended a press on a handle. The host must then
    /// prevent the default action and stop propagation of the event.
    pub fn suppresses_event(&self) -> bool {
        matches!(self, ReleaseOutcome::Released { .. })
    }
}

/// State and math for one range slider instance.
#[derive(Debug, Clone)]
pub struct RangeController {
    config: RangeConfig,
    scale: RangeScale,
    min_percent: f64,
    max_percent: f64,
    drag: DragState,
}

impl RangeController {
    /// Build a controller initialized from `config.min_value`/`config.max_value`.
    ///
    /// A range whose boundaries coincide yields [`RangeError::DegenerateRange`];
    /// such a control renders nothing and accepts no interaction.
    pub fn new(config: RangeConfig) -> Result<Self, RangeError> {
        let scale = RangeScale::from_config(&config)?;
        let (min_percent, max_percent) = scale.initial_percents(config.min_value, config.max_value);

        Ok(Self {
            config,
            scale,
            min_percent,
            max_percent,
            drag: DragState::Idle,
        })
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn scale(&self) -> &RangeScale {
        &self.scale
    }

    pub fn min_percent(&self) -> f64 {
        self.min_percent
    }

    pub fn max_percent(&self) -> f64 {
        self.max_percent
    }

    pub fn percents(&self) -> (f64, f64) {
        (self.min_percent, self.max_percent)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Current selection mapped to value space.
    pub fn values(&self) -> RangeValues {
        RangeValues {
            min: self.scale.value_from_percent(self.min_percent),
            max: self.scale.value_from_percent(self.max_percent),
        }
    }

    /// Re-initialize the handles from an externally changed configuration.
    ///
    /// Returns `Ok(true)` when the configuration differed and the handles were
    /// reset, `Ok(false)` when it was unchanged. Never reports a change to the
    /// caller's callback. On error the controller is left untouched.
    pub fn sync(&mut self, config: RangeConfig) -> Result<bool, RangeError> {
        if config == self.config {
            return Ok(false);
        }

        let scale = RangeScale::from_config(&config)?;
        let (min_percent, max_percent) = scale.initial_percents(config.min_value, config.max_value);
        debug!(
            "Range re-synced to [{}, {}]%, bounds [{}, {}]",
            min_percent,
            max_percent,
            scale.begin(),
            scale.end()
        );

        self.config = config;
        self.scale = scale;
        self.min_percent = min_percent;
        self.max_percent = max_percent;
        Ok(true)
    }

    /// A press anywhere on the track moves the nearer handle to the press.
    ///
    /// With both handles on the same spot the side of the press decides which
    /// one moves. An exact tie between two distinct handles moves the max handle.
    pub fn press_track(&mut self, pointer_x: f64, geometry: TrackGeometry) -> Option<RangeValues> {
        let offset = self.offset_percent(pointer_x, geometry)?;
        let (min, max) = self.percents();

        let (new_min, new_max) = if min == max {
            if offset > max {
                (min, offset)
            } else {
                (offset, max)
            }
        } else if (offset - min).abs() < (offset - max).abs() {
            (offset, max)
        } else {
            (min, offset)
        };

        self.apply(new_min, new_max)
    }

    /// A press on a handle arms a drag of that handle.
    pub fn press_handle(&mut self, handle: Handle) {
        self.drag = DragState::Armed(handle);
    }

    /// Pointer movement while a handle is pressed.
    ///
    /// Dragging a handle past the other one hands the drag over to the other
    /// handle, so the min handle always stays at or below the max handle.
    pub fn move_pointer(&mut self, pointer_x: f64, geometry: TrackGeometry) -> Option<RangeValues> {
        let Some(handle) = self.drag.handle() else {
            trace!("Pointer move ignored, no handle pressed");
            return None;
        };
        let offset = self.offset_percent(pointer_x, geometry)?;
        self.drag = DragState::Dragging(handle);

        let (min, max) = self.percents();
        match handle {
            Handle::Min if offset > max => {
                debug!("Min handle crossed max at {}%, dragging max", offset);
                self.drag = DragState::Dragging(Handle::Max);
                self.apply(max, offset)
            }
            Handle::Max if offset < min => {
                debug!("Max handle crossed min at {}%, dragging min", offset);
                self.drag = DragState::Dragging(Handle::Min);
                self.apply(offset, min)
            }
            Handle::Min => self.apply(offset, max),
            Handle::Max => self.apply(min, offset),
        }
    }

    /// Pointer up, pointer leave and touch end all end the interaction.
    pub fn release(&mut self) -> ReleaseOutcome {
        let outcome = match self.drag {
            DragState::Idle => ReleaseOutcome::Ignored,
            DragState::Armed(handle) => ReleaseOutcome::Released {
                handle,
                moved: false,
            },
            DragState::Dragging(handle) => ReleaseOutcome::Released {
                handle,
                moved: true,
            },
        };
        self.drag = DragState::Idle;
        outcome
    }

    fn offset_percent(&self, pointer_x: f64, geometry: TrackGeometry) -> Option<f64> {
        match geometry.percent_at(pointer_x) {
            Some(percent) => Some(self.scale.quantize(percent)),
            None => {
                trace!("Ignoring event on unmeasurable track {:?}", geometry);
                None
            }
        }
    }

    fn apply(&mut self, min_percent: f64, max_percent: f64) -> Option<RangeValues> {
        debug_assert!((PERCENT_MIN..=PERCENT_MAX).contains(&min_percent));
        debug_assert!((PERCENT_MIN..=PERCENT_MAX).contains(&max_percent));

        if min_percent == self.min_percent && max_percent == self.max_percent {
            return None;
        }
        self.min_percent = min_percent;
        self.max_percent = max_percent;
        Some(self.values())
    }
}

/// A controller, or the reason the current configuration cannot have one.
///
/// Hosts keep one slot per rendered control and reconcile it with every new
/// configuration. A disabled slot renders nothing and ignores all input.
#[derive(Debug, Clone)]
pub enum ControllerSlot {
    Active(RangeController),
    Disabled {
        config: RangeConfig,
        reason: RangeError,
    },
}

impl ControllerSlot {
    pub fn new(config: RangeConfig) -> Self {
        match RangeController::new(config) {
            Ok(controller) => ControllerSlot::Active(controller),
            Err(reason) => {
                warn!("Range input disabled: {}", reason);
                ControllerSlot::Disabled { config, reason }
            }
        }
    }

    /// Bring the slot in line with `config`, re-syncing or rebuilding as needed.
    pub fn reconcile(&mut self, config: RangeConfig) {
        match self {
            ControllerSlot::Active(controller) => {
                if let Err(reason) = controller.sync(config) {
                    warn!("Range input disabled: {}", reason);
                    *self = ControllerSlot::Disabled { config, reason };
                }
            }
            ControllerSlot::Disabled {
                config: previous, ..
            } if *previous == config => {}
            ControllerSlot::Disabled { .. } => *self = ControllerSlot::new(config),
        }
    }

    pub fn active(&self) -> Option<&RangeController> {
        match self {
            ControllerSlot::Active(controller) => Some(controller),
            ControllerSlot::Disabled { .. } => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut RangeController> {
        match self {
            ControllerSlot::Active(controller) => Some(controller),
            ControllerSlot::Disabled { .. } => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.active().is_some()
    }

    /// Handle positions for the presentation layer, `None` when disabled.
    pub fn percents(&self) -> Option<(f64, f64)> {
        self.active().map(RangeController::percents)
    }
}
