use std::cell::RefCell;
use std::rc::Rc;

use log::trace;
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::RangeConfig;
use crate::controller::{ControllerSlot, Handle, RangeValues};
use crate::geometry::{measure, mouse_x, touch_x};

/// Handle positions and event callbacks for one range input.
#[derive(Clone)]
pub struct RangeInputHandle {
    /// Current `(min, max)` handle positions in percent, `None` when the
    /// configured range is empty and nothing should be rendered.
    pub percents: Option<(f64, f64)>,
    /// Must be attached to the track element; it is measured on every event.
    pub track_ref: NodeRef,
    /// Mouse press anywhere on the track.
    pub on_track_press: Callback<MouseEvent>,
    /// Mouse press or touch start on one of the handles.
    pub on_handle_press: Callback<Handle>,
    pub on_mouse_move: Callback<MouseEvent>,
    pub on_touch_move: Callback<TouchEvent>,
    /// Mouse up, mouse leave and touch end.
    pub on_release: Callback<Event>,
}

/// Custom hook owning a [`RangeController`](crate::RangeController) for the
/// lifetime of the component.
///
/// The controller is re-synced from `config` on every render; this only resets
/// the handles when the configuration actually changed. `on_change` fires for
/// every click or drag that moves a handle, never for the sync itself.
#[hook]
pub fn use_range_input(
    config: RangeConfig,
    on_change: Option<Callback<RangeValues>>,
) -> RangeInputHandle {
    let slot: Rc<RefCell<ControllerSlot>> = use_mut_ref(|| ControllerSlot::new(config));
    let track_ref = use_node_ref();
    let redraw = use_force_update();

    slot.borrow_mut().reconcile(config);
    let percents = slot.borrow().percents();

    // Re-render and report to the caller, only when a handle actually moved.
    let notify: Rc<dyn Fn(Option<RangeValues>)> = Rc::new(move |changed| {
        if let Some(values) = changed {
            redraw.force_update();
            if let Some(on_change) = &on_change {
                on_change.emit(values);
            }
        }
    });

    let on_track_press = {
        let slot = slot.clone();
        let track_ref = track_ref.clone();
        let notify = notify.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(geometry) = measure(&track_ref) else {
                trace!("Track press before mount");
                return;
            };
            let changed = slot
                .borrow_mut()
                .active_mut()
                .and_then(|controller| controller.press_track(mouse_x(&e), geometry));
            notify(changed);
        })
    };

    let on_handle_press = {
        let slot = slot.clone();
        Callback::from(move |handle: Handle| {
            if let Some(controller) = slot.borrow_mut().active_mut() {
                controller.press_handle(handle);
            }
        })
    };

    let on_mouse_move = {
        let slot = slot.clone();
        let track_ref = track_ref.clone();
        let notify = notify.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(geometry) = measure(&track_ref) else {
                return;
            };
            let changed = slot
                .borrow_mut()
                .active_mut()
                .and_then(|controller| controller.move_pointer(mouse_x(&e), geometry));
            notify(changed);
        })
    };

    let on_touch_move = {
        let slot = slot.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |e: TouchEvent| {
            let (Some(geometry), Some(x)) = (measure(&track_ref), touch_x(&e)) else {
                return;
            };
            let changed = slot
                .borrow_mut()
                .active_mut()
                .and_then(|controller| controller.move_pointer(x, geometry));
            notify(changed);
        })
    };

    let on_release = {
        let slot = slot.clone();
        Callback::from(move |e: Event| {
            let outcome = slot.borrow_mut().active_mut().map(|controller| controller.release());
            if outcome.is_some_and(|outcome| outcome.suppresses_event()) {
                e.prevent_default();
                e.stop_propagation();
            }
        })
    };

    RangeInputHandle {
        percents,
        track_ref,
        on_track_press,
        on_handle_press,
        on_mouse_move,
        on_touch_move,
        on_release,
    }
}
