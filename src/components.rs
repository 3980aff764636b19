//! Yew view for the range input.
//!
//! The component only positions the handles and the highlighted segment; all
//! interaction is delegated to [`use_range_input`].

use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::{RangeConfig, DEFAULT_BEGIN_VALUE, DEFAULT_END_VALUE, DEFAULT_STEP};
use crate::controller::{Handle, RangeValues};
use crate::hooks::use_range_input;

/// Inline style placing a handle at `percent` of the track.
fn handle_style(percent: f64) -> String {
    format!("left: {}%;", percent)
}

/// Inline style stretching the highlighted segment between both handles.
fn track_style(min_percent: f64, max_percent: f64) -> String {
    format!("left: {}%; width: {}%;", min_percent, max_percent - min_percent)
}

#[derive(Properties, PartialEq)]
pub struct RangeInputProps {
    /// Classes for the outer wrapper.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes for both handles.
    #[prop_or_default]
    pub slider_class: Classes,
    #[prop_or_default]
    pub rail_class: Classes,
    /// Extra classes for the highlighted segment between the handles.
    #[prop_or_default]
    pub track_class: Classes,
    #[prop_or(DEFAULT_BEGIN_VALUE)]
    pub begin_value: f64,
    #[prop_or(DEFAULT_END_VALUE)]
    pub end_value: f64,
    #[prop_or_default]
    pub min_value: Option<f64>,
    #[prop_or_default]
    pub max_value: Option<f64>,
    /// Zero selects continuous movement.
    #[prop_or(DEFAULT_STEP)]
    pub step: f64,
    #[prop_or_default]
    pub on_change: Option<Callback<RangeValues>>,
}

impl RangeInputProps {
    pub fn config(&self) -> RangeConfig {
        RangeConfig {
            begin_value: self.begin_value,
            end_value: self.end_value,
            step: self.step,
            min_value: self.min_value,
            max_value: self.max_value,
        }
    }
}

/// Dual-handle range slider.
///
/// Renders nothing when `begin_value == end_value`.
#[function_component(RangeInput)]
pub fn range_input(props: &RangeInputProps) -> Html {
    let range = use_range_input(props.config(), props.on_change.clone());

    let Some((min_percent, max_percent)) = range.percents else {
        return html! {};
    };

    let on_mouse_release = range.on_release.reform(|e: MouseEvent| Event::from(e));
    let on_touch_release = range.on_release.reform(|e: TouchEvent| Event::from(e));

    html! {
        <div class={props.class.clone()}>
            <div class="range-input"
                ref={range.track_ref.clone()}
                onmousedown={range.on_track_press.clone()}
                onmousemove={range.on_mouse_move.clone()}
                onmouseleave={on_mouse_release.clone()}
                onmouseup={on_mouse_release}
                role="button"
                tabindex="0"
            >
                <div ontouchmove={range.on_touch_move.clone()} ontouchend={on_touch_release}>
                    <div class={classes!("range-input__rail", props.rail_class.clone())}>
                        <div class="range-input__rail-inner">
                            { render_handle(Handle::Min, min_percent, &props.slider_class, &range.on_handle_press) }
                            { render_handle(Handle::Max, max_percent, &props.slider_class, &range.on_handle_press) }
                            <div
                                class={classes!("range-input__track", props.track_class.clone())}
                                style={track_style(min_percent, max_percent)}
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Renders one draggable handle. Pressing it arms a drag of `handle`.
fn render_handle(
    handle: Handle,
    percent: f64,
    class: &Classes,
    on_press: &Callback<Handle>,
) -> Html {
    let onmousedown = on_press.reform(move |_: MouseEvent| handle);
    let ontouchstart = on_press.reform(move |_: TouchEvent| handle);

    html! {
        <div
            class={classes!("range-input__slider", class.clone())}
            style={handle_style(percent)}
            {onmousedown}
            {ontouchstart}
            role="button"
            tabindex="0"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_style_positions_by_percent() {
        assert_eq!(handle_style(0.0), "left: 0%;");
        assert_eq!(handle_style(37.5), "left: 37.5%;");
    }

    #[test]
    fn track_style_spans_between_handles() {
        assert_eq!(track_style(20.0, 80.0), "left: 20%; width: 60%;");
        assert_eq!(track_style(50.0, 50.0), "left: 50%; width: 0%;");
    }
}
