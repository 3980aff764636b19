//! Demo page for the range input.
//! Mounts a controlled slider that feeds every change back as its selection.

use log::info;
use range_input::components::RangeInput;
use range_input::RangeValues;
use yew::prelude::*;

const DEMO_BEGIN: f64 = 0.0;
const DEMO_END: f64 = 1_000.0;
const DEMO_STEP: f64 = 25.0;

/// Slider whose selection lives in the parent.
#[function_component(Demo)]
fn demo() -> Html {
    let selection = use_state(|| RangeValues {
        min: 250.0,
        max: 750.0,
    });

    let on_change = {
        let selection = selection.clone();
        Callback::from(move |values: RangeValues| {
            info!("Selected range [{}, {}]", values.min, values.max);
            selection.set(values);
        })
    };

    html! {
        <div class="demo">
            <RangeInput
                class="demo__range"
                begin_value={DEMO_BEGIN}
                end_value={DEMO_END}
                step={DEMO_STEP}
                min_value={Some(selection.min)}
                max_value={Some(selection.max)}
                on_change={Some(on_change)}
            />
        </div>
    }
}

/// Entry point: installs the panic hook and renders the demo.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Demo>::new().render();
}
