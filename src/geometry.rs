//! Reading pointer positions and track geometry from DOM events.
//!
//! Coordinates are taken in the viewport (client) space on both sides, so the
//! pointer offset stays correct when the page is scrolled.

use web_sys::{Element, MouseEvent, TouchEvent};
use yew::NodeRef;

use crate::controller::TrackGeometry;

/// Bounding box of the track element as laid out right now.
pub fn track_geometry(element: &Element) -> TrackGeometry {
    let rect = element.get_bounding_client_rect();
    TrackGeometry::new(rect.left(), rect.width())
}

/// Measure the element behind `node_ref`, `None` if it is not mounted.
pub fn measure(node_ref: &NodeRef) -> Option<TrackGeometry> {
    node_ref.cast::<Element>().map(|element| track_geometry(&element))
}

pub fn mouse_x(event: &MouseEvent) -> f64 {
    f64::from(event.client_x())
}

/// X coordinate of the first active touch point.
pub fn touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches()
        .get(0)
        .map(|touch| f64::from(touch.client_x()))
}
