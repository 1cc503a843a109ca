use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::types::{CLIP_MAX, CLIP_MIN, GraphPoint};
use crate::error::{GraphError, GraphResult};

/// Raw pointer position in client coordinates.
///
/// Mouse moves and single-touch updates both reduce to this shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerInput {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Bounding box of the chart surface, in the same client coordinates as
/// pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub(crate) fn validate(self) -> GraphResult<Self> {
        if !self.left.is_finite()
            || !self.top.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(GraphError::InvalidData(
                "surface bounds must be finite with positive size".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Translates a client-coordinate pointer position into coordinates local
/// to the chart surface.
#[must_use]
pub fn local_coordinates(input: PointerInput, bounds: SurfaceBounds) -> (f64, f64) {
    (input.client_x - bounds.left, input.client_y - bounds.top)
}

/// Maps a local pixel x offset into clip space for nearest-point lookup.
pub fn clip_x_from_local(local_x: f64, bounds: SurfaceBounds) -> GraphResult<f64> {
    let bounds = bounds.validate()?;
    if !local_x.is_finite() {
        return Err(GraphError::InvalidData(
            "local pointer x must be finite".to_owned(),
        ));
    }
    let scale = LinearScale::new(0.0, bounds.width, CLIP_MIN, CLIP_MAX)?;
    Ok(scale.scale(local_x))
}

/// Finds the point whose projected x is closest to `active_x`.
///
/// Full linear scan; point counts stay in the hundreds, so O(n) per pointer
/// event is acceptable. Ties resolve to the first point in iteration order.
#[must_use]
pub fn nearest_point(points: &[GraphPoint], active_x: f64) -> Option<&GraphPoint> {
    let mut best: Option<(OrderedFloat<f64>, &GraphPoint)> = None;
    for point in points {
        let distance = OrderedFloat((point.x - active_x).abs());
        match best {
            Some((current, _)) if current <= distance => {}
            _ => best = Some((distance, point)),
        }
    }
    best.map(|(_, point)| point)
}
