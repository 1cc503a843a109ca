use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Clip-space coordinate bounds used for every projected axis.
pub const CLIP_MIN: f64 = -1.0;
pub const CLIP_MAX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One immutable (time, price) observation from the input dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub price: f64,
}

impl Sample {
    #[must_use]
    pub fn new(time: DateTime<Utc>, price: f64) -> Self {
        Self { time, price }
    }

    /// Builds a sample from an exact decimal price, rejecting values that
    /// cannot be represented as `f64`.
    pub fn from_decimal(time: DateTime<Utc>, price: Decimal) -> GraphResult<Self> {
        Ok(Self {
            time,
            price: decimal_to_f64(price, "price")?,
        })
    }

    #[must_use]
    pub fn unix_seconds(self) -> i64 {
        self.time.timestamp()
    }
}

/// A sample projected into clip space, carrying its source values for
/// legend display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
    pub price: f64,
    pub unix_seconds: i64,
}

impl GraphPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, price: f64, unix_seconds: i64) -> Self {
        Self {
            x,
            y,
            price,
            unix_seconds,
        }
    }
}

/// Pixel distance between the plotting area and the canvas edge, constant
/// for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub x: f64,
    pub y: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self { x: 20.0, y: 20.0 }
    }
}

impl Margin {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn validate(self) -> GraphResult<Self> {
        if !self.x.is_finite() || !self.y.is_finite() || self.x < 0.0 || self.y < 0.0 {
            return Err(GraphError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> GraphResult<f64> {
    value.to_f64().ok_or_else(|| {
        GraphError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}
