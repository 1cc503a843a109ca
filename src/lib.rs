//! pricegraph: coordinate-scaling and interactive-nearest-point math for a
//! price-over-time line chart.
//!
//! The crate covers the pipeline from raw (date, price) samples to
//! normalized clip-space points, "nice" axis labels, and pointer-driven
//! active-point resolution. Pixel output stays behind the [`render::Renderer`]
//! strategy so backends remain swappable.

pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod session;
pub mod telemetry;

pub use error::{GraphError, GraphResult};
pub use session::GraphSession;
