pub mod config;
pub mod date_labels;
pub mod price_labels;
pub mod scale;
pub mod types;

pub use config::{GraphConfig, GraphConfigOptions, GraphInput};
pub use date_labels::{DateLabel, DateLabelFormat, DateLabels, date_labels};
pub use price_labels::{PriceLabels, price_labels};
pub use scale::LinearScale;
pub use types::{CLIP_MAX, CLIP_MIN, GraphPoint, Margin, Sample, Viewport};
