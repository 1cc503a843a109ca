use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::date_labels::{DateLabels, date_labels};
use crate::core::price_labels::{PriceLabels, price_labels};
use crate::core::scale::LinearScale;
use crate::core::types::{CLIP_MAX, CLIP_MIN, GraphPoint, Margin, Sample};
use crate::error::{GraphError, GraphResult};

/// The two supported input shapes for a config build.
///
/// `Samples` carries the raw dataset plus the number of trailing samples to
/// show; `Points` re-derives the full pipeline from already-projected points
/// using their carried price/time values, consuming all of them.
#[derive(Debug, Clone, Copy)]
pub enum GraphInput<'a> {
    Samples {
        samples: &'a [Sample],
        visible_count: usize,
    },
    Points(&'a [GraphPoint]),
}

/// Label density and layout knobs for a config build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfigOptions {
    pub price_label_count: usize,
    pub min_date_label_count: usize,
    pub margin: Margin,
}

impl Default for GraphConfigOptions {
    fn default() -> Self {
        Self {
            price_label_count: 4,
            min_date_label_count: 3,
            margin: Margin::default(),
        }
    }
}

impl GraphConfigOptions {
    fn validate(self) -> GraphResult<Self> {
        if self.price_label_count == 0 {
            return Err(GraphError::InvalidData(
                "price label count must be > 0".to_owned(),
            ));
        }
        if self.min_date_label_count == 0 {
            return Err(GraphError::InvalidData(
                "minimum date label count must be > 0".to_owned(),
            ));
        }
        self.margin.validate()?;
        Ok(self)
    }
}

/// Everything a rendering backend and label positioner consume for one
/// render pass. Pure function of the input; rebuilding with identical
/// input yields an equal value.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub price_labels: PriceLabels,
    pub date_labels: DateLabels,
    /// Clip-space x positions of the date labels, for gridlines.
    pub x_grid_lines: Vec<f64>,
    /// Clip-space y positions of the price labels, for gridlines.
    pub y_grid_lines: SmallVec<[f64; 8]>,
    pub points: Vec<GraphPoint>,
    pub margin: Margin,
    /// Lowest generated price label. The y domain floor is snapped to it so
    /// the bottom gridline sits exactly at the axis edge.
    pub min_y_value: f64,
    pub max_y_value: f64,
    pub min_x_unix: i64,
    pub max_x_unix: i64,
}

impl GraphConfig {
    /// Builds a config from the trailing `visible_count` samples with
    /// default options.
    pub fn from_samples(samples: &[Sample], visible_count: usize) -> GraphResult<Self> {
        Self::build(
            GraphInput::Samples {
                samples,
                visible_count,
            },
            GraphConfigOptions::default(),
        )
    }

    /// Builds a config from already-projected points with default options.
    pub fn from_points(points: &[GraphPoint]) -> GraphResult<Self> {
        Self::build(GraphInput::Points(points), GraphConfigOptions::default())
    }

    pub fn build(input: GraphInput<'_>, options: GraphConfigOptions) -> GraphResult<Self> {
        let options = options.validate()?;

        let window: Vec<Sample> = match input {
            GraphInput::Samples {
                samples,
                visible_count,
            } => {
                if samples.is_empty() {
                    return Err(GraphError::EmptyDataset);
                }
                if visible_count == 0 {
                    return Err(GraphError::InvalidData(
                        "visible sample count must be > 0".to_owned(),
                    ));
                }
                let skip = samples.len().saturating_sub(visible_count);
                samples[skip..].to_vec()
            }
            GraphInput::Points(points) => {
                if points.is_empty() {
                    return Err(GraphError::EmptyDataset);
                }
                points
                    .iter()
                    .map(|point| sample_from_point(*point))
                    .collect::<GraphResult<Vec<Sample>>>()?
            }
        };

        Self::from_visible_window(&window, options)
    }

    fn from_visible_window(window: &[Sample], options: GraphConfigOptions) -> GraphResult<Self> {
        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for sample in window {
            if !sample.price.is_finite() {
                return Err(GraphError::InvalidData(
                    "sample prices must be finite".to_owned(),
                ));
            }
            min_price = min_price.min(sample.price);
            max_price = max_price.max(sample.price);
        }

        // Samples are assumed pre-sorted ascending by time.
        let earliest = window[0].time;
        let latest = window[window.len() - 1].time;

        let price_labels = price_labels(min_price, max_price, options.price_label_count)?;
        let min_y_value = price_labels[0];
        let max_y_value = max_price;

        let y_scale = LinearScale::new(min_y_value, max_y_value, CLIP_MIN, CLIP_MAX)?;
        let x_scale = LinearScale::new(
            earliest.timestamp() as f64,
            latest.timestamp() as f64,
            CLIP_MIN,
            CLIP_MAX,
        )?;

        let points: Vec<GraphPoint> = window
            .iter()
            .map(|sample| {
                let unix = sample.unix_seconds();
                GraphPoint::new(
                    x_scale.scale(unix as f64),
                    y_scale.scale(sample.price),
                    sample.price,
                    unix,
                )
            })
            .collect();

        let date_labels = date_labels(earliest, latest, options.min_date_label_count)?;
        let x_grid_lines: Vec<f64> = date_labels
            .labels
            .iter()
            .map(|label| x_scale.scale(label.unix_seconds as f64))
            .collect();
        let y_grid_lines: SmallVec<[f64; 8]> = price_labels
            .iter()
            .map(|label| y_scale.scale(*label))
            .collect();

        tracing::debug!(
            points = points.len(),
            price_labels = price_labels.len(),
            date_labels = date_labels.labels.len(),
            min_y_value,
            max_y_value,
            "graph config built"
        );

        Ok(Self {
            price_labels,
            date_labels,
            x_grid_lines,
            y_grid_lines,
            points,
            margin: options.margin,
            min_y_value,
            max_y_value,
            min_x_unix: earliest.timestamp(),
            max_x_unix: latest.timestamp(),
        })
    }
}

fn sample_from_point(point: GraphPoint) -> GraphResult<Sample> {
    let time = DateTime::<Utc>::from_timestamp(point.unix_seconds, 0).ok_or_else(|| {
        GraphError::InvalidData(format!(
            "point timestamp {} is out of range",
            point.unix_seconds
        ))
    })?;
    Ok(Sample::new(time, point.price))
}
