use smallvec::SmallVec;

use crate::error::{GraphError, GraphResult};

/// Round-step candidates a price tick may land on.
const LABEL_MULTIPLES: [f64; 4] = [100.0, 250.0, 500.0, 1000.0];

/// Price tick values for one axis pass.
///
/// Bounded by `desired_count + 1`, which stays within the inline capacity
/// for the default label counts.
pub type PriceLabels = SmallVec<[f64; 8]>;

/// Derives "nice" price tick values between `min_price` and `max_price`.
///
/// Ticks land on round multiples of 100/250/500/1000, whichever multiple
/// best matches the ideal step for `desired_count` labels. The output is
/// strictly increasing and its length is between 1 and `desired_count + 1`.
pub fn price_labels(
    min_price: f64,
    max_price: f64,
    desired_count: usize,
) -> GraphResult<PriceLabels> {
    if !min_price.is_finite() || !max_price.is_finite() || min_price > max_price {
        return Err(GraphError::InvalidData(
            "price label bounds must be finite with min <= max".to_owned(),
        ));
    }
    if desired_count == 0 {
        return Err(GraphError::InvalidData(
            "price label count must be > 0".to_owned(),
        ));
    }

    let ideal_step = (max_price - min_price) / desired_count as f64;
    let multiple = closest_multiple(ideal_step);

    let first_label = (min_price / multiple).floor() * multiple;
    let last_label = (max_price / multiple).floor() * multiple;
    let label_step =
        ((last_label - first_label) / desired_count as f64 / multiple).ceil() * multiple;

    let mut labels = PriceLabels::new();
    if label_step <= 0.0 {
        // Flat price window: a single tick at the floored minimum.
        labels.push(first_label);
        return Ok(labels);
    }

    // Tolerance keeps the final tick from dropping out to accumulated
    // floating-point drift.
    let upper = last_label + multiple * 1e-9;
    let mut value = first_label;
    while value <= upper {
        labels.push(value);
        value += label_step;
    }

    Ok(labels)
}

/// Picks the multiple nearest to the ideal step, first candidate winning
/// ties so a zero-span window deterministically selects 100.
fn closest_multiple(ideal_step: f64) -> f64 {
    let mut best = LABEL_MULTIPLES[0];
    let mut best_distance = (LABEL_MULTIPLES[0] - ideal_step).abs();

    for candidate in LABEL_MULTIPLES.into_iter().skip(1) {
        let distance = (candidate - ideal_step).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    best
}
