use crate::error::{GraphError, GraphResult};

/// Linear mapping between a domain interval and a range interval.
///
/// Both directions are exposed so pointer coordinates can be mapped back
/// into the domain with `descale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale from explicit domain and range ends.
    ///
    /// A degenerate domain (`domain_start == domain_end`) would divide by
    /// zero in `scale`, so it is rejected here rather than recovered.
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> GraphResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(GraphError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(GraphError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the range.
    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a range value back into the domain.
    ///
    /// Algebraic inverse of `scale`; a degenerate range makes the inverse
    /// undefined and is reported as an error.
    pub fn descale(self, value: f64) -> GraphResult<f64> {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(GraphError::InvalidData(
                "cannot invert a scale with a degenerate range".to_owned(),
            ));
        }

        let normalized = (value - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
