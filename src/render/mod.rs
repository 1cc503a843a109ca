use crate::core::{GraphConfig, Viewport};
use crate::error::{GraphError, GraphResult};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends receive the fully materialized graph configuration plus the
/// target viewport; they never reach into raw samples.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub config: GraphConfig,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, config: GraphConfig) -> Self {
        Self { viewport, config }
    }

    /// Rejects frames a backend could not draw deterministically.
    pub fn validate(&self) -> GraphResult<()> {
        if !self.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for point in &self.config.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(GraphError::InvalidData(
                    "frame points must be finite".to_owned(),
                ));
            }
        }
        for line in self
            .config
            .x_grid_lines
            .iter()
            .chain(self.config.y_grid_lines.iter())
        {
            if !line.is_finite() {
                return Err(GraphError::InvalidData(
                    "frame grid lines must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }
}

/// Contract implemented by any rendering backend.
///
/// The pipeline stays backend-agnostic: one strategy object per surface,
/// swapped without touching scaling or label logic.
pub trait Renderer {
    fn draw(&mut self, frame: &RenderFrame) -> GraphResult<()>;
    fn resize(&mut self, viewport: Viewport) -> GraphResult<()>;
}

/// No-op renderer used by tests and headless sessions.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub draw_count: usize,
    pub last_point_count: usize,
    pub last_viewport: Option<Viewport>,
}

impl Renderer for NullRenderer {
    fn draw(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.draw_count += 1;
        self.last_point_count = frame.config.points.len();
        self.last_viewport = Some(frame.viewport);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> GraphResult<()> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.last_viewport = Some(viewport);
        Ok(())
    }
}
