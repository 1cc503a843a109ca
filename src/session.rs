use crate::core::{GraphConfig, GraphConfigOptions, GraphInput, GraphPoint, Sample, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{PointerInput, SurfaceBounds, clip_x_from_local, local_coordinates, nearest_point};
use crate::render::{RenderFrame, Renderer};

/// One chart render lifecycle with explicit teardown.
///
/// The session owns the sample series, the renderer strategy, and the
/// current graph configuration. Re-rendering goes through this object
/// instead of module-level state, and `dispose` makes the session inert so
/// a replacement render cannot race a stale one.
#[derive(Debug)]
pub struct GraphSession<R: Renderer> {
    renderer: R,
    samples: Vec<Sample>,
    options: GraphConfigOptions,
    visible_count: usize,
    viewport: Viewport,
    config: GraphConfig,
    active_point: Option<GraphPoint>,
    disposed: bool,
}

impl<R: Renderer> GraphSession<R> {
    pub fn new(
        renderer: R,
        samples: Vec<Sample>,
        visible_count: usize,
        viewport: Viewport,
        options: GraphConfigOptions,
    ) -> GraphResult<Self> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let config = GraphConfig::build(
            GraphInput::Samples {
                samples: &samples,
                visible_count,
            },
            options,
        )?;

        tracing::debug!(
            samples = samples.len(),
            visible_count,
            width = viewport.width,
            height = viewport.height,
            "graph session created"
        );

        Ok(Self {
            renderer,
            samples,
            options,
            visible_count,
            viewport,
            config,
            active_point: None,
            disposed: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn active_point(&self) -> Option<GraphPoint> {
        self.active_point
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Draws the current configuration through the renderer strategy.
    pub fn draw(&mut self) -> GraphResult<()> {
        self.ensure_live()?;
        let frame = RenderFrame::new(self.viewport, self.config.clone());
        self.renderer.draw(&frame)
    }

    /// Recomputes the full configuration for a new viewport and redraws.
    ///
    /// A resize is a whole new render pass; nothing incremental is kept.
    pub fn resize(&mut self, viewport: Viewport) -> GraphResult<()> {
        self.ensure_live()?;
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        self.renderer.resize(viewport)?;
        self.viewport = viewport;
        self.rebuild()?;
        self.draw()
    }

    /// Changes the visible window size and recomputes, skipping the rebuild
    /// when the count is unchanged.
    ///
    /// The count is committed only once the rebuild succeeds, so a failed
    /// update leaves the previous configuration fully in effect.
    pub fn set_visible_count(&mut self, visible_count: usize) -> GraphResult<()> {
        self.ensure_live()?;
        if visible_count == self.visible_count {
            return Ok(());
        }

        let config = GraphConfig::build(
            GraphInput::Samples {
                samples: &self.samples,
                visible_count,
            },
            self.options,
        )?;
        self.visible_count = visible_count;
        self.config = config;
        Ok(())
    }

    /// Resolves a pointer move to the nearest data point and records it as
    /// the active point for legend display.
    pub fn on_pointer_move(
        &mut self,
        input: PointerInput,
        bounds: SurfaceBounds,
    ) -> GraphResult<Option<GraphPoint>> {
        self.ensure_live()?;
        let (local_x, _local_y) = local_coordinates(input, bounds);
        let active_x = clip_x_from_local(local_x, bounds)?;
        self.active_point = nearest_point(&self.config.points, active_x).copied();
        Ok(self.active_point)
    }

    pub fn on_pointer_leave(&mut self) {
        self.active_point = None;
    }

    /// Tears the session down. Every subsequent operation fails, which is
    /// how a caller replacing this render proves the old one cannot fire.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.active_point = None;
        tracing::debug!("graph session disposed");
    }

    fn rebuild(&mut self) -> GraphResult<()> {
        self.config = GraphConfig::build(
            GraphInput::Samples {
                samples: &self.samples,
                visible_count: self.visible_count,
            },
            self.options,
        )?;
        Ok(())
    }

    fn ensure_live(&self) -> GraphResult<()> {
        if self.disposed {
            return Err(GraphError::InvalidData(
                "graph session has been disposed".to_owned(),
            ));
        }
        Ok(())
    }
}
