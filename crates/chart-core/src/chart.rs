// File: crates/chart-core/src/chart.rs
// Summary: Chart value owning its bars, viewport, renderer, input controller and surface.

use tracing::debug;

use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::input::{InputController, WheelEvent, WheelOutcome};
use crate::render::{ChartRenderer, RenderStats};
use crate::series::{Bar, BarSeries};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::view::Viewport;

/// One chart instance bound to one surface. Handlers take it by `&mut`;
/// every event runs clamp-then-redraw to completion before returning.
pub struct Chart<S: Surface> {
    bars: BarSeries,
    viewport: Viewport,
    renderer: ChartRenderer,
    input: InputController,
    surface: S,
}

impl<S: Surface> Chart<S> {
    pub fn new(surface: S, config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let mut viewport = Viewport::from_config(&config);
        viewport.set_extent(0, surface.size().width_f32());
        Ok(Self {
            bars: BarSeries::new(),
            viewport,
            renderer: ChartRenderer::new(&config),
            input: InputController::from_config(&config),
            surface,
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.renderer.theme = theme;
        self
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.renderer.theme = theme;
    }

    pub fn with_renderer(mut self, renderer: ChartRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the bar sequence. The current offset is kept if still in bounds.
    pub fn set_bars(&mut self, bars: impl Into<BarSeries>) {
        self.bars = bars.into();
        self.sync_extent();
        debug!(bars = self.bars.len(), "bars set");
    }

    pub fn bars(&self) -> &[Bar] { self.bars.as_slice() }
    pub fn series(&self) -> &BarSeries { &self.bars }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn renderer(&self) -> &ChartRenderer { &self.renderer }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }

    /// Re-read the surface width after the host resized it.
    pub fn resize(&mut self) {
        self.sync_extent();
    }

    pub fn draw(&mut self) -> ChartResult<RenderStats> {
        self.sync_extent();
        self.renderer.draw(self.bars.as_slice(), &self.viewport, &mut self.surface)
    }

    /// Pan or zoom per the event, then redraw.
    pub fn on_wheel(&mut self, event: WheelEvent) -> ChartResult<WheelOutcome> {
        self.sync_extent();
        let outcome = self.input.handle_wheel(&event, &mut self.viewport);
        self.draw()?;
        Ok(outcome)
    }

    fn sync_extent(&mut self) {
        let width = self.surface.size().width_f32();
        self.viewport.set_extent(self.bars.len(), width);
    }
}
