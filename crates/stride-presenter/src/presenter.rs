use stride_core::config::{PresentationConfig, ViewFormat};
use stride_core::models::{FeatureVector, Label};
use stride_core::traits::{IRenderSurface, Region};

use crate::views;

/// Writes views to a surface in the configured format.
pub struct Presenter<S: IRenderSurface> {
    surface: S,
    format: ViewFormat,
    precision: usize,
}

impl<S: IRenderSurface> Presenter<S> {
    pub fn new(surface: S, config: &PresentationConfig) -> Self {
        Self {
            surface,
            format: config.format,
            precision: config.precision,
        }
    }

    /// Replace the output region with the prediction table.
    pub fn render_prediction(&mut self, features: &FeatureVector, label: Label, duration_ms: f64) {
        let view = views::prediction(self.format, features, label, duration_ms, self.precision);
        self.surface.write_region(Region::Output, &view);
    }

    /// Replace the load-time region with the load duration.
    pub fn render_load_timing(&mut self, duration_ms: f64) {
        let view = views::load_timing(self.format, duration_ms);
        self.surface.write_region(Region::LoadTime, &view);
    }

    /// Replace the output region with a failure message.
    pub fn render_error(&mut self, message: &str) {
        let view = views::error(self.format, message);
        self.surface.write_region(Region::Output, &view);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
