//! Conversions between pixels and density-independent pixels.
//!
//! `px = dp * (dpi / 160)`, where `dpi / 160` is the display's logical density.

use crate::error::DimensionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    density: f32,
}

impl DisplayMetrics {
    pub fn new(density: f32) -> Result<Self, DimensionError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(DimensionError::InvalidDensity { density });
        }
        Ok(Self { density })
    }

    /// Builds the metrics for a display with the given dots per inch.
    pub fn from_dpi(dpi: f32) -> Result<Self, DimensionError> {
        Self::new(dpi / 160.0)
    }

    /// The logical density of the display.
    pub fn screen_density(&self) -> f32 {
        self.density
    }

    pub fn convert_px_to_dp(&self, px: f32) -> f32 {
        px / self.density
    }

    pub fn convert_dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}

impl std::default::Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}
