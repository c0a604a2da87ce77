use crate::{
    displacement::model::Calculator,
    effect::{
        config::{FringeVectors, ScanEffectConfig},
        driver::FrameDriver,
        shader_args::ShaderArguments,
    },
    foundation::core::{Rect, Rect4, Size, Vector2},
    foundation::error::ScanResult,
    render::cpu::{FrameRGBA, apply_scan_layer},
};

/// A configured scan effect attached to one piece of content.
///
/// The host feeds layout results through [`set_sensor_area_size`](Self::set_sensor_area_size)
/// and [`set_content_frame`](Self::set_content_frame), then calls
/// [`prepare_frame`](Self::prepare_frame) once per rendered frame.
#[derive(Debug, Default)]
pub struct ScanEffect {
    config: ScanEffectConfig,
    driver: FrameDriver,
}

impl ScanEffect {
    /// Effect with the given configuration and no geometry yet.
    pub fn new(config: ScanEffectConfig) -> Self {
        Self {
            config,
            driver: FrameDriver::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ScanEffectConfig {
        &self.config
    }

    /// Frame driver (cached rows and geometry).
    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    /// Replace the active calculator.
    pub fn set_calculator(&mut self, calculator: impl Into<Calculator>) {
        self.config.calculator = calculator.into();
    }

    /// Replace the fringe vectors.
    pub fn set_fringe(&mut self, fringe: FringeVectors) {
        self.config.fringe = fringe;
    }

    /// Enable or bypass the effect.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Whether the effect currently runs.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Size of the scanned container as laid out by the host.
    pub fn set_sensor_area_size(&mut self, size: Option<Size>) {
        self.driver.set_sensor_area_size(size.map(Vector2::from));
    }

    /// Content bounds in the container's coordinate space.
    pub fn set_content_frame(&mut self, frame: Option<Rect>) {
        self.driver.set_content_frame(frame.map(Rect4::from));
    }

    /// Shader arguments for this frame, or `None` when the effect is disabled and
    /// the content should be drawn untouched.
    pub fn prepare_frame(&mut self) -> Option<ShaderArguments<'_>> {
        if !self.config.enabled {
            return None;
        }
        let fringe = self.config.fringe;
        Some(match self.driver.sample(&self.config.calculator) {
            Some(sample) => ShaderArguments::ready(sample, fringe),
            None => ShaderArguments::pending(),
        })
    }

    /// Run the CPU reference shader over `layer`, or clone it when disabled.
    pub fn render_cpu(&mut self, layer: &FrameRGBA) -> ScanResult<FrameRGBA> {
        match self.prepare_frame() {
            Some(args) => apply_scan_layer(layer, &args),
            None => Ok(layer.clone()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/scan.rs"]
mod tests;
