use std::io::Read;

use crate::{
    displacement::model::Calculator,
    foundation::core::Vector2,
    foundation::error::{ScanError, ScanResult},
};

/// Per-channel multipliers applied to the row displacement by the shader.
///
/// Unequal values separate the colour channels proportionally to the displacement,
/// which produces the chromatic fringe. All three set to `(0, 0)` disables movement
/// entirely; all three equal disables the fringe.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FringeVectors {
    /// Red channel multiplier.
    pub red: Vector2,
    /// Green channel multiplier.
    pub green: Vector2,
    /// Blue channel multiplier.
    pub blue: Vector2,
}

impl FringeVectors {
    /// Same multiplier on every channel (no colour separation).
    pub const fn uniform(v: Vector2) -> Self {
        Self {
            red: v,
            green: v,
            blue: v,
        }
    }

    /// Channels in shader order.
    pub fn as_array(&self) -> [Vector2; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Default for FringeVectors {
    fn default() -> Self {
        Self {
            red: Vector2::splat(1.0),
            green: Vector2::splat(1.2),
            blue: Vector2::splat(1.8),
        }
    }
}

/// Host-facing configuration of one scan effect instance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScanEffectConfig {
    /// Active calculator, primitive or composed.
    #[serde(default)]
    pub calculator: Calculator,
    /// Channel fringe multipliers.
    #[serde(default)]
    pub fringe: FringeVectors,
    /// When `false` the effect is bypassed and content passes through untouched.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for ScanEffectConfig {
    fn default() -> Self {
        Self {
            calculator: Calculator::Zero,
            fringe: FringeVectors::default(),
            enabled: true,
        }
    }
}

impl ScanEffectConfig {
    /// Enabled effect with default fringe.
    pub fn new(calculator: impl Into<Calculator>) -> Self {
        Self {
            calculator: calculator.into(),
            ..Self::default()
        }
    }

    /// Replace the fringe.
    pub fn with_fringe(mut self, fringe: FringeVectors) -> Self {
        self.fringe = fringe;
        self
    }

    /// Set the enable flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check the calculator tree and that every fringe component is finite.
    pub fn validate(&self) -> ScanResult<()> {
        self.calculator.validate()?;
        for (name, v) in ["red", "green", "blue"]
            .into_iter()
            .zip(self.fringe.as_array())
        {
            if !v.is_finite() {
                return Err(ScanError::validation(format!(
                    "fringe.{name} must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    #[tracing::instrument(skip(s), fields(len = s.len()))]
    pub fn from_json_str(s: &str) -> ScanResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config from a reader.
    #[tracing::instrument(skip(r))]
    pub fn from_json_reader<R: Read>(r: R) -> ScanResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty JSON form. Fails when the calculator tree holds a custom calculator.
    pub fn to_json_string(&self) -> ScanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/config.rs"]
mod tests;
