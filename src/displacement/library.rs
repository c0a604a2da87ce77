//! Named displacement behaviors.
//!
//! Notation used below: `p` is the sensor row position, `C` the content frame and
//! `S` the sensor area size. Every formula that divides guards its denominator and
//! yields [`Vector2::ZERO`] instead of a non-finite value.

use std::f32::consts::TAU;

pub use crate::displacement::compose::sum;

use crate::{
    displacement::calculator::DisplacementCalculator,
    foundation::core::{Rect4, Vector2},
    foundation::math::checked_div,
};

/// No displacement at all. Useful to preview the untouched content and sensor area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Zero;

impl DisplacementCalculator for Zero {
    fn evaluate(&self, _row: f32, _content: Rect4, _sensor: Vector2) -> Vector2 {
        Vector2::ZERO
    }
}

/// Constant move for the whole scan frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Move {
    /// Offset applied on every row.
    pub offset: Vector2,
}

impl DisplacementCalculator for Move {
    fn evaluate(&self, _row: f32, _content: Rect4, _sensor: Vector2) -> Vector2 {
        self.offset
    }
}

/// Constant move expressed as a fraction of the sensor area size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RelativeMove {
    /// Offset multiplied component-wise by the sensor area size.
    pub relative_offset: Vector2,
}

impl DisplacementCalculator for RelativeMove {
    fn evaluate(&self, _row: f32, _content: Rect4, sensor: Vector2) -> Vector2 {
        self.relative_offset * sensor
    }
}

/// Vertical scale around an anchor row: `(0, (p - anchor * S.y) * (1 - 1 / factor))`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VerticalScale {
    /// Scale factor; `0` yields no displacement.
    pub factor: f32,
    /// Anchor row as a fraction of the sensor height.
    #[serde(default)]
    pub relative_anchor: f32,
}

impl VerticalScale {
    /// Replace the anchor (fraction of the sensor height).
    pub fn with_relative_anchor(mut self, relative_anchor: f32) -> Self {
        self.relative_anchor = relative_anchor;
        self
    }
}

impl DisplacementCalculator for VerticalScale {
    fn evaluate(&self, row: f32, _content: Rect4, sensor: Vector2) -> Vector2 {
        let Some(inv) = checked_div(1.0, self.factor) else {
            return Vector2::ZERO;
        };
        Vector2::new(0.0, (row - self.relative_anchor * sensor.y) * (1.0 - inv))
    }
}

/// Scales content so it fills the sensor height, anchored at the content's center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VerticalScaleToFill;

impl DisplacementCalculator for VerticalScaleToFill {
    fn evaluate(&self, row: f32, content: Rect4, sensor: Vector2) -> Vector2 {
        let (Some(factor), Some(relative_anchor)) = (
            checked_div(sensor.height(), content.height),
            checked_div(content.mid_y(), sensor.height()),
        ) else {
            return Vector2::ZERO;
        };
        VerticalScale {
            factor,
            relative_anchor,
        }
        .evaluate(row, content, sensor)
    }
}

/// Keeps one content line glued to the sensor: `(0, p - (C.y + C.height * offset))`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VerticalizedLineOfContent {
    /// Tracked line as a fraction of the content height.
    #[serde(default = "half")]
    pub relative_content_offset: f32,
}

impl VerticalizedLineOfContent {
    /// Track the line at `relative_content_offset` of the content height.
    pub fn at_relative_content_offset(mut self, relative_content_offset: f32) -> Self {
        self.relative_content_offset = relative_content_offset;
        self
    }
}

impl Default for VerticalizedLineOfContent {
    fn default() -> Self {
        Self {
            relative_content_offset: 0.5,
        }
    }
}

impl DisplacementCalculator for VerticalizedLineOfContent {
    fn evaluate(&self, row: f32, content: Rect4, _sensor: Vector2) -> Vector2 {
        Vector2::new(
            0.0,
            row - (content.y + content.height * self.relative_content_offset),
        )
    }
}

/// Content "landing" as the scan progresses.
///
/// Rows whose normalized position `clamp(p, 0, S.h) / S.h` is at least
/// `1 - progress` track the content line at `1 - progress`; the remaining rows use
/// [`VerticalScaleToFill`]. The switch is a hard boundary, not a blend.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Compounding {
    /// Progress in `[0, 1]`; values outside are clamped.
    #[serde(default = "half")]
    pub relative_progress: f32,
}

impl Default for Compounding {
    fn default() -> Self {
        Self {
            relative_progress: 0.5,
        }
    }
}

impl DisplacementCalculator for Compounding {
    fn evaluate(&self, row: f32, content: Rect4, sensor: Vector2) -> Vector2 {
        let height = sensor.height();
        if !height.is_finite() || height <= 0.0 {
            return Vector2::ZERO;
        }
        let progress = if self.relative_progress.is_finite() {
            self.relative_progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let Some(normalized_row) = checked_div(row.clamp(0.0, height), height) else {
            return Vector2::ZERO;
        };

        if normalized_row >= 1.0 - progress {
            VerticalizedLineOfContent {
                relative_content_offset: 1.0 - progress,
            }
            .evaluate(row, content, sensor)
        } else {
            VerticalScaleToFill.evaluate(row, content, sensor)
        }
    }
}

/// Horizontal wave keyed to the row: `(amplitude * sin(p / period + phase), 0)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HorizontalSin {
    /// Peak horizontal offset.
    pub amplitude: f32,
    /// Rows per radian; `0` yields no displacement.
    #[serde(default = "tau")]
    pub period: f32,
    /// Phase offset in radians.
    #[serde(default)]
    pub phase: f32,
}

impl HorizontalSin {
    /// Replace the period.
    pub fn with_period(mut self, period: f32) -> Self {
        self.period = period;
        self
    }

    /// Replace the phase.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }
}

impl DisplacementCalculator for HorizontalSin {
    fn evaluate(&self, row: f32, _content: Rect4, _sensor: Vector2) -> Vector2 {
        let Some(t) = checked_div(row, self.period) else {
            return Vector2::ZERO;
        };
        Vector2::new(self.amplitude * (t + self.phase).sin(), 0.0)
    }
}

fn half() -> f32 {
    0.5
}

fn tau() -> f32 {
    TAU
}

/// See [`Zero`].
pub fn zero() -> Zero {
    Zero
}

/// See [`Move`].
pub fn move_by(offset: Vector2) -> Move {
    Move { offset }
}

/// See [`RelativeMove`].
pub fn relative_move(relative_offset: Vector2) -> RelativeMove {
    RelativeMove { relative_offset }
}

/// See [`VerticalScale`]. The anchor defaults to the top of the sensor.
pub fn vertical_scale(factor: f32) -> VerticalScale {
    VerticalScale {
        factor,
        relative_anchor: 0.0,
    }
}

/// See [`VerticalScaleToFill`].
pub fn vertical_scale_to_fill() -> VerticalScaleToFill {
    VerticalScaleToFill
}

/// See [`VerticalizedLineOfContent`]. Tracks the content's middle line by default.
pub fn verticalized_line_of_content() -> VerticalizedLineOfContent {
    VerticalizedLineOfContent::default()
}

/// See [`Compounding`].
pub fn compounding(relative_progress: f32) -> Compounding {
    Compounding { relative_progress }
}

/// See [`HorizontalSin`]. Period defaults to `2π`, phase to `0`.
pub fn horizontal_sin(amplitude: f32) -> HorizontalSin {
    HorizontalSin {
        amplitude,
        period: TAU,
        phase: 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/displacement/library.rs"]
mod tests;
