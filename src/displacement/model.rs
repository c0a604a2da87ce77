use std::{fmt, sync::Arc};

use crate::{
    displacement::{
        calculator::DisplacementCalculator,
        compose::Composed,
        library::{
            Compounding, HorizontalSin, Move, RelativeMove, VerticalScale, VerticalScaleToFill,
            VerticalizedLineOfContent, Zero,
        },
    },
    foundation::core::{Rect4, Vector2},
    foundation::error::{ScanError, ScanResult},
};

/// Serializable displacement calculator: one variant per library behavior plus sums.
///
/// JSON shape: `{ "kind": "<snake_case name>", "params": { ... } }`; `sum` takes an
/// array of calculators as `params`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Calculator {
    /// See [`Zero`].
    #[default]
    Zero,
    /// See [`Move`].
    Move(Move),
    /// See [`RelativeMove`].
    RelativeMove(RelativeMove),
    /// See [`VerticalScale`].
    VerticalScale(VerticalScale),
    /// See [`VerticalScaleToFill`].
    VerticalScaleToFill,
    /// See [`VerticalizedLineOfContent`].
    VerticalizedLineOfContent(VerticalizedLineOfContent),
    /// See [`Compounding`].
    Compounding(Compounding),
    /// See [`HorizontalSin`].
    HorizontalSin(HorizontalSin),
    /// See [`Composed`].
    Sum(Composed),
    /// Host-defined calculator. Lives only in memory: serializing it fails and
    /// JSON can never produce it.
    #[serde(skip)]
    Custom(CustomCalculator),
}

/// Shared handle to a host-defined [`DisplacementCalculator`], so it can be summed
/// with library calculators and driven by the effect.
///
/// Equality is identity: two handles are equal when they share the same allocation.
#[derive(Clone)]
pub struct CustomCalculator {
    inner: Arc<dyn DisplacementCalculator + Send + Sync>,
}

impl CustomCalculator {
    /// Wrap `calculator` in a new shared handle.
    pub fn new(calculator: impl DisplacementCalculator + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(calculator),
        }
    }
}

impl fmt::Debug for CustomCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCalculator")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

impl PartialEq for CustomCalculator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl DisplacementCalculator for CustomCalculator {
    fn evaluate(&self, row: f32, content: Rect4, sensor: Vector2) -> Vector2 {
        self.inner.evaluate(row, content, sensor)
    }
}

impl From<Arc<dyn DisplacementCalculator + Send + Sync>> for CustomCalculator {
    fn from(inner: Arc<dyn DisplacementCalculator + Send + Sync>) -> Self {
        Self { inner }
    }
}

impl Calculator {
    /// Wrap a host-defined calculator.
    pub fn custom(calculator: impl DisplacementCalculator + Send + Sync + 'static) -> Self {
        Self::Custom(CustomCalculator::new(calculator))
    }

    /// Check parameters are finite and every sum is non-empty, recursively.
    pub fn validate(&self) -> ScanResult<()> {
        fn finite(name: &str, v: f32) -> ScanResult<()> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(ScanError::validation(format!("{name} must be finite")))
            }
        }

        match self {
            Self::Zero | Self::VerticalScaleToFill => Ok(()),
            Self::Move(m) => {
                finite("move.offset.x", m.offset.x)?;
                finite("move.offset.y", m.offset.y)
            }
            Self::RelativeMove(m) => {
                finite("relative_move.relative_offset.x", m.relative_offset.x)?;
                finite("relative_move.relative_offset.y", m.relative_offset.y)
            }
            Self::VerticalScale(s) => {
                finite("vertical_scale.factor", s.factor)?;
                finite("vertical_scale.relative_anchor", s.relative_anchor)
            }
            Self::VerticalizedLineOfContent(l) => finite(
                "verticalized_line_of_content.relative_content_offset",
                l.relative_content_offset,
            ),
            Self::Compounding(c) => finite("compounding.relative_progress", c.relative_progress),
            Self::HorizontalSin(s) => {
                finite("horizontal_sin.amplitude", s.amplitude)?;
                finite("horizontal_sin.period", s.period)?;
                finite("horizontal_sin.phase", s.phase)
            }
            Self::Sum(c) => c.validate(),
            Self::Custom(_) => Ok(()),
        }
    }

    /// Short lowercase name of the variant, as used in JSON.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Move(_) => "move",
            Self::RelativeMove(_) => "relative_move",
            Self::VerticalScale(_) => "vertical_scale",
            Self::VerticalScaleToFill => "vertical_scale_to_fill",
            Self::VerticalizedLineOfContent(_) => "verticalized_line_of_content",
            Self::Compounding(_) => "compounding",
            Self::HorizontalSin(_) => "horizontal_sin",
            Self::Sum(_) => "sum",
            Self::Custom(_) => "custom",
        }
    }
}

impl DisplacementCalculator for Calculator {
    fn evaluate(&self, row: f32, content: Rect4, sensor: Vector2) -> Vector2 {
        match self {
            Self::Zero => Zero.evaluate(row, content, sensor),
            Self::Move(c) => c.evaluate(row, content, sensor),
            Self::RelativeMove(c) => c.evaluate(row, content, sensor),
            Self::VerticalScale(c) => c.evaluate(row, content, sensor),
            Self::VerticalScaleToFill => VerticalScaleToFill.evaluate(row, content, sensor),
            Self::VerticalizedLineOfContent(c) => c.evaluate(row, content, sensor),
            Self::Compounding(c) => c.evaluate(row, content, sensor),
            Self::HorizontalSin(c) => c.evaluate(row, content, sensor),
            Self::Sum(c) => c.evaluate(row, content, sensor),
            Self::Custom(c) => c.evaluate(row, content, sensor),
        }
    }
}

impl From<Zero> for Calculator {
    fn from(_: Zero) -> Self {
        Self::Zero
    }
}

impl From<Move> for Calculator {
    fn from(c: Move) -> Self {
        Self::Move(c)
    }
}

impl From<RelativeMove> for Calculator {
    fn from(c: RelativeMove) -> Self {
        Self::RelativeMove(c)
    }
}

impl From<VerticalScale> for Calculator {
    fn from(c: VerticalScale) -> Self {
        Self::VerticalScale(c)
    }
}

impl From<VerticalScaleToFill> for Calculator {
    fn from(_: VerticalScaleToFill) -> Self {
        Self::VerticalScaleToFill
    }
}

impl From<VerticalizedLineOfContent> for Calculator {
    fn from(c: VerticalizedLineOfContent) -> Self {
        Self::VerticalizedLineOfContent(c)
    }
}

impl From<Compounding> for Calculator {
    fn from(c: Compounding) -> Self {
        Self::Compounding(c)
    }
}

impl From<HorizontalSin> for Calculator {
    fn from(c: HorizontalSin) -> Self {
        Self::HorizontalSin(c)
    }
}

impl From<Composed> for Calculator {
    fn from(c: Composed) -> Self {
        Self::Sum(c)
    }
}

impl From<CustomCalculator> for Calculator {
    fn from(c: CustomCalculator) -> Self {
        Self::Custom(c)
    }
}

impl From<Arc<dyn DisplacementCalculator + Send + Sync>> for Calculator {
    fn from(c: Arc<dyn DisplacementCalculator + Send + Sync>) -> Self {
        Self::Custom(c.into())
    }
}

/// Ready-made combinations.
pub mod presets {
    use super::Calculator;
    use crate::displacement::{
        compose::Composed,
        library::{compounding, horizontal_sin},
    };

    /// Content landing from the top while wobbling sideways.
    ///
    /// Sum of [`compounding`] at `relative_progress` and a 10-unit horizontal sine
    /// whose period stretches from 40 to 140 rows as progress goes from 0 to 1.
    pub fn landing(relative_progress: f32) -> Calculator {
        Calculator::Sum(Composed::from_pair(
            compounding(relative_progress).into(),
            horizontal_sin(10.0)
                .with_period(40.0 + relative_progress * 100.0)
                .into(),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/displacement/model.rs"]
mod tests;
