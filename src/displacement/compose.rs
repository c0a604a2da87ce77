use crate::{
    displacement::{calculator::DisplacementCalculator, model::Calculator},
    foundation::core::{Rect4, Vector2},
    foundation::error::{ScanError, ScanResult},
};

/// Ordered sum of calculators, itself usable wherever a calculator is.
///
/// Every component is evaluated with the same inputs and the results are added
/// component-wise. Components are kept exactly as given: no reordering,
/// deduplication or short-circuiting. A sum always holds at least one component.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Calculator>", into = "Vec<Calculator>")]
pub struct Composed {
    components: Vec<Calculator>,
}

impl Composed {
    /// Sum `components`; fails when the list is empty.
    pub fn new(components: Vec<Calculator>) -> ScanResult<Self> {
        if components.is_empty() {
            return Err(ScanError::validation(
                "a composed calculator needs at least one component",
            ));
        }
        Ok(Self { components })
    }

    pub(crate) fn from_pair(first: Calculator, second: Calculator) -> Self {
        Self {
            components: vec![first, second],
        }
    }

    /// Start an [`AdditiveBuilder`].
    pub fn builder() -> AdditiveBuilder {
        AdditiveBuilder::default()
    }

    /// Components in evaluation order.
    pub fn components(&self) -> &[Calculator] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` when there are no components, which construction rules out.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub(crate) fn validate(&self) -> ScanResult<()> {
        if self.components.is_empty() {
            return Err(ScanError::validation(
                "a composed calculator needs at least one component",
            ));
        }
        self.components.iter().try_for_each(Calculator::validate)
    }
}

impl DisplacementCalculator for Composed {
    fn evaluate(&self, row: f32, content: Rect4, sensor: Vector2) -> Vector2 {
        let mut total = Vector2::ZERO;
        for component in &self.components {
            total += component.evaluate(row, content, sensor);
        }
        total
    }
}

impl TryFrom<Vec<Calculator>> for Composed {
    type Error = ScanError;

    fn try_from(components: Vec<Calculator>) -> ScanResult<Self> {
        Self::new(components)
    }
}

impl From<Composed> for Vec<Calculator> {
    fn from(c: Composed) -> Self {
        c.components
    }
}

/// Collects calculators in order and sums them into one [`Composed`].
#[derive(Clone, Debug, Default)]
pub struct AdditiveBuilder {
    components: Vec<Calculator>,
}

impl AdditiveBuilder {
    /// Append one component.
    pub fn add(mut self, calculator: impl Into<Calculator>) -> Self {
        self.components.push(calculator.into());
        self
    }

    /// Append several components, keeping their order.
    pub fn extend<I, C>(mut self, calculators: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Calculator>,
    {
        self.components
            .extend(calculators.into_iter().map(Into::into));
        self
    }

    /// Finish; fails when nothing was added.
    pub fn build(self) -> ScanResult<Composed> {
        Composed::new(self.components)
    }
}

/// Sum an explicit list of calculators into a single [`Calculator`].
pub fn sum<I, C>(calculators: I) -> ScanResult<Calculator>
where
    I: IntoIterator<Item = C>,
    C: Into<Calculator>,
{
    Ok(Calculator::Sum(
        AdditiveBuilder::default().extend(calculators).build()?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/displacement/compose.rs"]
mod tests;
