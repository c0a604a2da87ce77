use crate::{
    displacement::calculator::DisplacementCalculator,
    foundation::core::{Rect4, Vector2},
    foundation::math::row_count,
};

/// One frame worth of sampled displacements, borrowed from a [`FrameDriver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSample<'a> {
    /// Sensor area size the rows were generated for.
    pub sensor_area_size: Vector2,
    /// Content bounding box used for evaluation.
    pub content_frame: Rect4,
    /// Row positions `0, 1, .., floor(height) - 1`.
    pub row_positions: &'a [f32],
    /// Displacement per row, aligned with `row_positions`.
    pub displacements: &'a [Vector2],
}

impl<'a> FrameSample<'a> {
    /// Number of sampled rows.
    pub fn row_count(&self) -> usize {
        self.row_positions.len()
    }

    /// Displacements as interleaved `x, y` floats (no copy).
    pub fn flattened_displacements(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.displacements)
    }

    /// Displacement for pixel row `y`, clamped to the sampled range.
    pub fn displacement_at_row(&self, y: usize) -> Vector2 {
        match self.displacements.len() {
            0 => Vector2::ZERO,
            n => self.displacements[y.min(n - 1)],
        }
    }

    /// Copy into an owned sample.
    pub fn to_owned_sample(&self) -> OwnedFrameSample {
        OwnedFrameSample {
            sensor_area_size: self.sensor_area_size,
            content_frame: self.content_frame,
            row_positions: self.row_positions.to_vec(),
            displacements: self.displacements.to_vec(),
        }
    }
}

/// Owned counterpart of [`FrameSample`], e.g. for serialization or cross-frame inspection.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OwnedFrameSample {
    /// Sensor area size the rows were generated for.
    pub sensor_area_size: Vector2,
    /// Content bounding box used for evaluation.
    pub content_frame: Rect4,
    /// Row positions.
    pub row_positions: Vec<f32>,
    /// Displacement per row.
    pub displacements: Vec<Vector2>,
}

impl OwnedFrameSample {
    /// Borrow as a [`FrameSample`].
    pub fn as_sample(&self) -> FrameSample<'_> {
        FrameSample {
            sensor_area_size: self.sensor_area_size,
            content_frame: self.content_frame,
            row_positions: &self.row_positions,
            displacements: &self.displacements,
        }
    }
}

/// Per-frame sampler that evaluates a calculator once per sensor row.
///
/// Geometry arrives through explicit setters. Row positions are cached and rebuilt
/// only when the sensor height changes; the displacement buffer is reused across
/// frames and only grows or shrinks when the row count changes.
#[derive(Debug, Default)]
pub struct FrameDriver {
    sensor_area_size: Option<Vector2>,
    content_frame: Option<Rect4>,
    rows_height: Option<f32>,
    row_positions: Vec<f32>,
    displacements: Vec<Vector2>,
    row_regenerations: u64,
}

impl FrameDriver {
    /// Driver with no geometry yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the sensor area size (`None` while the host has not laid it out).
    pub fn set_sensor_area_size(&mut self, size: Option<Vector2>) {
        self.sensor_area_size = size;
        match size {
            Some(size) => {
                if self.rows_height.map(f32::to_bits) != Some(size.height().to_bits()) {
                    self.regenerate_rows(size.height());
                }
            }
            None => {
                self.rows_height = None;
                self.row_positions.clear();
            }
        }
    }

    /// Record the content bounding box (`None` while not laid out).
    pub fn set_content_frame(&mut self, frame: Option<Rect4>) {
        self.content_frame = frame;
    }

    /// Last recorded sensor area size.
    pub fn sensor_area_size(&self) -> Option<Vector2> {
        self.sensor_area_size
    }

    /// Last recorded content frame.
    pub fn content_frame(&self) -> Option<Rect4> {
        self.content_frame
    }

    /// Cached row positions for the current sensor height.
    pub fn row_positions(&self) -> &[f32] {
        &self.row_positions
    }

    /// How many times row positions were rebuilt.
    pub fn row_regenerations(&self) -> u64 {
        self.row_regenerations
    }

    /// `true` once both sensor size and content frame are known.
    pub fn is_ready(&self) -> bool {
        self.sensor_area_size.is_some() && self.content_frame.is_some()
    }

    /// Update geometry and sample in one call.
    pub fn compute_frame<C>(
        &mut self,
        sensor_area_size: Vector2,
        content_frame: Rect4,
        calculator: &C,
    ) -> FrameSample<'_>
    where
        C: DisplacementCalculator + ?Sized,
    {
        self.set_sensor_area_size(Some(sensor_area_size));
        self.set_content_frame(Some(content_frame));
        self.evaluate_rows(sensor_area_size, content_frame, calculator)
    }

    /// Sample the current geometry, or `None` while either piece is still pending.
    pub fn sample<C>(&mut self, calculator: &C) -> Option<FrameSample<'_>>
    where
        C: DisplacementCalculator + ?Sized,
    {
        let (Some(sensor), Some(content)) = (self.sensor_area_size, self.content_frame) else {
            tracing::trace!(
                sensor = self.sensor_area_size.is_some(),
                content = self.content_frame.is_some(),
                "scan geometry pending"
            );
            return None;
        };
        Some(self.evaluate_rows(sensor, content, calculator))
    }

    fn regenerate_rows(&mut self, height: f32) {
        let rows = row_count(height);
        self.row_positions.clear();
        self.row_positions.extend((0..rows).map(|r| r as f32));
        self.rows_height = Some(height);
        self.row_regenerations += 1;
        tracing::debug!(rows, height, "regenerated sensor row positions");
    }

    fn evaluate_rows<C>(
        &mut self,
        sensor: Vector2,
        content: Rect4,
        calculator: &C,
    ) -> FrameSample<'_>
    where
        C: DisplacementCalculator + ?Sized,
    {
        self.displacements
            .resize(self.row_positions.len(), Vector2::ZERO);
        for (out, &row) in self.displacements.iter_mut().zip(&self.row_positions) {
            *out = calculator.evaluate(row, content, sensor).finite_or_zero();
        }

        FrameSample {
            sensor_area_size: sensor,
            content_frame: content,
            row_positions: &self.row_positions,
            displacements: &self.displacements,
        }
    }
}

/// Stateless form of [`FrameDriver::compute_frame`].
pub fn compute_frame<C>(
    sensor_area_size: Vector2,
    content_frame: Rect4,
    calculator: &C,
) -> OwnedFrameSample
where
    C: DisplacementCalculator + ?Sized,
{
    FrameDriver::new()
        .compute_frame(sensor_area_size, content_frame, calculator)
        .to_owned_sample()
}

#[cfg(test)]
#[path = "../../tests/unit/effect/driver.rs"]
mod tests;
