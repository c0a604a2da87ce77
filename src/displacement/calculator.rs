use std::sync::Arc;

use crate::foundation::core::{Rect4, Vector2};

/// Computes how far scanned content is displaced while the sensor sits at a given row.
///
/// The frame driver calls [`evaluate`](Self::evaluate) once per sensor row on every
/// rendered frame, so implementations must be pure and cheap: no IO, no allocation,
/// no interior mutation. Degenerate geometry (zero-height content or sensor) must
/// produce a finite result; library calculators return [`Vector2::ZERO`] in that case.
pub trait DisplacementCalculator {
    /// Displacement for the sensor at `row_position`.
    ///
    /// - `row_position`: vertical position of the scan line, in sensor-area units.
    /// - `content_frame`: bounding box of the displaced content in sensor-area space.
    /// - `sensor_area_size`: full size of the scanned region.
    fn evaluate(
        &self,
        row_position: f32,
        content_frame: Rect4,
        sensor_area_size: Vector2,
    ) -> Vector2;
}

impl<T: DisplacementCalculator + ?Sized> DisplacementCalculator for &T {
    fn evaluate(
        &self,
        row_position: f32,
        content_frame: Rect4,
        sensor_area_size: Vector2,
    ) -> Vector2 {
        (**self).evaluate(row_position, content_frame, sensor_area_size)
    }
}

impl<T: DisplacementCalculator + ?Sized> DisplacementCalculator for Box<T> {
    fn evaluate(
        &self,
        row_position: f32,
        content_frame: Rect4,
        sensor_area_size: Vector2,
    ) -> Vector2 {
        (**self).evaluate(row_position, content_frame, sensor_area_size)
    }
}

impl<T: DisplacementCalculator + ?Sized> DisplacementCalculator for Arc<T> {
    fn evaluate(
        &self,
        row_position: f32,
        content_frame: Rect4,
        sensor_area_size: Vector2,
    ) -> Vector2 {
        (**self).evaluate(row_position, content_frame, sensor_area_size)
    }
}
