use std::ops::{Add, AddAssign, Mul, Neg, Sub};

pub use kurbo::{Rect, Size, Vec2};

/// Two-component single-precision vector used for displacements and sizes.
///
/// The layout is `#[repr(C)]` so a `&[Vector2]` can be viewed as interleaved
/// `x, y` floats without copying (see [`bytemuck::cast_slice`]).
#[repr(C)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Vector2 {
    /// Horizontal component (or width when used as a size).
    pub x: f32,
    /// Vertical component (or height when used as a size).
    pub y: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Build a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build a vector with both components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Width alias for `x` when the vector describes a size.
    pub fn width(self) -> f32 {
        self.x
    }

    /// Height alias for `y` when the vector describes a size.
    pub fn height(self) -> f32 {
        self.y
    }

    /// `true` when both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Replace each non-finite component with `0.0`.
    pub fn finite_or_zero(self) -> Self {
        Self {
            x: crate::foundation::math::finite_or_zero(self.x),
            y: crate::foundation::math::finite_or_zero(self.y),
        }
    }

    /// Components as a plain array, in shader order.
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// Component-wise.
impl Mul for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl std::iter::Sum for Vector2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<Size> for Vector2 {
    fn from(s: Size) -> Self {
        Self::new(s.width as f32, s.height as f32)
    }
}

/// Axis-aligned rectangle stored as origin plus size, in sensor-area space.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect4 {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect4 {
    /// Build a rectangle from origin and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin with the given size.
    pub fn from_size(size: Vector2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    /// Left edge.
    pub fn min_x(self) -> f32 {
        self.x
    }

    /// Top edge.
    pub fn min_y(self) -> f32 {
        self.y
    }

    /// Right edge (exclusive).
    pub fn max_x(self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }

    /// Vertical center: `y + height / 2`.
    pub fn mid_y(self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Size as a vector.
    pub fn size(self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Half-open containment test (`[min, max)` on both axes).
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y()
    }

    /// `x, y, width, height` in shader order.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

impl From<Rect> for Rect4 {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(
            r.x0 as f32,
            r.y0 as f32,
            r.width() as f32,
            r.height() as f32,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
