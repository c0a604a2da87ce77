use super::*;

#[test]
fn vector_arithmetic_is_component_wise() {
    let a = Vector2::new(1.0, -2.0);
    let b = Vector2::new(3.0, 0.5);
    assert_eq!(a + b, Vector2::new(4.0, -1.5));
    assert_eq!(a * b, Vector2::new(3.0, -1.0));
    assert_eq!(a * 2.0, Vector2::new(2.0, -4.0));
    assert_eq!(-a, Vector2::new(-1.0, 2.0));

    let mut c = Vector2::ZERO;
    c += a;
    c += b;
    assert_eq!(c, a + b);
}

#[test]
fn vector_sum_starts_from_zero() {
    let empty: [Vector2; 0] = [];
    assert_eq!(empty.into_iter().sum::<Vector2>(), Vector2::ZERO);
    let total: Vector2 = [Vector2::new(1.0, 0.0), Vector2::new(2.0, 1.0)]
        .into_iter()
        .sum();
    assert_eq!(total, Vector2::new(3.0, 1.0));
}

#[test]
fn finite_or_zero_scrubs_each_component() {
    let v = Vector2::new(f32::NAN, 4.0).finite_or_zero();
    assert_eq!(v, Vector2::new(0.0, 4.0));
    let v = Vector2::new(1.0, f32::NEG_INFINITY).finite_or_zero();
    assert_eq!(v, Vector2::new(1.0, 0.0));
    assert!(v.is_finite());
}

#[test]
fn rect_derived_accessors() {
    let r = Rect4::new(10.0, 20.0, 40.0, 60.0);
    assert_eq!(r.mid_y(), 50.0);
    assert_eq!(r.max_x(), 50.0);
    assert_eq!(r.max_y(), 80.0);
    assert_eq!(r.size(), Vector2::new(40.0, 60.0));
    assert_eq!(r.to_array(), [10.0, 20.0, 40.0, 60.0]);
    assert!(r.contains(10.0, 20.0));
    assert!(!r.contains(50.0, 20.0));
    assert!(!r.contains(10.0, 80.0));
}

#[test]
fn kurbo_geometry_converts_with_min_corner() {
    let r: Rect4 = Rect::new(30.0, 40.0, 10.0, 20.0).into();
    assert_eq!(r, Rect4::new(10.0, 20.0, 20.0, 20.0));

    let s: Vector2 = Size::new(200.0, 100.0).into();
    assert_eq!(s, Vector2::new(200.0, 100.0));
    assert_eq!(s.width(), 200.0);
    assert_eq!(s.height(), 100.0);

    let v: Vector2 = Vec2::new(-1.5, 2.25).into();
    assert_eq!(v, Vector2::new(-1.5, 2.25));
}

#[test]
fn vectors_cast_to_interleaved_floats() {
    let vs = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)];
    let flat: &[f32] = bytemuck::cast_slice(&vs);
    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
}
