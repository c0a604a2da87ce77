use super::*;

const CONTENT: Rect4 = Rect4::new(20.0, 30.0, 60.0, 40.0);
const SENSOR: Vector2 = Vector2::new(200.0, 100.0);

fn rows() -> impl Iterator<Item = f32> {
    (0..100).map(|r| r as f32)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4
}

#[test]
fn zero_is_zero_everywhere() {
    for p in rows() {
        assert_eq!(zero().evaluate(p, CONTENT, SENSOR), Vector2::ZERO);
    }
    assert_eq!(
        zero().evaluate(-5.0, Rect4::default(), Vector2::ZERO),
        Vector2::ZERO
    );
}

#[test]
fn move_returns_offset_verbatim() {
    let calc = move_by(Vector2::new(3.0, -2.0));
    for p in rows() {
        assert_eq!(calc.evaluate(p, CONTENT, SENSOR), Vector2::new(3.0, -2.0));
    }
}

#[test]
fn relative_move_scales_by_sensor() {
    let calc = relative_move(Vector2::new(0.5, 0.0));
    for p in rows() {
        assert_eq!(calc.evaluate(p, CONTENT, SENSOR), Vector2::new(100.0, 0.0));
    }
}

#[test]
fn vertical_scale_is_linear_in_row() {
    let calc = vertical_scale(2.0);
    assert_eq!(calc.evaluate(0.0, CONTENT, SENSOR), Vector2::ZERO);
    assert_eq!(calc.evaluate(10.0, CONTENT, SENSOR), Vector2::new(0.0, 5.0));

    let anchored = vertical_scale(2.0).with_relative_anchor(0.5);
    assert_eq!(anchored.evaluate(50.0, CONTENT, SENSOR), Vector2::ZERO);
    assert_eq!(
        anchored.evaluate(40.0, CONTENT, SENSOR),
        Vector2::new(0.0, -5.0)
    );
}

#[test]
fn vertical_scale_zero_factor_is_inert() {
    let calc = vertical_scale(0.0);
    for p in rows() {
        assert_eq!(calc.evaluate(p, CONTENT, SENSOR), Vector2::ZERO);
    }
}

#[test]
fn scale_to_fill_is_identity_when_content_fits() {
    let fitted = Rect4::new(0.0, 0.0, 200.0, 100.0);
    for p in rows() {
        assert_eq!(
            vertical_scale_to_fill().evaluate(p, fitted, SENSOR),
            Vector2::ZERO
        );
    }
}

#[test]
fn scale_to_fill_matches_explicit_scale() {
    // factor = 100 / 40, anchor = 50 / 100
    let explicit = vertical_scale(2.5).with_relative_anchor(0.5);
    for p in rows() {
        let a = vertical_scale_to_fill().evaluate(p, CONTENT, SENSOR);
        let b = explicit.evaluate(p, CONTENT, SENSOR);
        assert!(approx(a.y, b.y), "row {p}: {a:?} != {b:?}");
        assert_eq!(a.x, 0.0);
    }
}

#[test]
fn scale_to_fill_guards_degenerate_geometry() {
    let flat = Rect4::new(0.0, 10.0, 50.0, 0.0);
    assert_eq!(
        vertical_scale_to_fill().evaluate(5.0, flat, SENSOR),
        Vector2::ZERO
    );
    assert_eq!(
        vertical_scale_to_fill().evaluate(5.0, CONTENT, Vector2::new(200.0, 0.0)),
        Vector2::ZERO
    );
}

#[test]
fn line_of_content_tracks_the_middle_by_default() {
    let calc = verticalized_line_of_content();
    // middle line sits at 30 + 40 * 0.5 = 50
    assert_eq!(calc.evaluate(50.0, CONTENT, SENSOR), Vector2::ZERO);
    assert_eq!(calc.evaluate(60.0, CONTENT, SENSOR), Vector2::new(0.0, 10.0));

    let top = calc.at_relative_content_offset(0.0);
    assert_eq!(top.evaluate(30.0, CONTENT, SENSOR), Vector2::ZERO);
}

#[test]
fn full_compounding_collapses_to_line_tracking() {
    let calc = compounding(1.0);
    let line = verticalized_line_of_content().at_relative_content_offset(0.0);
    for p in rows() {
        assert_eq!(
            calc.evaluate(p, CONTENT, SENSOR),
            line.evaluate(p, CONTENT, SENSOR)
        );
    }
}

#[test]
fn compounding_switches_at_a_hard_boundary() {
    let calc = compounding(0.25);
    let line = verticalized_line_of_content().at_relative_content_offset(0.75);
    let fill = vertical_scale_to_fill();

    // boundary row: 100 * (1 - 0.25) = 75
    for p in 0..75 {
        let p = p as f32;
        assert_eq!(
            calc.evaluate(p, CONTENT, SENSOR),
            fill.evaluate(p, CONTENT, SENSOR)
        );
    }
    for p in 75..100 {
        let p = p as f32;
        assert_eq!(
            calc.evaluate(p, CONTENT, SENSOR),
            line.evaluate(p, CONTENT, SENSOR)
        );
    }
}

#[test]
fn compounding_clamps_progress_and_guards_sensor() {
    let over = compounding(4.0);
    let full = compounding(1.0);
    assert_eq!(
        over.evaluate(12.0, CONTENT, SENSOR),
        full.evaluate(12.0, CONTENT, SENSOR)
    );
    assert_eq!(
        full.evaluate(12.0, CONTENT, Vector2::new(200.0, 0.0)),
        Vector2::ZERO
    );
    assert_eq!(
        full.evaluate(12.0, CONTENT, Vector2::new(200.0, -10.0)),
        Vector2::ZERO
    );
}

#[test]
fn horizontal_sin_matches_reference_value() {
    let calc = horizontal_sin(10.0).with_period(40.0);
    let v = calc.evaluate(10.0, CONTENT, SENSOR);
    assert!(approx(v.x, 2.474_04), "{v:?}");
    assert_eq!(v.y, 0.0);
}

#[test]
fn horizontal_sin_defaults_and_phase() {
    let calc = horizontal_sin(2.0);
    assert_eq!(calc.period, std::f32::consts::TAU);
    assert_eq!(calc.evaluate(0.0, CONTENT, SENSOR), Vector2::ZERO);

    let shifted = calc.with_phase(std::f32::consts::FRAC_PI_2);
    assert!(approx(shifted.evaluate(0.0, CONTENT, SENSOR).x, 2.0));
}

#[test]
fn horizontal_sin_zero_period_is_inert() {
    let calc = horizontal_sin(10.0).with_period(0.0);
    for p in rows() {
        assert_eq!(calc.evaluate(p, CONTENT, SENSOR), Vector2::ZERO);
    }
}
