use super::*;
use crate::{
    displacement::library::{move_by, zero},
    effect::{config::FringeVectors, driver::FrameDriver},
};

fn gradient(width: u32, height: u32) -> FrameRGBA {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 20) as u8, (y * 20) as u8, 100, 255]);
        }
    }
    FrameRGBA {
        width,
        height,
        data,
        premultiplied: true,
    }
}

#[test]
fn pending_arguments_pass_through() {
    let layer = gradient(6, 4);
    let out = apply_scan_layer(&layer, &ShaderArguments::pending()).unwrap();
    assert_eq!(out, layer);
}

#[test]
fn zero_displacement_over_full_frame_is_identity() {
    let layer = gradient(6, 4);
    let mut driver = FrameDriver::new();
    let sample = driver.compute_frame(
        Vector2::new(6.0, 4.0),
        Rect4::new(0.0, 0.0, 6.0, 4.0),
        &zero(),
    );
    let args = ShaderArguments::ready(sample, FringeVectors::default());
    let out = apply_scan_layer(&layer, &args).unwrap();
    assert_eq!(out, layer);
}

#[test]
fn uniform_move_shifts_every_channel() {
    let layer = gradient(6, 4);
    let mut driver = FrameDriver::new();
    let sample = driver.compute_frame(
        Vector2::new(6.0, 4.0),
        Rect4::new(0.0, 0.0, 6.0, 4.0),
        &move_by(Vector2::new(2.0, 0.0)),
    );
    let args = ShaderArguments::ready(sample, FringeVectors::uniform(Vector2::splat(1.0)));
    let out = apply_scan_layer(&layer, &args).unwrap();

    // columns 0 and 1 read from x < 0
    assert_eq!(out.pixel(0, 1), [0, 0, 0, 0]);
    assert_eq!(out.pixel(1, 1), [0, 0, 0, 0]);
    assert_eq!(out.pixel(2, 1), layer.pixel(0, 1));
    assert_eq!(out.pixel(5, 3), layer.pixel(3, 3));
}

#[test]
fn fringe_separates_channels() {
    let layer = gradient(8, 2);
    let mut driver = FrameDriver::new();
    let sample = driver.compute_frame(
        Vector2::new(8.0, 2.0),
        Rect4::new(0.0, 0.0, 8.0, 2.0),
        &move_by(Vector2::new(1.0, 0.0)),
    );
    let fringe = FringeVectors {
        red: Vector2::new(1.0, 0.0),
        green: Vector2::new(0.0, 0.0),
        blue: Vector2::new(3.0, 0.0),
    };
    let out = apply_scan_layer(&layer, &ShaderArguments::ready(sample, fringe)).unwrap();

    let px = out.pixel(4, 0);
    assert_eq!(px[0], layer.pixel(3, 0)[0]);
    assert_eq!(px[1], layer.pixel(4, 0)[1]);
    assert_eq!(px[2], layer.pixel(1, 0)[2]);
    assert_eq!(px[3], 255);
}

#[test]
fn reads_outside_content_frame_are_transparent() {
    let layer = gradient(4, 4);
    let mut driver = FrameDriver::new();
    let sample = driver.compute_frame(
        Vector2::new(4.0, 4.0),
        Rect4::new(0.0, 0.0, 2.0, 4.0),
        &zero(),
    );
    let out = apply_scan_layer(&layer, &ShaderArguments::ready(sample, FringeVectors::default()))
        .unwrap();
    assert_eq!(out.pixel(1, 2), layer.pixel(1, 2));
    assert_eq!(out.pixel(2, 2), [0, 0, 0, 0]);
}

#[test]
fn mismatched_buffer_is_a_render_error() {
    let mut layer = gradient(4, 4);
    layer.data.pop();
    let err = apply_scan_layer(&layer, &ShaderArguments::pending()).unwrap_err();
    assert!(matches!(err, ScanError::Render(_)));
}

#[test]
fn straight_alpha_round_trip_at_full_and_zero_alpha() {
    let data = vec![200, 100, 50, 255, 200, 100, 50, 0];
    let frame = FrameRGBA::from_straight_rgba8(2, 1, data).unwrap();
    assert_eq!(frame.pixel(0, 0), [200, 100, 50, 255]);
    assert_eq!(frame.pixel(1, 0), [0, 0, 0, 0]);
    assert_eq!(frame.to_straight_rgba8(), vec![200, 100, 50, 255, 0, 0, 0, 0]);
}

#[test]
fn place_on_canvas_clips_to_bounds() {
    let content = gradient(2, 2);
    let canvas = FrameRGBA::place_on_canvas(&content, 3, 3, 2, -1).unwrap();
    assert_eq!(canvas.pixel(2, 0), content.pixel(0, 1));
    assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(canvas.pixel(2, 2), [0, 0, 0, 0]);
}
