//! End-to-end checks of the correction engine against the built-in presets.
//!
//! Run with: `cargo test -p curvelab-core`

use std::io::Cursor;

use curvelab_core::{Channels, CorrectionEngine, CurvelabError, PixelBuffer, ResponseCurvePreset};
use image::RgbaImage;

/// Every 8-bit value appears in every channel, with varying alpha.
fn create_ramp_source() -> PixelBuffer {
    let width = 16u32;
    let height = 16u32;
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = (y * width + x) as u8;
            data.extend_from_slice(&[v, 255 - v, v.wrapping_mul(7), v / 2]);
        }
    }
    PixelBuffer::from_raw(width, height, Channels::Rgba, (width * 4) as usize, data).unwrap()
}

fn expected_rgb(source: &PixelBuffer) -> Vec<u8> {
    source
        .to_packed()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}

#[test]
fn test_identity_presets_reproduce_source_rgb() {
    let source = create_ramp_source();
    let expected = expected_rgb(&source);
    let mut engine = CorrectionEngine::new(source).unwrap();

    for name in ["identity-linear", "identity-exp"] {
        let out = engine.apply_preset_named(name).unwrap();
        assert_eq!(out.as_raw(), &expected, "{name}");
    }
}

#[test]
fn test_invert_negates_every_sample() {
    let source = create_ramp_source();
    let expected: Vec<u8> = expected_rgb(&source).iter().map(|v| 255 - v).collect();
    let mut engine = CorrectionEngine::new(source).unwrap();

    let out = engine.apply_preset_named("invert").unwrap();
    assert_eq!(out.as_raw(), &expected);
}

#[test]
fn test_each_preset_is_deterministic_regardless_of_history() {
    let mut engine = CorrectionEngine::new(create_ramp_source()).unwrap();
    let count = engine.presets().len();

    let fresh: Vec<_> = (0..count)
        .map(|i| engine.apply_preset_at(i).unwrap().clone())
        .collect();

    // Walk the table backwards, applying each preset twice.
    for i in (0..count).rev() {
        let once = engine.apply_preset_at(i).unwrap().clone();
        let twice = engine.apply_preset_at(i).unwrap().clone();
        assert_eq!(once, twice, "preset {i}");
        assert_eq!(once, fresh[i], "preset {i}");
    }
}

#[test]
fn test_darken_and_lighten_bracket_the_source() {
    let source = create_ramp_source();
    let original = expected_rgb(&source);
    let mut engine = CorrectionEngine::new(source).unwrap();

    let darker = engine.apply_preset_named("darken").unwrap().as_raw().clone();
    let lighter = engine.apply_preset_named("lighten").unwrap().as_raw().clone();
    for ((&o, &d), &l) in original.iter().zip(&darker).zip(&lighter) {
        assert!(d <= o && o <= l, "{d} <= {o} <= {l}");
    }
}

#[test]
fn test_custom_preset_boundary_is_inclusive() {
    let source = PixelBuffer::from_raw(1, 1, Channels::Rgba, 4, vec![0, 1, 255, 255]).unwrap();
    let mut engine = CorrectionEngine::new(source).unwrap();

    let lifted = ResponseCurvePreset::new("lifted", "X1", 0, [0.0, 0.5], 2.2);
    let out = engine.apply_preset(&lifted);
    assert_eq!(out.get_pixel(0, 0).0, [128, 0, 255]);
    assert_eq!(engine.active_preset(), &lifted);
}

#[test]
fn test_strided_source_ignores_padding() {
    // 2x2 RGBA with 3 junk bytes after each row.
    let data = vec![
        10, 20, 30, 255, 40, 50, 60, 255, 9, 9, 9, //
        70, 80, 90, 255, 100, 110, 120, 255, 9, 9, 9,
    ];
    let source = PixelBuffer::from_raw(2, 2, Channels::Rgba, 11, data).unwrap();
    let mut engine = CorrectionEngine::new(source).unwrap();

    let out = engine.apply_preset_named("invert").unwrap();
    assert_eq!(
        out.as_raw(),
        &vec![245, 235, 225, 215, 205, 195, 185, 175, 165, 155, 145, 135]
    );
    assert_eq!(engine.destination().row_bytes(), 6);
}

#[test]
fn test_from_encoded_png() {
    let img = RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255]).unwrap();
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let mut engine = CorrectionEngine::from_encoded(&png).unwrap();
    let out = engine.apply_preset_named("L4").unwrap();
    assert_eq!(out.as_raw(), &vec![0, 255, 255, 255, 0, 255]);
}

#[test]
fn test_from_encoded_rejects_garbage() {
    assert!(matches!(
        CorrectionEngine::from_encoded(&[0x00, 0x01, 0x02]),
        Err(CurvelabError::Decode(_))
    ));
}

#[test]
fn test_presets_serialize_for_reporting() {
    let engine = CorrectionEngine::new(create_ramp_source()).unwrap();
    let json = serde_json::to_value(engine.presets()).unwrap();
    assert_eq!(json[3]["label"], "invert");
    assert_eq!(json[3]["code"], "L4");
    assert_eq!(json[5]["boundary"], 0);
}
