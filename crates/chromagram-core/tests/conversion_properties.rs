use chromagram_core::{
    ColorError, DEFAULT_GAMUT_EPSILON, Oklch, Rgb8, hex_to_rgb, is_in_srgb_gamut, oklch_to_rgb,
    rgb_to_hex, rgb_to_oklch,
};
use palette::convert::FromColorUnclamped;
use palette::{LinSrgb, Oklab, Srgb};

/// Every 8-bit sRGB color, blue varying fastest.
fn all_colors() -> impl Iterator<Item = (i32, i32, i32)> {
    (0..=255).flat_map(|r| (0..=255).flat_map(move |g| (0..=255).map(move |b| (r, g, b))))
}

fn forward(r: i32, g: i32, b: i32) -> Oklch {
    rgb_to_oklch(r, g, b).expect("channel in range")
}

#[test]
fn rgb_oklch_roundtrip_is_lossless_for_every_color() {
    for (r, g, b) in all_colors() {
        let lch = forward(r, g, b);
        let back = oklch_to_rgb(lch.l, lch.c, lch.h);
        assert_eq!(
            (i32::from(back.r), i32::from(back.g), i32::from(back.b)),
            (r, g, b),
            "roundtrip through {lch:?}"
        );
    }
}

#[test]
fn every_color_is_in_gamut() {
    for (r, g, b) in all_colors() {
        let lch = forward(r, g, b);
        assert!(
            is_in_srgb_gamut(lch.l, lch.c, lch.h, DEFAULT_GAMUT_EPSILON),
            "({r}, {g}, {b}) -> {lch:?} reported out of gamut"
        );
    }
}

#[test]
fn hue_and_chroma_stay_in_range() {
    for (r, g, b) in all_colors() {
        let lch = forward(r, g, b);
        assert!((0.0..360.0).contains(&lch.h), "({r}, {g}, {b}) hue {}", lch.h);
        assert!(lch.c >= 0.0);
    }
}

#[test]
fn grays_are_achromatic() {
    for v in 0..=255 {
        let lch = forward(v, v, v);
        assert!(lch.c < 1e-4, "gray {v} has chroma {}", lch.c);
        assert_eq!(lch.h, 0.0);
    }
}

#[test]
fn lightness_increases_along_the_gray_axis() {
    let lightness: Vec<f64> = (0..=255).map(|v| forward(v, v, v).l).collect();
    assert!(lightness.windows(2).all(|w| w[0] < w[1]));
    assert!(lightness[0].abs() < 1e-9);
    assert!((lightness[255] - 1.0).abs() < 1e-6);
}

#[test]
fn hex_roundtrip_for_every_color() {
    for (r, g, b) in all_colors() {
        let rgb = Rgb8::try_new(r, g, b).expect("channel in range");
        let hex = rgb_to_hex(rgb.r, rgb.g, rgb.b);
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(!hex.bytes().any(|c| c.is_ascii_lowercase()), "{hex}");
        assert_eq!(hex_to_rgb(&hex), Ok(rgb));
        assert_eq!(hex_to_rgb(&hex.to_ascii_lowercase()), Ok(rgb));
    }
}

#[test]
fn malformed_hex_is_rejected() {
    for s in ["123456", "#12345", "#GGGGGG"] {
        assert_eq!(hex_to_rgb(s), Err(ColorError::MalformedHex(s.to_owned())));
    }
}

#[test]
fn out_of_range_channels_are_rejected() {
    for (r, g, b) in [(256, 0, 0), (0, 256, 0), (0, 0, 256), (-1, 0, 0), (0, -300, 0)] {
        assert!(
            matches!(rgb_to_oklch(r, g, b), Err(ColorError::OutOfRange { .. })),
            "({r}, {g}, {b}) accepted"
        );
    }
}

#[test]
fn reference_vectors() {
    let red = forward(255, 0, 0);
    assert!((red.l - 0.6279).abs() < 1e-4);
    assert!((red.c - 0.2577).abs() < 1e-4);
    assert!((red.h - 29.23).abs() < 1e-2);

    let white = forward(255, 255, 255);
    assert!((white.l - 1.0).abs() < 1e-6);
    assert!(white.c.abs() < 1e-6);

    let rgb = oklch_to_rgb(0.6279, 0.2577, 29.23);
    assert!(rgb.r.abs_diff(255) <= 1, "{rgb:?}");
    assert!(rgb.g <= 1, "{rgb:?}");
    assert!(rgb.b <= 1, "{rgb:?}");
}

#[test]
fn out_of_gamut_input_is_clamped_not_rejected() {
    // Valid u8s by construction; is_in_srgb_gamut must agree it needed clamping.
    let _ = oklch_to_rgb(0.5, 0.4, 0.0);
    assert!(!is_in_srgb_gamut(0.5, 0.4, 0.0, DEFAULT_GAMUT_EPSILON));

    for h in (0..360).step_by(15) {
        let h = f64::from(h);
        let clamped = oklch_to_rgb(0.7, 0.39, h);
        assert!(!is_in_srgb_gamut(0.7, 0.39, h, DEFAULT_GAMUT_EPSILON), "h={h}");
        // Clamped colors are displayable, so they convert back without error.
        let lch = clamped.to_oklch();
        assert!(lch.is_in_srgb_gamut());
    }
}

#[test]
fn oklab_agrees_with_palette() {
    for (r, g, b) in all_colors().step_by(997) {
        let ours = Rgb8::try_new(r, g, b).expect("channel in range").to_oklab();

        let linear: LinSrgb<f64> =
            Srgb::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
                .into_linear();
        let theirs = Oklab::<f64>::from_color_unclamped(linear);

        assert!((ours.l - theirs.l).abs() < 1e-3, "({r}, {g}, {b}) L");
        assert!((ours.a - theirs.a).abs() < 1e-3, "({r}, {g}, {b}) a");
        assert!((ours.b - theirs.b).abs() < 1e-3, "({r}, {g}, {b}) b");
    }
}

#[test]
fn conversions_split_across_threads_match_serial() {
    let colors: Vec<(i32, i32, i32)> = all_colors().step_by(101).collect();
    let serial: Vec<Oklch> = colors.iter().map(|&(r, g, b)| forward(r, g, b)).collect();

    let parallel: Vec<Oklch> = std::thread::scope(|scope| {
        let handles: Vec<_> = colors
            .chunks(colors.len().div_ceil(4))
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|&(r, g, b)| forward(r, g, b))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(serial, parallel);
}
