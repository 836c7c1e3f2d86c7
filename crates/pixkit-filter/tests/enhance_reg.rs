//! Tone mapping regression test
//!
//! Gamma and contrast tables, grey equalization and HSB brightness
//! equalization.

use pixkit_color::to_greyscale;
use pixkit_core::{PixelBuffer, compute_histogram};
use pixkit_filter::{
    ContrastPoint, GAMMA_MAX, GAMMA_MIN, LookupTable, apply_lookup_table, contrast_table,
    equalize_brightness, equalize_grey, gamma_table, grey_equalization_table,
};
use pixkit_test::{RegParams, make_gradient, make_tricolor, make_uniform};

#[test]
fn enhance_reg() {
    let mut rp = RegParams::new("enhance");

    let pixs = make_gradient(128, 16);

    // --- Test 1: Gamma 1.0 is the identity ---
    let out = apply_lookup_table(&pixs, &gamma_table(1.0)).expect("gamma 1.0");
    rp.compare_buffers(&pixs, &out);

    // --- Test 2: Gamma lightens above 1.0 and darkens below ---
    for &gamma in &[GAMMA_MIN, 0.5, 2.0, GAMMA_MAX] {
        let table = gamma_table(gamma);
        rp.compare_values(0.0, table[0], 0.0);
        rp.compare_values(1.0, table[255], 1e-12);
        rp.compare_values(1.0, if table.is_non_decreasing() { 1.0 } else { 0.0 }, 0.0);

        let out = apply_lookup_table(&pixs, &table).expect("apply gamma");
        let (r, _, _) = out.get_rgb_unchecked(64, 0);
        let (r0, _, _) = pixs.get_rgb_unchecked(64, 0);
        let expected = if gamma > 1.0 { r > r0 } else { r < r0 };
        rp.compare_values(1.0, if expected { 1.0 } else { 0.0 }, 0.0);
        rp.write_buffer(&out).expect("write gamma");
        eprintln!("  gamma {}: {} -> {}", gamma, r0, r);
    }

    // --- Test 3: Contrast stretch ---
    let (p1, p2) = ContrastPoint::ordered(
        ContrastPoint::new(192.0, 240.0),
        ContrastPoint::new(64.0, 16.0),
    );
    let table = contrast_table(p1, p2).expect("contrast table");
    rp.compare_values(16.0 / 255.0, table[64], 1e-12);
    rp.compare_values(240.0 / 255.0, table[192], 1e-12);
    rp.compare_values(128.0 / 255.0, table[128], 1e-12);
    let out = apply_lookup_table(&make_uniform(32, 64, 224, 2, 2), &table).expect("contrast");
    // 32 -> 8, 64 -> 16, 224 -> 240 + 15 * 32 / 63
    rp.compare_values(8.0, out.get_rgb_unchecked(0, 0).0 as f64, 0.0);
    rp.compare_values(16.0, out.get_rgb_unchecked(0, 0).1 as f64, 0.0);
    rp.compare_values(248.0, out.get_rgb_unchecked(0, 0).2 as f64, 0.0);

    let degenerate = contrast_table(ContrastPoint::new(100.0, 0.0), ContrastPoint::new(100.0, 255.0));
    rp.compare_values(1.0, if degenerate.is_err() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: Grey equalization ---
    let grey = to_greyscale(&make_tricolor(30, 4)).expect("greyscale");
    let hist = compute_histogram(&grey);
    let table = grey_equalization_table(&hist).expect("equalization table");
    rp.compare_values(1.0, table[85], 0.0);
    rp.compare_values(0.0, table[84], 0.0);
    let eq = equalize_grey(&grey).expect("equalize grey");
    rp.compare_buffers(&make_uniform(255, 255, 255, 30, 4), &eq);

    let eq = equalize_grey(&pixs).expect("equalize gradient");
    let eq_hist = compute_histogram(&eq);
    rp.compare_values(pixs.pixel_count() as f64, eq_hist.total() as f64, 0.0);
    rp.compare_values(255.0, eq.get_rgb_unchecked(127, 0).0 as f64, 0.0);
    rp.write_buffer(&eq).expect("write equalized");

    // --- Test 5: Brightness equalization keeps hue ---
    let buf = PixelBuffer::from_fn(8, 8, |x, _| if x < 4 { (100, 50, 0) } else { (0, 0, 200) })
        .expect("two-tone buffer");
    let eq = equalize_brightness(&buf).expect("equalize brightness");
    // Level 100 holds half the pixels: brightness 0.5, level 200 saturates
    let (r, g, b) = eq.get_rgb_unchecked(0, 0);
    rp.compare_values(128.0, r as f64, 0.0);
    rp.compare_values(64.0, g as f64, 1.0);
    rp.compare_values(0.0, b as f64, 0.0);
    rp.compare_buffers(&make_uniform(0, 0, 255, 4, 8), &crop_right_half(&eq));
    rp.write_buffer(&eq).expect("write brightness");

    // --- Test 6: Custom table ---
    let posterize = LookupTable::from_fn(|i| if i < 128 { 0.0 } else { 1.0 });
    let out = apply_lookup_table(&pixs, &posterize).expect("posterize");
    let binary = out.rgb_pixels().all(|(r, _, _)| r == 0 || r == 255);
    rp.compare_values(1.0, if binary { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "enhance regression test failed");
}

fn crop_right_half(buf: &PixelBuffer) -> PixelBuffer {
    let half = buf.width() / 2;
    PixelBuffer::from_fn(half, buf.height(), |x, y| buf.get_rgb_unchecked(x + half, y))
        .expect("crop")
}
