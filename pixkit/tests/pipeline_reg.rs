//! Pipeline regression test
//!
//! Chains transforms through the facade crate the way an editor applies
//! them one after another.

use pixkit::filter::FilterError;
use pixkit::{
    KernelKind, PixelBuffer, apply_kernel_kind, apply_lookup_table, compute_histogram,
    equalize_grey, gamma_table, invert, to_greyscale,
};
use pixkit_test::{RegParams, make_gradient, make_tricolor};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    let pixs = make_tricolor(48, 24);

    // --- Test 1: Greyscale, equalize, invert ---
    let grey = to_greyscale(&pixs).expect("greyscale");
    let eq = equalize_grey(&grey).expect("equalize");
    let inv = invert(&eq).expect("invert");
    rp.compare_values(pixs.width() as f64, inv.width() as f64, 0.0);
    rp.compare_values(pixs.height() as f64, inv.height() as f64, 0.0);
    rp.compare_values(0.0, inv.get_rgb_unchecked(0, 0).0 as f64, 0.0);
    rp.write_buffer(&inv).expect("write pipeline");

    // --- Test 2: Each step leaves its input untouched ---
    let before = pixs.to_rgb_bytes();
    let _ = apply_kernel_kind(&pixs, KernelKind::Emboss).expect("emboss");
    let _ = apply_lookup_table(&pixs, &gamma_table(2.2)).expect("gamma");
    rp.compare_values(1.0, if pixs.to_rgb_bytes() == before { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: Edge detection after greyscale stays grey ---
    let grad = make_gradient(64, 16);
    let edges = apply_kernel_kind(&to_greyscale(&grad).expect("greyscale"), KernelKind::SobelY)
        .expect("sobel y");
    let hist = compute_histogram(&edges);
    rp.compare_values(hist.red[0] as f64, hist.grey[0] as f64, 0.0);
    eprintln!("  sobel_y: {} black pixels", hist.grey[0]);

    // --- Test 4: Errors surface through the facade ---
    let err = "gaussian".parse::<KernelKind>().unwrap_err();
    rp.compare_values(1.0, if matches!(err, FilterError::InvalidKernel(_)) { 1.0 } else { 0.0 }, 0.0);
    let empty = PixelBuffer::new(0, 5);
    rp.compare_values(1.0, if empty.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pipeline regression test failed");
}
