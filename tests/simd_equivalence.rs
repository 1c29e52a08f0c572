#![cfg(feature = "simd")]

use opaquematch::lowlevel::{Kernel, ScalarKernel, SimdKernel};
use opaquematch::{OwnedRgba, PackedColor, RgbaView, Template};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Straightforward per-sample comparison through the public pixel accessor.
fn brute_force(image: RgbaView<'_>, tpl: &Template, sx: usize, sy: usize) -> bool {
    tpl.samples()
        .iter()
        .all(|s| image.pixel(sx + s.dx, sy + s.dy) == Some(s.color))
}

#[test]
fn kernels_agree_on_every_candidate() {
    let mut rng = StdRng::seed_from_u64(42);
    let colors = [
        PackedColor::from_rgba([1, 1, 1, 255]),
        PackedColor::from_rgba([2, 2, 2, 255]),
    ];

    for _ in 0..12 {
        let tw = rng.random_range(1..=20);
        let th = rng.random_range(1..=4);
        let mut tpl_data = Vec::with_capacity(tw * th * 4);
        for _ in 0..tw * th {
            let mut px = colors[rng.random_range(0..2)].to_rgba();
            if rng.random_range(0..4) == 0 {
                px[3] = rng.random_range(0..255);
            }
            tpl_data.extend_from_slice(&px);
        }
        // guarantee at least one opaque pixel
        tpl_data[3] = 255;
        let tpl = Template::compile(&tpl_data, tw, th, 4).unwrap();

        let (w, h) = (tw + 10, th + 6);
        let mut frame = OwnedRgba::filled(w, h, colors[0]).unwrap();
        for y in 0..h {
            for x in 0..w {
                frame.put_pixel(x, y, colors[rng.random_range(0..2)]);
            }
        }
        let view = frame.view();

        for sy in 0..=h - th {
            for sx in 0..=w - tw {
                let expected = brute_force(view, &tpl, sx, sy);
                assert_eq!(ScalarKernel::matches_at(view, &tpl, sx, sy), expected);
                assert_eq!(SimdKernel::matches_at(view, &tpl, sx, sy), expected);
            }
        }
    }
}

#[test]
fn simd_kernel_accepts_planted_wide_sprite() {
    let mut tpl_data = Vec::new();
    for x in 0..37u8 {
        tpl_data.extend_from_slice(&[x, x.wrapping_mul(7), 3, 255]);
    }
    let tpl = Template::compile(&tpl_data, 37, 1, 4).unwrap();

    let mut frame = OwnedRgba::filled(50, 3, PackedColor::from_rgba([0, 0, 0, 255])).unwrap();
    for x in 0..37u8 {
        frame.put_pixel(
            5 + x as usize,
            2,
            PackedColor::from_rgba([x, x.wrapping_mul(7), 3, 255]),
        );
    }
    assert!(SimdKernel::matches_at(frame.view(), &tpl, 5, 2));
    assert!(!SimdKernel::matches_at(frame.view(), &tpl, 4, 2));
}
