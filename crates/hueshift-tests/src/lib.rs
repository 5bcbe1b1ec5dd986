//! Integration tests for the hueshift crates.
//!
//! End-to-end tests that drive the shifter through real files on disk,
//! verifying the interaction between hueshift-core, hueshift-io and
//! hueshift-ops.

#[cfg(test)]
mod tests {
    use hueshift_core::{bgr_to_hsv, hsv_to_bgr, BgrImage, HUE_SCALE};
    use std::path::Path;
    use tempfile::tempdir;

    /// Writes the image as a lossless PNG fixture and runs the shifter.
    fn shift_fixture(image: &BgrImage, hue: i32, half_width: u32) -> BgrImage {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.png");
        hueshift_io::write(&path, image).expect("failed to write fixture");
        hueshift_ops::shift_hue_range(&path, hue, half_width).expect("shifter failed")
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let image = BgrImage::from_vec(7, 5, vec![33u8; 7 * 5 * 3]).unwrap();
        let out = shift_fixture(&image, 42, 17);
        assert_eq!(out.dimensions(), image.dimensions());
    }

    #[test]
    fn test_zero_half_width_touches_exact_hue_only() {
        // Pixel 0: pure red (hue 0), pixel 1: pure yellow (hue 30).
        // Primaries convert exactly, so the untouched pixel must come
        // back byte-identical.
        let mut image = BgrImage::new(2, 1).unwrap();
        image.set_pixel(0, 0, [0, 0, 255]).unwrap();
        image.set_pixel(1, 0, [0, 255, 255]).unwrap();

        let out = shift_fixture(&image, 0, 0);
        assert_eq!(out.pixel(0, 0).unwrap(), [255, 255, 0]); // red -> cyan
        assert_eq!(out.pixel(1, 0).unwrap(), [0, 255, 255]); // untouched
    }

    #[test]
    fn test_in_band_pixels_rotate_by_90_preserving_sv() {
        let mut image = BgrImage::new(3, 1).unwrap();
        image.set_pixel(0, 0, [20, 40, 220]).unwrap();
        image.set_pixel(1, 0, [10, 10, 200]).unwrap();
        image.set_pixel(2, 0, [100, 30, 180]).unwrap();

        let (hue, half_width) = (0, 15);
        let out = shift_fixture(&image, hue, half_width);

        for x in 0..3 {
            let [h, s, v] = bgr_to_hsv(image.pixel(x, 0).unwrap());
            let expected = if h <= 15 {
                hsv_to_bgr([(h + 90) % HUE_SCALE, s, v])
            } else {
                hsv_to_bgr([h, s, v])
            };
            assert_eq!(out.pixel(x, 0).unwrap(), expected, "pixel {x}, hue {h}");
        }
    }

    #[test]
    fn test_band_clamps_instead_of_wrapping() {
        // Target 178 with half-width 5 clamps to [173, 180]: a pixel at
        // hue 2 sits on the far side of the wrap point and stays put.
        let near_wrap = hsv_to_bgr([176, 255, 255]);
        let past_wrap = hsv_to_bgr([2, 255, 255]);
        let mut image = BgrImage::new(2, 1).unwrap();
        image.set_pixel(0, 0, near_wrap).unwrap();
        image.set_pixel(1, 0, past_wrap).unwrap();

        let out = shift_fixture(&image, 178, 5);
        let [h0, _, _] = bgr_to_hsv(out.pixel(0, 0).unwrap());
        let [h1, _, _] = bgr_to_hsv(out.pixel(1, 0).unwrap());
        assert_eq!(u16::from(h0), (176 + 90) % u16::from(HUE_SCALE));
        assert_eq!(h1, 2);
    }

    #[test]
    fn test_jpeg_output_survives_reload() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("result.jpg");

        let mut image = BgrImage::new(16, 16).unwrap();
        for px in image.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[0, 0, 255]);
        }
        hueshift_io::write(&input, &image).unwrap();

        let shifted = hueshift_ops::shift_hue_range(&input, 0, 10).unwrap();
        hueshift_io::write(&output, &shifted).unwrap();

        let reloaded = hueshift_io::read(&output).unwrap();
        assert_eq!(reloaded.dimensions(), (16, 16));
        // JPEG is lossy; just confirm the result is still recognizably cyan
        let [b, g, r] = reloaded.pixel(8, 8).unwrap();
        assert!(b > 200 && g > 200 && r < 60, "expected cyan, got ({b},{g},{r})");
    }

    #[test]
    fn test_missing_input_produces_no_result() {
        assert!(hueshift_ops::shift_hue_range(Path::new("nope/missing.jpg"), 0, 10).is_none());
    }
}
