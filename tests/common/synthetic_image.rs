use hog_detector::image::io::{save_rgb_u8, RgbImageU8};
use std::path::{Path, PathBuf};

/// Generates a high-contrast RGB checkerboard image.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let px = if sum & 1 == 0 { [32, 40, 48] } else { [220, 210, 200] };
            data.push(px);
        }
    }
    RgbImageU8::new(width, height, data)
}

/// Vertical black/white stripes `period / 2` pixels wide.
pub fn vertical_stripes(width: usize, height: usize, period: usize) -> RgbImageU8 {
    let data = (0..width * height)
        .map(|i| {
            if (i % width) % period < period / 2 {
                [0, 0, 0]
            } else {
                [255, 255, 255]
            }
        })
        .collect();
    RgbImageU8::new(width, height, data)
}

/// Smooth pseudo-random texture with distinct content per channel.
pub fn textured(width: usize, height: usize, seed: usize) -> RgbImageU8 {
    let data = (0..width * height)
        .map(|i| {
            let x = i % width;
            let y = i / width;
            let r = (x * 37 + y * 11 + seed * 13) % 256;
            let g = (x * x + 3 * y * y + seed) % 256;
            let b = ((x ^ y) * 29 + seed * 7) % 256;
            [r as u8, g as u8, b as u8]
        })
        .collect();
    RgbImageU8::new(width, height, data)
}

/// Save `img` as PNG under `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, img: &RgbImageU8) -> PathBuf {
    let path = dir.join(name);
    save_rgb_u8(img, &path).expect("write png fixture");
    path
}
