use hog_detector::features::SparseFeatureVector;
use hog_detector::image::ImageRgbU8;
use hog_detector::{extract_descriptor, HogParams};

fn main() {
    // 64x128 window split by a vertical edge; prints the tile grid and the sparse size
    let w = 64usize;
    let h = 128usize;
    let pixels: Vec<[u8; 3]> = (0..w * h)
        .map(|i| if i % w < w / 2 { [20, 40, 60] } else { [220, 200, 180] })
        .collect();
    let img = ImageRgbU8::packed(w, h, &pixels);

    let params = HogParams::default();
    let descriptor = extract_descriptor(img, &params);
    let sparse = SparseFeatureVector::from(&descriptor);
    println!(
        "tiles={}x{} len={} non_zero={}",
        descriptor.tiles_x,
        descriptor.tiles_y,
        descriptor.len(),
        sparse.len()
    );
}
