/// Borrowed 8-bit RGB image, one `[r, g, b]` triple per pixel.
///
/// This is the pixel buffer every descriptor extraction starts from. The
/// extractor only reads through it and never keeps the borrow past its return.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgbU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [[u8; 3]],
}

/// Channel indices inside an `[r, g, b]` pixel.
pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

impl<'a> ImageRgbU8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [[u8; 3]]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageRgbU8<'a> {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
