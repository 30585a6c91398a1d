//! RGB color vector type
//!
//! `ColorVec` is the single color representation used throughout the engine:
//! pixel samples, k-means centroids, palette entries and tile keys are all
//! `ColorVec`s. Components are 8-bit channel values held as `f64` so that
//! centroid means keep their fractional part until output.

use std::ops::{Add, AddAssign, Div};

use image::Rgba;

/// A color as a 3-component vector in RGB space.
///
/// Each component is semantically in `0.0..=255.0`. Values outside that range
/// only appear transiently and are clamped on output by [`ColorVec::to_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorVec {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl ColorVec {
    /// Create a color from raw component values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use pixel_quant::ColorVec;
    /// let red = ColorVec::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }

    /// Create a color from an RGBA pixel, premultiplied by its alpha.
    ///
    /// Transparency reads as black: a fully transparent pixel is
    /// `(0, 0, 0)` whatever its stored channels, and opaque pixels are
    /// unchanged.
    #[inline]
    pub fn from_rgba(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        let coverage = f64::from(a) / 255.0;
        Self {
            r: f64::from(r) * coverage,
            g: f64::from(g) * coverage,
            b: f64::from(b) * coverage,
        }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// The square root is never needed: every comparison in the engine is a
    /// minimum search, which the square preserves.
    #[inline]
    pub fn dist_sq(self, other: ColorVec) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Clamp every component to `0.0..=255.0`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 255.0),
            g: self.g.clamp(0.0, 255.0),
            b: self.b.clamp(0.0, 255.0),
        }
    }

    /// Convert to `[R, G, B]` bytes, clamping and rounding each component.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        let c = self.clamped();
        [c.r.round() as u8, c.g.round() as u8, c.b.round() as u8]
    }

    /// Convert to an opaque RGBA pixel.
    #[inline]
    pub fn to_rgba(self) -> Rgba<u8> {
        let [r, g, b] = self.to_bytes();
        Rgba([r, g, b, 255])
    }

    /// Format as a `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Per-component arithmetic mean of `colors`.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Example
    /// ```
    /// use pixel_quant::ColorVec;
    /// let colors = [ColorVec::new(0.0, 0.0, 0.0), ColorVec::new(255.0, 100.0, 50.0)];
    /// let mean = ColorVec::mean(colors);
    /// assert_eq!(mean, Some(ColorVec::new(127.5, 50.0, 25.0)));
    /// ```
    pub fn mean<I>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = ColorVec>,
    {
        let (sum, count) = colors
            .into_iter()
            .fold((ColorVec::default(), 0usize), |(sum, n), c| (sum + c, n + 1));
        (count > 0).then(|| sum / count as f64)
    }
}

impl From<[u8; 3]> for ColorVec {
    #[inline]
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }
}

impl Add for ColorVec {
    type Output = Self;

    #[inline]
    fn add(self, o: Self) -> Self {
        Self::new(self.r + o.r, self.g + o.g, self.b + o.b)
    }
}

impl AddAssign for ColorVec {
    #[inline]
    fn add_assign(&mut self, o: Self) {
        self.r += o.r;
        self.g += o.g;
        self.b += o.b;
    }
}

impl Div<f64> for ColorVec {
    type Output = Self;

    #[inline]
    fn div(self, d: f64) -> Self {
        Self::new(self.r / d, self.g / d, self.b / d)
    }
}
