/// What each input image is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Blocky pixel art quantized to the learned palette
    PixelArt,
    /// Photo-mosaic assembled from corpus thumbnails
    Mosaic,
}

impl RenderMode {
    /// File-name suffix appended before `.png` on every output.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::PixelArt => "_pixel",
            Self::Mosaic => "_mosaic",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PixelArt => "pixel-art",
            Self::Mosaic => "mosaic",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
