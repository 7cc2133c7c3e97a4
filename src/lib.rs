//! QRCode encoder
//!
//! This crate provides a QR code encoder for binary data: the input is
//! split into numeric, alphanumeric and byte segments, encoded at one of
//! the four error correction levels, and laid out as a grid of dark and
//! light modules.
//!
//! ```
//! use qrgrid::{QrCode, QrStyle};
//!
//! // Encode some data into modules.
//! let code = QrCode::new("Hello, QR!").unwrap();
//!
//! // Define style
//! let style = QrStyle::default();
//!
//! // Render the modules into an image and save it.
//! code.save_png("hello.png", &style).unwrap();
//! # std::fs::remove_file("hello.png").unwrap();
//! ```

pub mod bits;
pub mod canvas;
pub mod coding;
pub mod ec;
mod render;
pub mod types;

pub use crate::canvas::MaskPattern;
pub use crate::types::{Color, EcLevel, QrResult, Version};

#[derive(Debug)]
pub struct QrStyle {
    pub color: String,
    pub background_color: String,
    /// output image width. The height equals the width.
    pub width: u32,
    /// Size of the quiet zone around the QR code, measured in terms of a single dot size.
    pub quiet_zone: f64,
}

impl QrStyle {
    pub fn new(
        color: impl Into<String>,
        background_color: impl Into<String>,
        width: u32,
        quiet_zone: f64,
    ) -> Self {
        Self {
            color: color.into(),
            background_color: background_color.into(),
            width,
            quiet_zone,
        }
    }
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            color: String::from("#000000"),
            background_color: String::from("#ffffff"),
            width: 720,
            quiet_zone: 4.0,
        }
    }
}

#[derive(Clone)]
pub struct QrCode {
    content: Vec<Color>,
    version: Version,
    ec_level: EcLevel,
    mask: MaskPattern,
    width: usize,
}

impl QrCode {
    /// Constructs a new QR code which automatically encodes the given data.
    ///
    /// This method uses the "medium" error correction level and automatically
    /// chooses the smallest QR code.
    ///
    ///     use qrgrid::QrCode;
    ///
    ///     let code = QrCode::new(b"Some data").unwrap();
    ///
    /// # Errors
    ///
    /// Returns error if the QR code cannot be constructed, e.g. when the data
    /// is empty or too long.
    pub fn new<D: AsRef<[u8]>>(data: D) -> QrResult<Self> {
        Self::with_error_correction_level(data, EcLevel::M)
    }

    /// Constructs a new QR code which automatically encodes the given data at a
    /// specific error correction level.
    ///
    /// This method automatically chooses the smallest QR code.
    ///
    ///     use qrgrid::{QrCode, EcLevel};
    ///
    ///     let code = QrCode::with_error_correction_level(b"Some data", EcLevel::H).unwrap();
    ///
    /// # Errors
    ///
    /// Returns error if the QR code cannot be constructed, e.g. when the data
    /// is empty or too long.
    pub fn with_error_correction_level<D: AsRef<[u8]>>(
        data: D,
        ec_level: EcLevel,
    ) -> QrResult<Self> {
        let bits = bits::encode_auto(data.as_ref(), ec_level)?;
        Self::with_bits(bits, ec_level)
    }

    /// Constructs a new QR code for the given version and error correction
    /// level.
    ///
    ///     use qrgrid::{QrCode, Version, EcLevel};
    ///
    ///     let version = Version::new(5).unwrap();
    ///     let code = QrCode::with_version(b"Some data", version, EcLevel::M).unwrap();
    ///
    /// # Errors
    ///
    /// Returns error if the QR code cannot be constructed, e.g. when the data
    /// does not fit the requested version.
    pub fn with_version<D: AsRef<[u8]>>(
        data: D,
        version: Version,
        ec_level: EcLevel,
    ) -> QrResult<Self> {
        let mut bits = bits::Bits::new(version);
        bits.push_optimal_data(data.as_ref())?;
        bits.push_terminator(ec_level)?;
        Self::with_bits(bits, ec_level)
    }

    /// Constructs a new QR code with encoded bits.
    ///
    /// Use this method only if there is a special need to manipulate the raw
    /// bits before encoding, e.g. to avoid the optimal segmentation
    /// algorithm. The bits must already be terminated and padded to the
    /// version's data capacity.
    ///
    /// # Errors
    ///
    /// Returns error if the QR code cannot be constructed, e.g. when the bits
    /// are too long for the version and error correction level.
    pub fn with_bits(bits: bits::Bits, ec_level: EcLevel) -> QrResult<Self> {
        let version = bits.version();
        let data = bits.into_bytes();
        let (encoded_data, ec_data) = ec::construct_codewords(&data, version, ec_level)?;
        let mut canvas = canvas::Canvas::new(version, ec_level);
        canvas.draw_all_functional_patterns();
        canvas.draw_data(&encoded_data, &ec_data);
        let canvas = canvas.apply_best_mask();
        let mask = canvas.mask().expect("a mask was applied");
        Ok(Self {
            content: canvas.into_colors(),
            version,
            ec_level,
            mask,
            width: version.width() as usize,
        })
    }

    /// Gets the version of this QR code.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Gets the error correction level of this QR code.
    pub fn error_correction_level(&self) -> EcLevel {
        self.ec_level
    }

    /// Gets the mask pattern selected for this QR code.
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Gets the number of modules per side, i.e. the width of this QR code.
    ///
    /// The width here does not contain the quiet zone paddings.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Converts the QR code to a vector of colors, row by row.
    pub fn to_colors(&self) -> Vec<Color> {
        self.content.clone()
    }

    /// Converts the QR code to a vector of colors, row by row.
    pub fn into_colors(self) -> Vec<Color> {
        self.content
    }

    /// Converts the QR code into a human-readable string.
    pub fn to_str(&self, dark: char, light: char) -> String {
        let mut s = String::new();
        for y in 0..self.width {
            for x in 0..self.width {
                let color = self.content[y * self.width + x];
                s.push(color.select(dark, light));
            }
            s.push('\n');
        }
        s
    }
}

impl QrCode {
    /// Return `viewbox_size`, `image_width`, `image_height`
    pub fn image_sizes(&self, style: &QrStyle) -> (f64, u32, u32) {
        let quiet = style.quiet_zone;
        let vb_size = self.width as f64 + quiet * 2.0;
        (vb_size, style.width, style.width)
    }

    /// Converts the QR to a simple SVG string without a quiet zone.
    pub fn to_simple_svg(&self) -> String {
        let style = QrStyle {
            quiet_zone: 0.0,
            width: self.width as u32,
            ..Default::default()
        };
        self.to_svg(&style)
    }

    /// Converts the QR to a SVG string.
    pub fn to_svg(&self, style: &QrStyle) -> String {
        let mut outline = render::Outline::new();
        for y in 0..self.width {
            for x in 0..self.width {
                if self.content[y * self.width + x] == Color::Dark {
                    outline.push_cell(x as i16, y as i16);
                }
            }
        }
        let path_string = outline.into_path();

        let color = &style.color;
        let background_color = &style.background_color;
        let quiet = style.quiet_zone;
        let (vb_size, image_width, image_height) = self.image_sizes(style);
        let path = format!(
            r#"<path fill="{color}" transform="translate({quiet},{quiet})" fill-rule="evenodd" d="{path_string}"/>"#,
        );
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{image_width}" height="{image_height}" viewBox="0 0 {vb_size} {vb_size}">
            <rect x="0" y="0" width="{vb_size}" height="{vb_size}" fill="{background_color}"/>
            {path}
            </svg>"#,
        )
    }

    /// Saves the QR to a SVG file.
    pub fn save_svg<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        style: &QrStyle,
    ) -> std::io::Result<()> {
        let svg_string = self.to_svg(style);
        std::fs::write(path, svg_string)
    }
}

impl QrCode {
    /// Converts the QR to a tiny-skia pixmap.
    pub fn to_pixmap(
        &self,
        style: &QrStyle,
    ) -> Result<resvg::tiny_skia::Pixmap, Box<dyn std::error::Error>> {
        let (_, width, height) = self.image_sizes(style);
        let svg_string = self.to_svg(style);
        let opt = resvg::usvg::Options::default();
        let tree = &resvg::usvg::TreeParsing::from_str(&svg_string, &opt)?;
        let mut pixmap =
            resvg::tiny_skia::Pixmap::new(width, height).ok_or("failed to create pixmap")?;
        resvg::Tree::from_usvg(tree)
            .render(resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());
        Ok(pixmap)
    }

    /// Saves the QR to a PNG file.
    pub fn save_png<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        style: &QrStyle,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let pixmap = self.to_pixmap(style)?;
        pixmap.save_png(path)?;
        Ok(())
    }

    /// Encodes QR into a PNG data.
    pub fn to_png(&self, style: &QrStyle) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let pixmap = self.to_pixmap(style)?;
        Ok(pixmap.encode_png()?)
    }
}

#[cfg(test)]
mod encode_tests {
    use super::*;
    use crate::types::QrError;

    #[test]
    fn test_empty_data() {
        assert!(matches!(QrCode::new(b""), Err(QrError::EmptyData)));
    }

    #[test]
    fn test_width_and_mask() {
        let code = QrCode::new("Hello, QR!").unwrap();
        assert_eq!(code.width(), code.version().width() as usize);
        assert_eq!(code.to_colors().len(), code.width() * code.width());
        assert!((code.mask() as u8) < 8);
    }

    #[test]
    fn test_version_capacities() {
        // Maximum characters per version and level, from ISO/IEC 18004:2006
        // §6.4.10, Table 7.
        let tests: &[(u8, EcLevel, usize, usize, usize)] = &[
            (1, EcLevel::L, 41, 25, 17),
            (2, EcLevel::L, 77, 47, 32),
            (2, EcLevel::H, 34, 20, 14),
            (40, EcLevel::L, 7089, 4296, 2953),
            (40, EcLevel::H, 3057, 1852, 1273),
        ];
        for &(version, ec_level, numeric, alphanumeric, byte) in tests {
            let expected = Version::new(version).unwrap();
            let n = QrCode::with_error_correction_level(vec![b'1'; numeric], ec_level).unwrap();
            let a =
                QrCode::with_error_correction_level(vec![b'A'; alphanumeric], ec_level).unwrap();
            let b = QrCode::with_error_correction_level(vec![b'#'; byte], ec_level).unwrap();
            assert_eq!(n.version(), expected);
            assert_eq!(a.version(), expected);
            assert_eq!(b.version(), expected);
        }
    }

    #[test]
    fn test_max_capacity_exceeded() {
        for (byte, limit) in [(b'0', 7089usize), (b'A', 4296), (b'#', 2953)] {
            let at_capacity = vec![byte; limit];
            assert!(QrCode::with_error_correction_level(&at_capacity, EcLevel::L).is_ok());

            let over_capacity = vec![byte; limit + 1];
            assert!(matches!(
                QrCode::with_error_correction_level(&over_capacity, EcLevel::L),
                Err(QrError::DataTooLong)
            ));
        }
    }

    #[test]
    fn test_with_version() {
        let version = Version::new(5).unwrap();
        let code = QrCode::with_version(b"Some data", version, EcLevel::M).unwrap();
        assert_eq!(code.version(), version);
        assert_eq!(code.width(), 37);
    }

    #[test]
    fn test_with_version_overflow() {
        let version = Version::new(1).unwrap();
        assert!(matches!(
            QrCode::with_version(vec![b'#'; 100], version, EcLevel::H),
            Err(QrError::DataTooLong)
        ));
    }

    #[test]
    fn test_invalid_version() {
        assert_eq!(Version::new(41).unwrap_err(), QrError::InvalidVersion);
    }

    #[test]
    fn test_to_str_dimensions() {
        let code = QrCode::new(b"01234567").unwrap();
        let s = code.to_str('#', '.');
        assert_eq!(s.lines().count(), 21);
        assert!(s.lines().all(|line| line.chars().count() == 21));
    }

    #[test]
    fn test_deterministic() {
        let a = QrCode::new(b"determinism").unwrap();
        let b = QrCode::new(b"determinism").unwrap();
        assert_eq!(a.to_colors(), b.to_colors());
        assert_eq!(a.mask(), b.mask());
    }
}

#[cfg(test)]
mod image_test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_save_png() {
        let test_dir = TempDir::new("__test__").unwrap();
        let path = test_dir.path().join("qr.png");
        let code = QrCode::new(b"Hello, QR!").unwrap();
        let style = QrStyle::default();
        code.save_png(path, &style).unwrap();
    }

    #[test]
    fn test_save_svg() {
        let test_dir = TempDir::new("__test__").unwrap();
        let path = test_dir.path().join("qr.svg");
        let code = QrCode::new(b"Hello, QR!").unwrap();
        let style = QrStyle::default();
        code.save_svg(path, &style).unwrap();
    }

    #[test]
    fn test_save_svg_large_version() {
        let test_dir = TempDir::new("__test__").unwrap();
        let path = test_dir.path().join("qr_v10.svg");
        let version = Version::new(10).unwrap();
        let code = QrCode::with_version("0123456789", version, EcLevel::Q).unwrap();
        let style = QrStyle::default();
        code.save_svg(path, &style).unwrap();
    }
}
