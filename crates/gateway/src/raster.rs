//! SVG → PNG rasterization through resvg.

use std::fmt;
use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use resvg::tiny_skia::{Pixmap, Transform};
use usvg::fontdb::Database;

use crate::error::GatewayError;

/// Fonts handed to the rasterizer.
#[derive(Clone)]
pub struct FontConfig {
    /// Raw TTF/OTF/TTC files.
    pub font_buffers: Vec<Vec<u8>>,
    /// Family used for unspecified and generic `sans-serif` text.
    pub default_family: String,
    /// Also scan the host's installed fonts. Needs the `system-fonts` feature.
    pub load_system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_buffers: Vec::new(),
            default_family: "Inter".to_string(),
            load_system_fonts: false,
        }
    }
}

impl fmt::Debug for FontConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontConfig")
            .field("font_buffers", &self.font_buffers.len())
            .field("default_family", &self.default_family)
            .field("load_system_fonts", &self.load_system_fonts)
            .finish()
    }
}

/// Converts SVG markup into PNG bytes.
///
/// The font database is built once, on the first rasterization, and shared
/// by every later call.
#[derive(Default)]
pub struct Rasterizer {
    fonts: FontConfig,
    fontdb: OnceLock<Arc<Database>>,
}

impl fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rasterizer")
            .field("fonts", &self.fonts)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl Rasterizer {
    pub fn new(fonts: FontConfig) -> Self {
        Self {
            fonts,
            fontdb: OnceLock::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.fontdb.get().is_some()
    }

    fn fontdb(&self) -> Arc<Database> {
        self.fontdb
            .get_or_init(|| Arc::new(build_fontdb(&self.fonts)))
            .clone()
    }

    pub fn rasterize_png(&self, svg: &str) -> Result<Vec<u8>, GatewayError> {
        let opts = usvg::Options {
            font_family: self.fonts.default_family.clone(),
            fontdb: self.fontdb(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)?;

        let size = tree.size().to_int_size();
        let (width, height) = (size.width(), size.height());
        let mut pixmap = Pixmap::new(width, height).ok_or(GatewayError::Pixmap { width, height })?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        encode_png(&pixmap)
    }
}

fn build_fontdb(fonts: &FontConfig) -> Database {
    let mut db = Database::new();
    for buffer in &fonts.font_buffers {
        db.load_font_data(buffer.clone());
    }

    #[cfg(feature = "system-fonts")]
    if fonts.load_system_fonts {
        db.load_system_fonts();
    }
    #[cfg(not(feature = "system-fonts"))]
    if fonts.load_system_fonts {
        tracing::warn!("system fonts requested but the `system-fonts` feature is disabled");
    }

    db.set_sans_serif_family(fonts.default_family.clone());
    tracing::info!(
        faces = db.len(),
        family = %fonts.default_family,
        "font database initialized"
    );
    db
}

fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, GatewayError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let image = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or(GatewayError::Pixmap { width, height })?;

    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_database_is_built_lazily_once() {
        let rasterizer = Rasterizer::new(FontConfig::default());
        assert!(!rasterizer.is_initialized());
        let a = rasterizer.fontdb();
        assert!(rasterizer.is_initialized());
        let b = rasterizer.fontdb();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn rejects_malformed_svg() {
        let rasterizer = Rasterizer::default();
        assert!(matches!(
            rasterizer.rasterize_png("<svg"),
            Err(GatewayError::Svg(_))
        ));
    }

    #[test]
    fn small_svg_becomes_png() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2" viewBox="0 0 4 2"><rect width="4" height="2" fill="#1C1D17"/></svg>"##;
        let png = Rasterizer::default().rasterize_png(svg).unwrap_or_default();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png);
        let Ok(decoded) = decoded else {
            panic!("png must decode");
        };
        let rgba = decoded.to_rgba8();
        assert_eq!(rgba.dimensions(), (4, 2));
        assert_eq!(rgba.get_pixel(3, 1).0, [0x1c, 0x1d, 0x17, 0xff]);
    }
}
