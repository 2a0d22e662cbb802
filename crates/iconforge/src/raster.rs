//! Raster path: parse the icon SVG with `usvg`, render it onto a
//! `tiny-skia` pixmap via `resvg`, export PNG.

use crate::art;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse icon SVG")]
    SvgParse,
    #[error("failed to allocate {0}x{0} pixmap for raster rendering")]
    PixmapAlloc(u32),
    #[error("failed to encode PNG")]
    PngEncode,
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// Draws the shield artwork at `size` x `size` pixels and encodes it as
/// PNG.
pub fn render_icon_png(size: u32) -> Result<Vec<u8>> {
    svg_to_png(&art::icon_svg(size), size)
}

pub fn svg_to_png(svg: &str, size: u32) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, size)?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

fn svg_to_pixmap(svg: &str, size: u32) -> Result<tiny_skia::Pixmap> {
    // No fontdb setup: the artwork carries no text, so font selection
    // cannot affect the output.
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    let mut pixmap =
        tiny_skia::Pixmap::new(size, size).ok_or(RasterError::PixmapAlloc(size))?;

    // The icon SVG viewBox equals the pixel size, but stay general in
    // case the tree reports a different intrinsic size.
    let scale = size as f32 / tree.size().width().max(1.0);
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().expect("read_info");
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).expect("next_frame");
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn renders_png_signature_at_each_icon_size() {
        for size in crate::ICON_SIZES {
            let bytes = render_icon_png(size).unwrap();
            assert!(
                bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
                "{size}px output is not a PNG"
            );
        }
    }

    #[test]
    fn rendered_icon_decodes_to_declared_dimensions() {
        let bytes = render_icon_png(32).unwrap();
        let (info, _) = decode(&bytes);
        assert_eq!((info.width, info.height), (32, 32));
    }

    #[test]
    fn background_corner_is_brand_blue_and_opaque() {
        let bytes = render_icon_png(48).unwrap();
        let (info, pixels) = decode(&bytes);
        assert_eq!(info.color_type, png::ColorType::Rgba);
        // (1, 1) sits on the background rect, away from any antialiased
        // artwork edge.
        let px = &pixels[(48 + 1) * 4..][..4];
        assert_eq!(px, &[102, 126, 234, 255]);
    }

    #[test]
    fn svg_to_png_rejects_malformed_markup() {
        assert!(matches!(
            svg_to_png("<svg", 16),
            Err(RasterError::SvgParse)
        ));
    }

    #[test]
    fn zero_size_pixmap_is_reported() {
        let svg = crate::art::icon_svg(16);
        assert!(matches!(
            svg_to_png(&svg, 0),
            Err(RasterError::PixmapAlloc(0))
        ));
    }
}
