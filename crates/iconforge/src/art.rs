//! Icon artwork: a white shield with an "X" glyph on the brand-blue
//! background, described as SVG markup.
//!
//! All geometry is integer arithmetic on the pixel size so the same
//! artwork scales to every entry in the fixed size list without
//! accumulating rounding drift between sizes.

/// Brand background colour, also the base of the minimal-path gradient.
pub const BRAND_RGB: (u8, u8, u8) = (102, 126, 234);

/// `BRAND_RGB` as a CSS hex colour for SVG attributes.
pub const BRAND_HEX: &str = "#667eea";

/// Six shield outline points for a `size` x `size` icon, clockwise from
/// the top tip.
pub fn shield_points(size: u32) -> [(i32, i32); 6] {
    let c = (size / 2) as i32;
    let s = (size * 3 / 5) as i32;
    [
        (c, c - s / 2),
        (c + s / 3, c - s / 3),
        (c + s / 3, c + s / 6),
        (c, c + s / 2),
        (c - s / 3, c + s / 6),
        (c - s / 3, c - s / 3),
    ]
}

/// Stroke width of the X glyph.
pub fn glyph_stroke_width(size: u32) -> u32 {
    (size / 16).max(1)
}

/// Half-extent of the X glyph around the icon centre.
pub fn glyph_half_extent(size: u32) -> i32 {
    let s = (size * 3 / 5) as i32;
    (s / 3) / 2
}

/// Builds the SVG markup for one icon at `size` x `size` pixels.
///
/// The output is deterministic for a given size; it carries no text, no
/// external references and no style sheet, so it rasterizes identically
/// regardless of the font environment.
pub fn icon_svg(size: u32) -> String {
    let c = (size / 2) as i32;
    let half = glyph_half_extent(size);
    let stroke = glyph_stroke_width(size);

    let mut points = String::new();
    for (i, (x, y)) in shield_points(size).iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        points.push_str(&format!("{x},{y}"));
    }

    let mut out = String::with_capacity(512);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    ));
    out.push_str(&format!(
        r#"<rect width="{size}" height="{size}" fill="{BRAND_HEX}"/>"#
    ));
    out.push_str(&format!(
        r##"<polygon points="{points}" fill="#ffffff"/>"##
    ));
    for (x1, y1, x2, y2) in [
        (c - half, c - half, c + half, c + half),
        (c + half, c - half, c - half, c + half),
    ] {
        out.push_str(&format!(
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{BRAND_HEX}" stroke-width="{stroke}"/>"#
        ));
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shield_is_symmetric_about_the_vertical_axis() {
        for size in [16u32, 32, 48, 128] {
            let c = (size / 2) as i32;
            let pts = shield_points(size);
            assert_eq!(pts[0].0, c, "top tip centred at {size}px");
            assert_eq!(pts[3].0, c, "bottom tip centred at {size}px");
            assert_eq!(pts[1].0 - c, c - pts[5].0, "upper flanks mirror at {size}px");
            assert_eq!(pts[2].0 - c, c - pts[4].0, "lower flanks mirror at {size}px");
            assert_eq!(pts[1].1, pts[5].1);
            assert_eq!(pts[2].1, pts[4].1);
        }
    }

    #[test]
    fn stroke_width_never_collapses_to_zero() {
        assert_eq!(glyph_stroke_width(16), 1);
        assert_eq!(glyph_stroke_width(32), 2);
        assert_eq!(glyph_stroke_width(128), 8);
    }

    #[test]
    fn svg_declares_requested_dimensions() {
        let svg = icon_svg(48);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="48""#));
        assert!(svg.contains(r#"viewBox="0 0 48 48""#));
        assert!(svg.contains("<polygon "));
        assert_eq!(svg.matches("<line ").count(), 2);
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn artwork_stays_inside_the_canvas() {
        for size in [16u32, 32, 48, 128] {
            for (x, y) in shield_points(size) {
                assert!((0..size as i32).contains(&x), "{size}px x={x}");
                assert!((0..size as i32).contains(&y), "{size}px y={y}");
            }
            let c = (size / 2) as i32;
            let half = glyph_half_extent(size);
            assert!(c - half >= 0 && c + half < size as i32);
        }
    }
}
