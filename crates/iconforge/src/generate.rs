//! Per-size generation loop with the placeholder fallback.

use std::path::{Path, PathBuf};

use crate::minipng;

/// The browser-extension manifest sizes, in emission order.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// `icon<size>.png`, the filename the extension manifest references.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[cfg(feature = "raster")]
    #[error(transparent)]
    Raster(#[from] crate::raster::RasterError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// How one icon file ended up on disk.
#[derive(Debug)]
pub enum IconOutcome {
    /// The icon was produced by the active rendering path.
    Drawn,
    /// Rendering (or writing the render) failed; the 1x1 placeholder was
    /// written instead so the filename still exists.
    Placeholder(IconError),
}

#[derive(Debug)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    pub outcome: IconOutcome,
}

/// Produces the PNG bytes for one icon via the active path.
fn icon_bytes(size: u32) -> Result<Vec<u8>, IconError> {
    #[cfg(feature = "raster")]
    {
        Ok(crate::raster::render_icon_png(size)?)
    }
    #[cfg(not(feature = "raster"))]
    {
        Ok(minipng::encode_gradient(size)?)
    }
}

/// Generates every icon in [`ICON_SIZES`] into `out_dir`.
///
/// Any per-size failure is downgraded to [`IconOutcome::Placeholder`];
/// only a failure to write the placeholder itself aborts the run. After
/// `Ok`, every expected filename exists under `out_dir`.
pub fn generate_icons(out_dir: &Path) -> Result<Vec<GeneratedIcon>, IconError> {
    generate_icons_with(out_dir, icon_bytes)
}

fn generate_icons_with(
    out_dir: &Path,
    render: impl Fn(u32) -> Result<Vec<u8>, IconError>,
) -> Result<Vec<GeneratedIcon>, IconError> {
    let mut report = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let path = out_dir.join(icon_file_name(size));
        let outcome = match render(size)
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(IconError::from))
        {
            Ok(()) => IconOutcome::Drawn,
            Err(err) => {
                std::fs::write(&path, minipng::PLACEHOLDER)?;
                IconOutcome::Placeholder(err)
            }
        };
        report.push(GeneratedIcon {
            size,
            path,
            outcome,
        });
    }
    Ok(report)
}
