#![forbid(unsafe_code)]

//! `iconforge` generates the fixed set of PNG icon assets a browser
//! extension manifest expects: `icon16.png`, `icon32.png`, `icon48.png`
//! and `icon128.png`.
//!
//! # Features
//!
//! - `raster` (default): draw the shield artwork as SVG and rasterize it
//!   via `usvg`/`resvg`/`tiny-skia` (`iconforge::raster`)
//!
//! Without `raster`, icons are produced by a self-contained minimal PNG
//! writer (`iconforge::minipng`) that assembles the chunk stream by hand.
//! Either way, [`generate_icons`] guarantees every expected filename
//! exists after a run: any per-size failure is logged by the caller and a
//! hardcoded 1x1 placeholder is written in its place.

pub mod art;
mod generate;
pub mod minipng;
#[cfg(feature = "raster")]
pub mod raster;

pub use generate::{
    GeneratedIcon, ICON_SIZES, IconError, IconOutcome, generate_icons, icon_file_name,
};
