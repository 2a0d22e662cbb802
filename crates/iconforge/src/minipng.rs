//! Minimal PNG writer used when the raster stack is compiled out.
//!
//! This assembles the chunk stream by hand: signature, IHDR, one IDAT
//! holding the zlib-deflated filter-0 scanlines, IEND. Each chunk is
//! length-prefixed and CRC32-framed per the PNG standard. The pixel data
//! is a fixed blue gradient (no artwork, just a recognisable stand-in).

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::art::BRAND_RGB;

/// The 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// Hardcoded 1x1 brand-blue PNG written whenever generating an icon
/// fails, so the expected filename always exists afterwards.
///
/// 8-bit depth, colour type 2 (truecolour), single filter-0 scanline.
pub const PLACEHOLDER: [u8; 69] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, // signature
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52, // IHDR, 13 bytes
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1 x 1
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, // depth 8, colour 2
    0xde, 0x00, 0x00, 0x00, 0x0c, 0x49, 0x44, 0x41, // IDAT, 12 bytes
    0x54, 0x78, 0xda, 0x63, 0x48, 0xab, 0x7b, 0x05, // zlib: 00 66 7e ea
    0x00, 0x03, 0x1c, 0x01, 0xcf, 0x86, 0x5c, 0x4a, //
    0x74, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, // IEND
    0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Encodes a `size` x `size` gradient-filled PNG (8-bit RGB).
///
/// Scanlines use filter type 0; the whole image goes into a single IDAT.
pub fn encode_gradient(size: u32) -> std::io::Result<Vec<u8>> {
    let (base_r, base_g, base_b) = BRAND_RGB;

    let mut raw = Vec::with_capacity((size as usize) * (1 + 3 * size as usize));
    for y in 0..size {
        raw.push(0); // filter: none
        for x in 0..size {
            let r = (base_r as u32 + x * 20 / size).min(255) as u8;
            let g = (base_g as u32 + y * 30 / size).min(255) as u8;
            raw.push(r);
            raw.push(g);
            raw.push(base_b);
        }
    }

    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(&raw)?;
    let deflated = enc.finish()?;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&size.to_be_bytes());
    ihdr.extend_from_slice(&size.to_be_bytes());
    // depth 8, colour type 2 (RGB), deflate, adaptive filtering, no interlace
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut out = Vec::with_capacity(SIGNATURE.len() + deflated.len() + 64);
    out.extend_from_slice(&SIGNATURE);
    push_chunk(&mut out, b"IHDR", &ihdr);
    push_chunk(&mut out, b"IDAT", &deflated);
    push_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(tag, data).to_be_bytes());
}

/// CRC32 over the chunk tag and data (polynomial 0xEDB88320).
fn crc32(tag: &[u8], data: &[u8]) -> u32 {
    let mut crc: u32 = 0xffff_ffff;
    for byte in tag.iter().chain(data) {
        crc ^= *byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xedb8_8320;
            } else {
                crc >>= 1;
            }
        }
    }
    !crc
}
