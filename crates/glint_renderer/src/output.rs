//! Image export.
//!
//! Colours are quantized with [`color_to_rgb8`](crate::renderer::color_to_rgb8);
//! gamma is applied beforehand by the renderer's post-process, never here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::{color_to_rgb8, ImageBuffer};

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported file extension '{0}'. Only .ppm and .png are supported.")]
    UnsupportedFormat(String),
}

/// Result type for export operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Write an ASCII (`P3`) pixel map.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb8(image.get_pixel(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}

/// Save as an ASCII pixel map.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save as an 8-bit PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, "pixel buffer size mismatch")
        })?;
    rgb.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Save based on the file extension (`.ppm` or `.png`).
pub fn save<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_ppm(image, path)?,
        "png" => save_png(image, path)?,
        _ => return Err(OutputError::UnsupportedFormat(extension)),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::Color;

    fn two_by_one() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 1);
        image.set_pixel(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set_pixel(1, 0, Color::new(2.0, -1.0, 0.25));
        image
    }

    #[test]
    fn test_write_ppm() {
        let mut bytes = Vec::new();
        write_ppm(&two_by_one(), &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 0 127\n255 0 63\n");
    }

    #[test]
    fn test_save_dispatches_on_extension() {
        let dir = std::env::temp_dir();
        let stem = format!("glint_output_{}", std::process::id());

        let ppm = dir.join(format!("{stem}.ppm"));
        save(&two_by_one(), &ppm).unwrap();
        let text = std::fs::read_to_string(&ppm).unwrap();
        assert!(text.starts_with("P3\n2 1\n255\n"));
        std::fs::remove_file(&ppm).ok();

        let png = dir.join(format!("{stem}.png"));
        save(&two_by_one(), &png).unwrap();
        let bytes = std::fs::read(&png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        std::fs::remove_file(&png).ok();
    }

    #[test]
    fn test_unsupported_extension() {
        let err = save(&two_by_one(), std::env::temp_dir().join("glint.bmp")).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(ext) if ext == "bmp"));
    }
}
