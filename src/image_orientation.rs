use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not read image {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not decode image {path}: {source}")]
    Decode { path: PathBuf, source: ImageError },
}

/// Decodes the image at `image_path` and turns it upright according to its
/// EXIF orientation. See [`orient`] for which orientations are applied.
pub fn render(image_path: &Path) -> Result<DynamicImage, RenderError> {
    let io_error = |source| RenderError::Io {
        path: image_path.to_path_buf(),
        source,
    };
    let decode_error = |source| RenderError::Decode {
        path: image_path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(image_path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?;
    let mut decoder = reader.into_decoder().map_err(decode_error)?;
    let orientation = decoder.orientation().map_err(decode_error)?;
    let image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;

    Ok(orient(image, orientation))
}

/// Applies the three pure rotations. Normal and every mirrored orientation
/// pass through unchanged.
pub fn orient(image: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Rotate90 => image.rotate90(),
        Orientation::Rotate180 => image.rotate180(),
        Orientation::Rotate270 => image.rotate270(),
        _ => image,
    }
}

/// Inserts a big-endian EXIF APP1 segment holding only the orientation tag
/// (0x0112) right after the SOI marker of `jpeg`.
pub fn with_exif_orientation(jpeg: &[u8], orientation: u8) -> Vec<u8> {
    let mut tiff = Vec::with_capacity(26);
    tiff.extend_from_slice(b"MM\x00\x2a");
    tiff.extend_from_slice(&8u32.to_be_bytes());
    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend_from_slice(&0x0112u16.to_be_bytes());
    tiff.extend_from_slice(&3u16.to_be_bytes()); // SHORT
    tiff.extend_from_slice(&1u32.to_be_bytes());
    tiff.extend_from_slice(&(orientation as u16).to_be_bytes());
    tiff.extend_from_slice(&[0, 0]);
    tiff.extend_from_slice(&0u32.to_be_bytes());

    let segment_length = (2 + 6 + tiff.len()) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + segment_length as usize + 2);
    let (soi, rest) = jpeg.split_at(2.min(jpeg.len()));
    out.extend_from_slice(soi);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_length.to_be_bytes());
    out.extend_from_slice(b"Exif\x00\x00");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn marked_image() -> DynamicImage {
        let mut image = RgbImage::from_pixel(3, 2, Rgb([0, 0, 0]));
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        DynamicImage::ImageRgb8(image)
    }

    fn write_jpeg(dir: &Path, name: &str, orientation: Option<u8>) -> PathBuf {
        let image = DynamicImage::ImageRgb8(RgbImage::from_fn(32, 16, |x, y| {
            Rgb([(x * 8) as u8, (y * 16) as u8, 128])
        }));
        let mut jpeg = Cursor::new(Vec::new());
        image.write_to(&mut jpeg, ImageFormat::Jpeg).unwrap();

        let bytes = match orientation {
            Some(orientation) => with_exif_orientation(jpeg.get_ref(), orientation),
            None => jpeg.into_inner(),
        };

        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_orient_rotate_90_moves_top_left_to_top_right() {
        let rotated = orient(marked_image(), Orientation::Rotate90).to_rgb8();

        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(*rotated.get_pixel(1, 0), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_orient_rotate_180_and_270() {
        let half_turn = orient(marked_image(), Orientation::Rotate180).to_rgb8();
        assert_eq!(half_turn.dimensions(), (3, 2));
        assert_eq!(*half_turn.get_pixel(2, 1), Rgb([255, 0, 0]));

        let three_quarter = orient(marked_image(), Orientation::Rotate270).to_rgb8();
        assert_eq!(three_quarter.dimensions(), (2, 3));
        assert_eq!(*three_quarter.get_pixel(0, 2), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_orient_passes_through_normal_and_mirrored() {
        for orientation in [
            Orientation::NoTransforms,
            Orientation::FlipHorizontal,
            Orientation::FlipVertical,
            Orientation::Rotate90FlipH,
            Orientation::Rotate270FlipH,
        ] {
            assert_eq!(orient(marked_image(), orientation), marked_image());
        }
    }

    #[test]
    fn test_render_rotates_tagged_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_jpeg(dir.path(), "rotate_90.jpg", Some(6));

        let rendered = render(&path).unwrap();
        let decoded = image::open(&path).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (32, 16));
        assert_eq!((rendered.width(), rendered.height()), (16, 32));
        assert_eq!(rendered, decoded.rotate90());
    }

    #[test]
    fn test_render_rotate_180() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_jpeg(dir.path(), "rotate_180.jpg", Some(3));

        let rendered = render(&path).unwrap();

        assert_eq!(rendered, image::open(&path).unwrap().rotate180());
    }

    #[test]
    fn test_render_normal_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let tagged = write_jpeg(dir.path(), "normal.jpg", Some(1));
        let untagged = write_jpeg(dir.path(), "untagged.jpg", None);

        assert_eq!(render(&tagged).unwrap(), image::open(&tagged).unwrap());
        assert_eq!(render(&untagged).unwrap(), image::open(&untagged).unwrap());
    }

    #[test]
    fn test_render_leaves_mirrored_unrotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_jpeg(dir.path(), "flip_horizontal.jpg", Some(2));

        let rendered = render(&path).unwrap();

        assert_eq!((rendered.width(), rendered.height()), (32, 16));
        assert_eq!(rendered, image::open(&path).unwrap());
    }

    #[test]
    fn test_render_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = render(&dir.path().join("missing.jpg"));

        assert!(matches!(result, Err(RenderError::Io { .. })));
    }

    #[test]
    fn test_render_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();

        assert!(render(&path).is_err());
    }
}
