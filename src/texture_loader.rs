use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use log::{debug, warn};

use crate::error::AssetError;

/// Image orientation from the EXIF tag, 1 when absent or unreadable.
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    // EXIF is only read reliably from JPEG containers
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("Could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

/// Clockwise quarter turns needed to display an image upright.
///
/// 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
/// Orientations involving flips are shown as-is.
pub fn quarter_turns(orientation: u16) -> u8 {
    match orientation {
        3 => 2,
        6 => 1,
        8 => 3,
        _ => 0,
    }
}

/// Load an image, apply its EXIF rotation and upload it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, AssetError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| AssetError::Read { path: image_path.to_path_buf(), source })?;

    let orientation = exif_orientation(image_path, &file_bytes);

    // Extension hint for decoding from memory
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| AssetError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    match quarter_turns(orientation) {
        1 => image.rotate_cw(),
        2 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        3 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Upload { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // Free the CPU copy
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turns() {
        assert_eq!(quarter_turns(1), 0);
        assert_eq!(quarter_turns(3), 2);
        assert_eq!(quarter_turns(6), 1);
        assert_eq!(quarter_turns(8), 3);
        assert_eq!(quarter_turns(2), 0);
    }

    #[test]
    fn test_non_jpeg_has_default_orientation() {
        assert_eq!(exif_orientation(Path::new("photo.png"), b"not an image"), 1);
    }

    #[test]
    fn test_unreadable_jpeg_has_default_orientation() {
        assert_eq!(exif_orientation(Path::new("1.JPG"), b"\xff\xd8 garbage"), 1);
    }
}
