/// 128x128 application icon, embedded at build time.
pub const WINDOW_ICON_PNG: &[u8] = include_bytes!("../assets/art-portraits-icon-128.png");

/// Decodes embedded PNG bytes into an egui color image.
///
/// For a shipped binary the embedded assets always decode; the result is still
/// propagated so a bad asset surfaces as one logged warning instead of a panic.
pub fn decode_color_image(bytes: &[u8]) -> anyhow::Result<egui::ColorImage> {
    let rgba = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.into_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &rgba))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_artwork_decodes() {
        for entry in crate::gallery::entries() {
            let img = decode_color_image(entry.image)
                .unwrap_or_else(|e| panic!("{} failed to decode: {e}", entry.title));
            assert!(img.width() > 0 && img.height() > 0, "{}", entry.title);
        }
    }

    #[test]
    fn garbage_bytes_are_an_error_not_a_panic() {
        assert!(decode_color_image(b"not a png").is_err());
    }
}
