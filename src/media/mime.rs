use std::path::Path;

/// Extensions a gallery folder may contribute. Anything else in the folder
/// (sidecars, notes, thumbnails databases) is ignored.
pub const GALLERY_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif", "gif"];

/// Lowercased extension of a bare filename or path, if any.
fn extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()?
        .to_str()
        .map(|e| e.to_ascii_lowercase())
}

/// True when `name` carries one of the gallery image extensions.
/// Matching is case-insensitive: `z.PNG` is an image, `y.txt` is not.
pub fn is_gallery_image(name: &str) -> bool {
    extension(name).is_some_and(|ext| GALLERY_IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// MIME type for a file served from the public directory.
///
/// Returns `None` for unrecognized extensions; the caller falls back to
/// `application/octet-stream`.
pub fn content_type(name: &str) -> Option<&'static str> {
    let ext = extension(name)?;

    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };

    Some(mime)
}
