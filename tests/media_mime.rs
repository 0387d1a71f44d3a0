use galerie::media::mime::{content_type, is_gallery_image};

#[test]
fn test_every_allowed_extension_is_image() {
    for name in ["a.jpg", "a.jpeg", "a.png", "a.webp", "a.avif", "a.gif"] {
        assert!(is_gallery_image(name), "{name} should be a gallery image");
    }
}

#[test]
fn test_case_insensitive() {
    assert!(is_gallery_image("z.PNG"));
    assert!(is_gallery_image("IMG_0001.JPG"));
    assert!(is_gallery_image("scan.JpEg"));
}

#[test]
fn test_non_images_rejected() {
    assert!(!is_gallery_image("y.txt"));
    assert!(!is_gallery_image("clip.mp4"));
    assert!(!is_gallery_image("raw.tiff"));
    assert!(!is_gallery_image("Thumbs.db"));
}

#[test]
fn test_no_extension_rejected() {
    assert!(!is_gallery_image("README"));
    assert!(!is_gallery_image(".jpg"));
}

#[test]
fn test_extension_must_be_last() {
    assert!(!is_gallery_image("photo.jpg.bak"));
    assert!(is_gallery_image("photo.backup.jpg"));
}

#[test]
fn test_content_type_for_images() {
    assert_eq!(content_type("cover.jpg"), Some("image/jpeg"));
    assert_eq!(content_type("cover.JPEG"), Some("image/jpeg"));
    assert_eq!(content_type("logo.png"), Some("image/png"));
    assert_eq!(content_type("hero.avif"), Some("image/avif"));
    assert_eq!(content_type("icon.svg"), Some("image/svg+xml"));
}

#[test]
fn test_content_type_unknown_is_none() {
    assert_eq!(content_type("notes.txt"), None);
    assert_eq!(content_type("Makefile"), None);
}
