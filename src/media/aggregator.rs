use serde::Serialize;

use crate::content::AlbumRecord;
use crate::media::lister::FolderLister;
use crate::media::mime::is_gallery_image;

/// Caption given to the album cover when it leads the image list.
pub const COVER_CAPTION: &str = "Cover";

/// One image ready for display. `url` is never empty in resolved output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayImage {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaCounts {
    pub photo_count: usize,
    pub video_count: usize,
}

impl std::ops::AddAssign for MediaCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.photo_count += rhs.photo_count;
        self.video_count += rhs.video_count;
    }
}

/// Every displayable image of an album, in display order:
/// cover, then authored images, then images found in `folder_path`.
///
/// Folder URLs are `<folder_path>/<filename>`. Use [`resolve_images_with_base`]
/// when they must be rooted under a public URL prefix.
pub fn resolve_images(album: &AlbumRecord, lister: &dyn FolderLister) -> Vec<DisplayImage> {
    resolve_images_with_base(album, lister, "")
}

/// Same rule as [`resolve_images`], with folder image URLs prefixed by `url_base`
/// (e.g. `/images/gallery/content`). Cover and authored image URLs are taken as
/// authored.
pub fn resolve_images_with_base(
    album: &AlbumRecord,
    lister: &dyn FolderLister,
    url_base: &str,
) -> Vec<DisplayImage> {
    let cover = album
        .cover_image
        .iter()
        .filter(|url| !url.is_empty())
        .map(|url| DisplayImage {
            url: url.clone(),
            caption: COVER_CAPTION.to_string(),
        });

    let authored = album.images.iter().map(|img| DisplayImage {
        url: img.image.clone(),
        caption: img.caption.clone().unwrap_or_default(),
    });

    let folder = folder_images(album, lister, url_base);

    cover
        .chain(authored)
        .chain(folder)
        .filter(|img| !img.url.is_empty())
        .collect()
}

/// Images contributed by the album folder. An unavailable folder contributes
/// nothing; the failure is reported as a warning and never propagates.
fn folder_images(album: &AlbumRecord, lister: &dyn FolderLister, url_base: &str) -> Vec<DisplayImage> {
    let Some(folder) = album.folder_path.as_deref().filter(|p| !p.is_empty()) else {
        return Vec::new();
    };

    let files = match lister.list_files(folder) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(folder = %folder, error = %e, "Gallery folder unavailable, contributing no images");
            return Vec::new();
        }
    };

    files
        .into_iter()
        .filter(|name| is_gallery_image(name))
        .map(|name| DisplayImage {
            url: folder_url(url_base, folder, &name),
            caption: String::new(),
        })
        .collect()
}

fn folder_url(url_base: &str, folder: &str, file: &str) -> String {
    let folder = folder.trim_end_matches('/');
    if url_base.is_empty() {
        format!("{folder}/{file}")
    } else {
        format!(
            "{}/{}/{}",
            url_base.trim_end_matches('/'),
            folder.trim_start_matches('/'),
            file
        )
    }
}

/// Photo and video totals for an album. The photo count is the length of the
/// resolved image list, so it can never disagree with what the album page shows.
pub fn count_media(album: &AlbumRecord, lister: &dyn FolderLister) -> MediaCounts {
    count_resolved(&resolve_images(album, lister), album)
}

/// Totals for an image list already produced by [`resolve_images`] or
/// [`resolve_images_with_base`], so callers holding one do not list the folder twice.
pub fn count_resolved(images: &[DisplayImage], album: &AlbumRecord) -> MediaCounts {
    MediaCounts {
        photo_count: images.len(),
        video_count: album.videos.len(),
    }
}
