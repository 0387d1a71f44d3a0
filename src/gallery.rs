//! The shapes the website renders: the gallery index (totals plus one card per
//! album), the album page, and the home page project highlights.
//!
//! All counts go through [`count_media`] or [`count_resolved`], so the index
//! totals, the album cards and the album page always agree.

use chrono::NaiveDate;
use serde::Serialize;

use crate::content::{AlbumRecord, CompletedProject};
use crate::media::aggregator::{
    count_media, count_resolved, resolve_images_with_base, DisplayImage, MediaCounts,
};
use crate::media::lister::FolderLister;
use crate::media::video::normalize_video_embed;

pub const UNTITLED: &str = "Sans titre";
pub const NO_DATE: &str = "N/A";
pub const FEATURED_PROJECT_COUNT: usize = 3;

/// Display fallbacks and URL layout, taken from configuration.
#[derive(Debug, Clone)]
pub struct ViewDefaults {
    pub location: String,
    pub cover_image: String,
    /// Public URL prefix of the folder the lister is rooted at.
    pub folder_url_base: String,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            location: "unknown".to_string(),
            cover_image: "/images/gallery/default.jpg".to_string(),
            folder_url_base: "/images/gallery/content".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GalleryStats {
    pub event_count: usize,
    pub photo_count: usize,
    pub video_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub year: String,
    pub location: String,
    pub beneficiaries: u32,
    pub photo_count: usize,
    pub video_count: usize,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayVideo {
    pub url: String,
    pub embed_url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub images: Vec<DisplayImage>,
    pub videos: Vec<DisplayVideo>,
    pub counts: MediaCounts,
}

fn title_or_default(album: &AlbumRecord) -> String {
    if album.title.is_empty() {
        UNTITLED.to_string()
    } else {
        album.title.clone()
    }
}

fn location_or_default(album: &AlbumRecord, defaults: &ViewDefaults) -> String {
    album
        .location
        .clone()
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| defaults.location.clone())
}

/// Totals for the gallery index header.
pub fn gallery_stats<'a, I>(albums: I, lister: &dyn FolderLister) -> GalleryStats
where
    I: IntoIterator<Item = &'a AlbumRecord>,
{
    let mut events = 0;
    let mut totals = MediaCounts::default();
    for album in albums {
        events += 1;
        totals += count_media(album, lister);
    }
    GalleryStats {
        event_count: events,
        photo_count: totals.photo_count,
        video_count: totals.video_count,
    }
}

/// Card shown for one album in the gallery grid.
pub fn album_summary(
    id: &str,
    album: &AlbumRecord,
    lister: &dyn FolderLister,
    defaults: &ViewDefaults,
) -> AlbumSummary {
    let counts = count_media(album, lister);
    AlbumSummary {
        id: id.to_string(),
        title: title_or_default(album),
        category: album.category.clone(),
        description: album.description.clone(),
        year: album
            .year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| NO_DATE.to_string()),
        location: location_or_default(album, defaults),
        beneficiaries: album.beneficiaries.unwrap_or(0),
        photo_count: counts.photo_count,
        video_count: counts.video_count,
        image_url: album
            .cover_image
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| defaults.cover_image.clone()),
    }
}

/// Everything the album page displays.
pub fn album_detail(
    id: &str,
    album: &AlbumRecord,
    lister: &dyn FolderLister,
    defaults: &ViewDefaults,
) -> AlbumDetail {
    let images = resolve_images_with_base(album, lister, &defaults.folder_url_base);
    let videos: Vec<DisplayVideo> = album
        .videos
        .iter()
        .enumerate()
        .map(|(i, v)| DisplayVideo {
            url: v.url.clone(),
            embed_url: normalize_video_embed(&v.url),
            title: v
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Vidéo {}", i + 1)),
        })
        .collect();

    AlbumDetail {
        id: id.to_string(),
        title: title_or_default(album),
        category: album.category.clone(),
        description: album.description.clone(),
        date: album.date,
        location: location_or_default(album, defaults),
        counts: count_resolved(&images, album),
        images,
        videos,
    }
}

/// The first `n` completed projects, in store order.
pub fn featured_projects(mut projects: Vec<CompletedProject>, n: usize) -> Vec<CompletedProject> {
    projects.truncate(n);
    projects
}
