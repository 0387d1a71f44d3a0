//! File-based content store: gallery albums, completed projects and partners.

pub mod store;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// One gallery album / event as authored in `gallery/<slug>.toml`.
/// Every field may be missing in the file; display defaults are applied by
/// the gallery views, not here.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlbumRecord {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: Option<String>,
    /// Calendar date of the event. Accepts a native TOML date or datetime
    /// (`date = 2024-05-18`) as well as an ISO date or RFC 3339 timestamp string;
    /// only the date part is kept.
    #[serde(deserialize_with = "deserialize_album_date")]
    pub date: Option<NaiveDate>,
    pub beneficiaries: Option<u32>,
    pub cover_image: Option<String>,
    pub images: Vec<AlbumImage>,
    /// Folder under the gallery content root whose images are appended to the album.
    pub folder_path: Option<String>,
    pub videos: Vec<AlbumVideo>,
}

impl AlbumRecord {
    /// Year of the album date as shown on gallery cards.
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }
}

fn deserialize_album_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match toml::Value::deserialize(deserializer)? {
        toml::Value::Datetime(dt) => {
            let date = dt
                .date
                .ok_or_else(|| D::Error::custom(format!("date {dt} has no calendar date")))?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("date {dt} is out of range")))
        }
        toml::Value::String(text) => parse_date_text(text.trim())
            .map_err(|_| D::Error::custom(format!("unrecognized date {text:?}"))),
        other => Err(D::Error::custom(format!(
            "expected a date, found {}",
            other.type_str()
        ))),
    }
}

/// `YYYY-MM-DD`, an RFC 3339 timestamp, or a zone-less `YYYY-MM-DDTHH:MM:SS`.
/// An empty string means no date.
fn parse_date_text(text: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .map(Some)
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlbumImage {
    pub image: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlbumVideo {
    pub url: String,
    pub title: Option<String>,
}

/// A finished project highlighted on the home page.
/// `id` is the file slug and is filled in by the store.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CompletedProject {
    #[serde(skip_deserializing)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Partner {
    pub name: String,
    pub logo: String,
}
