//! Gallery backend for a nonprofit website: reads albums, projects and partners
//! from a content directory, merges authored and folder-scanned photos, and
//! serves the result over HTTP.

pub mod cli;
pub mod config;
pub mod content;
pub mod gallery;
pub mod http;
pub mod media;
