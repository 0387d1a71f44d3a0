use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "galerie",
    about = "Gallery backend: serves albums, photos, videos, projects and partners from a content directory",
    long_about = None,
    version = env!("GALERIE_VERSION"),
)]
pub struct Args {
    /// Content directory holding gallery/, projects/ and partners.toml [default: content]
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Public directory holding images/ [default: public]
    #[arg(long, value_name = "DIR")]
    pub public_dir: Option<PathBuf>,

    /// HTTP port to listen on [default: 8300]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML config file (overrides default search: ./galerie.toml, ~/.config/galerie/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces
    #[arg(long)]
    pub localhost: bool,
}
