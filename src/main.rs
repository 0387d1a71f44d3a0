use std::sync::Arc;

use clap::Parser;

use galerie::content::store::ContentStore;
use galerie::http::{self, state::AppState};
use galerie::media::lister::FsFolderLister;
use galerie::{cli, config};

/// Resolves on the first Ctrl+C. A second Ctrl+C while requests drain force-exits.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down, draining in-flight requests...");
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\ngalerie: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    });

    let config = config::Config::resolve(file_config, &args);

    if !config.content_dir.is_dir() {
        eprintln!(
            "error: content directory does not exist: {}",
            config.content_dir.display()
        );
        std::process::exit(1);
    }

    let store = ContentStore::new(&config.content_dir);
    match store.list() {
        Ok(albums) => tracing::info!(
            "Content: {} ({} albums)",
            config.content_dir.display(),
            albums.len()
        ),
        Err(e) => tracing::warn!("Cannot list albums: {}", e),
    }

    let folder_root = config.gallery_folder_root();
    if !folder_root.is_dir() {
        tracing::warn!(
            "Gallery folder root {} is missing; albums with a folder_path will show only authored images",
            folder_root.display()
        );
    }

    let state = AppState {
        store: Arc::new(store),
        lister: Arc::new(FsFolderLister::new(folder_root)),
        images_dir: Arc::new(config.images_dir()),
        defaults: Arc::new(config.defaults.clone()),
    };
    let app = http::build_router(state);

    let addr = if config.localhost {
        format!("127.0.0.1:{}", config.port)
    } else {
        format!("0.0.0.0:{}", config.port)
    };
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });

    tracing::info!("galerie {} on http://{}", env!("GALERIE_VERSION"), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .unwrap_or_else(|e| tracing::error!("HTTP server error: {}", e));

    tracing::info!("Goodbye.");
}
