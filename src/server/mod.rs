//! Development server that never lets the browser cache a page

use anyhow::Result;
use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::category::Category;
use crate::Site;

/// Sent with every response so edits show up on a plain reload
pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate";

/// Serve `public_dir` as-is, resolving directory requests to `index.html`
pub fn router(public_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Start the development server
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Serving {}", site.public_dir.display());
    if watch {
        println!("Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let site = site.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_regenerate(site) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    axum::serve(listener, router(&site.public_dir)).await?;

    Ok(())
}

/// Directories whose changes should trigger a rebuild
fn watched_dirs(site: &Site) -> Vec<PathBuf> {
    let mut dirs = vec![site.content_dir.clone()];
    for category in Category::ALL {
        let input = site.base_dir.join(site.config.input_dir(category));
        if !input.starts_with(&site.content_dir) {
            dirs.push(input);
        }
    }
    dirs.retain(|dir| dir.exists());
    dirs
}

/// Block on file events and regenerate the site after each burst
fn watch_and_regenerate(site: Site) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in watched_dirs(&site) {
        debouncer.watcher().watch(&dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", dir);
    }

    let config_path = site.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| is_relevant(&e.path))
                    .collect();

                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Re-read the config so edits to it apply too
                let current = match Site::new(&site.base_dir) {
                    Ok(current) => current,
                    Err(e) => {
                        tracing::error!("Keeping previous configuration: {}", e);
                        site.clone()
                    }
                };

                match current.generate(&[]) {
                    Ok(summary) => tracing::info!("Regenerated: {}", summary),
                    Err(e) => tracing::error!("Generation failed: {}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Ignore editor and VCS noise
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}
