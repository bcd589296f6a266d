//! # skinshop-rs
//!
//! Minimal skin-trading storefront catalog server in Rust.
//!
//! Serves a storefront's static catalog documents over HTTP: countries
//! with their payment methods, skins for sale, and the image assets the
//! catalogs reference.
//!
//! ## Architecture
//!
//! - **Catalog**: static JSON documents (`countries.json`, `skins.json`)
//!   re-read and re-parsed on every request, served verbatim
//! - **Model**: shared data shapes for skins, payments, and the payment
//!   wizard vocabulary
//! - **Assets**: immutable image files served with long-lived caching
//! - **HTTP**: Axum router with rate limiting, request IDs, and graceful
//!   shutdown

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

mod assets;
mod catalog;
mod config;
mod http;
mod model;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use axum::serve;
use clap::Parser;
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogKind;
use crate::config::{AppConfig, Cli};
use crate::http::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging().context("failed to initialize logging")?;

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli).context("failed to load configuration")?;
    info!(
        bind = %config.bind,
        data_dir = %config.data_dir.display(),
        assets_root = %config.assets_root.display(),
        "configuration loaded"
    );

    probe_catalogs(&config.data_dir).await;

    let state = AppState {
        data_dir: config.data_dir,
        assets_root: config.assets_root,
    };

    let app = router(state);
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    if config.bind.ip().is_loopback() {
        warn!(
            bind = %config.bind,
            "binding to loopback; use --bind 0.0.0.0:8480 for LAN access"
        );
    }

    let shutdown = tokio::signal::ctrl_c();
    info!(bind = %config.bind, "skinshop-rs listening");

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        let _ = shutdown.await;
        info!("shutting down gracefully");
    })
    .await
    .context("server exited with error")
}

/// Initialize tracing subscriber with `RUST_LOG` env filter (default: `info`).
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

/// Best-effort startup probe of both catalog documents. A missing or
/// malformed file is not fatal; every request re-reads it, so the endpoint
/// recovers as soon as a valid file is deployed.
async fn probe_catalogs(data_dir: &Path) {
    for kind in CatalogKind::ALL {
        match catalog::read_catalog(data_dir, kind).await {
            Ok(Value::Array(items)) => {
                info!(
                    catalog = kind.file_name(),
                    entries = items.len(),
                    "catalog loaded"
                );
            }
            Ok(_) => {
                warn!(
                    catalog = kind.file_name(),
                    "catalog root is not a JSON array"
                );
            }
            Err(error) => {
                warn!(
                    catalog = kind.file_name(),
                    error = %error,
                    "catalog not readable; its endpoint will fail until a valid file is deployed"
                );
            }
        }
    }
}
