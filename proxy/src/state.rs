use anyhow::Context;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
    pub assets: ServeDir<ServeFile>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .redirect(reqwest::redirect::Policy::none())
            // Bounds connecting and each idle gap; long streamed responses are not cut off.
            .connect_timeout(config.upstream_timeout)
            .read_timeout(config.upstream_timeout)
            .build()
            .context("Failed to build upstream HTTP client")?;

        // Unknown paths fall back to index.html so client-side routes survive a reload.
        let index = config.static_dir.join("index.html");
        let assets = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

        Ok(Self {
            config: Arc::new(config),
            client,
            assets,
        })
    }
}
