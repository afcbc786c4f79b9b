use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:30000/api";
pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:30000/auth";

/// Shape of `config.json` and of the `window.__GRAPHX_CONFIG` global.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub auth_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub auth_base_url: String,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

impl RuntimeConfig {
    fn is_empty(&self) -> bool {
        self.api_base_url.is_none() && self.auth_base_url.is_none()
    }

    /// Fills unset fields from `fallback`.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            auth_base_url: self.auth_base_url.or(fallback.auth_base_url),
        }
    }

    #[cfg(test)]
    fn resolve(self) -> ResolvedConfig {
        self.resolve_against(None)
    }

    /// Relative paths such as `/api` are anchored to `origin` so they go
    /// through the dev proxy.
    fn resolve_against(self, origin: Option<&str>) -> ResolvedConfig {
        ResolvedConfig {
            api_base_url: absolutize(normalize(self.api_base_url, DEFAULT_API_BASE_URL), origin),
            auth_base_url: absolutize(
                normalize(self.auth_base_url, DEFAULT_AUTH_BASE_URL),
                origin,
            ),
        }
    }
}

fn absolutize(value: String, origin: Option<&str>) -> String {
    match origin {
        Some(origin) if value.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), value)
        }
        _ => value,
    }
}

fn normalize(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_key(obj: &JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        Some(RuntimeConfig {
            api_base_url: read_key(&any, &["API_BASE_URL", "api_base_url"]),
            auth_base_url: read_key(&any, &["AUTH_BASE_URL", "auth_base_url"]),
        })
    }

    /// `window.__GRAPHX_ENV` (env.js) wins over `window.__GRAPHX_CONFIG`.
    pub fn snapshot_from_globals() -> RuntimeConfig {
        let env = read_global("__GRAPHX_ENV").unwrap_or_default();
        let cfg = read_global("__GRAPHX_CONFIG").unwrap_or_default();
        env.or(cfg)
    }

    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = origin()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn load() -> RuntimeConfig {
    let globals = browser::snapshot_from_globals();
    if globals.api_base_url.is_some() && globals.auth_base_url.is_some() {
        return globals;
    }
    match browser::fetch_runtime_config().await {
        Some(file) => globals.or(file),
        None => globals,
    }
}

#[cfg(target_arch = "wasm32")]
fn current_origin() -> Option<String> {
    browser::origin()
}

#[cfg(not(target_arch = "wasm32"))]
async fn load() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_origin() -> Option<String> {
    None
}

pub async fn resolved() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let loaded = load().await;
    if loaded.is_empty() {
        log::debug!("No runtime config found; using defaults");
    }
    let origin = current_origin();
    RESOLVED
        .get_or_init(|| loaded.resolve_against(origin.as_deref()))
        .clone()
}

pub async fn await_api_base_url() -> String {
    resolved().await.api_base_url
}

pub async fn await_auth_base_url() -> String {
    resolved().await.auth_base_url
}

pub async fn init() {
    let cfg = resolved().await;
    log::info!(
        "Runtime config initialized (api: {}, auth: {})",
        cfg.api_base_url,
        cfg.auth_base_url
    );
}
