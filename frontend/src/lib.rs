mod api;
mod app;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use app::App;

/// Browser entry point: installs the panic hook and logger, starts the runtime
/// config fetch and mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
    }
    log::info!("Starting GraphX frontend");

    leptos::spawn_local(async {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    leptos::mount_to_body(App);
}
