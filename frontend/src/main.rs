#[cfg(target_arch = "wasm32")]
fn main() {
    graphx_frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("graphx-frontend runs in the browser; build it for wasm32 with trunk.");
}
