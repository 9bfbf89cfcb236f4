#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod analytics;
mod browser;
mod content;
mod cv_download;
mod motion;
mod motion_styles;
mod page;
mod scroll_runtime;
mod site_config;
mod theme;
mod viewport;

#[cfg(target_arch = "wasm32")]
fn main() {
    page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("folio runs in the browser; build it with `trunk serve` or `trunk build`.");
}
