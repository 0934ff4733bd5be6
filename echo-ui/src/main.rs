//! Echo front end
//!
//! Client-side rendered Leptos application, compiled to WebAssembly with
//! trunk. Every screen owns a controller from `echo::session`; nothing talks
//! to a server once the bundle is loaded.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", e).into());
    }
    log::info!("Echo front end starting");

    mount_to_body(|| view! { <app::App /> });
}
