// The pure modules are driven by `frontend`; native builds only exercise them from tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod effects;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod gate;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod geometry;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod motion;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod nav;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod trigger;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
