//! WASM entry point
//!
//! This is the binary Trunk compiles to WASM. It attaches every page
//! behavior to the document it is loaded into.
//!
//! No `tracing` subscriber is installed, so the transition traces emitted by
//! `vitrine-core` are discarded in the browser. Inert features, bind failures
//! and rejected configuration reach the console through `vitrine-web`.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(e) = vitrine_web::start() {
        web_sys::console::error_1(&format!("Page behaviors failed to start: {e}").into());
    }
}
