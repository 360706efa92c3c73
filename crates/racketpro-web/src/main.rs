//! RacketPro Web entry point

use tracing::error;

fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    if let Err(err) = racketpro_web::start() {
        error!(error = %err, "failed to start page enhancements");
    }
}
