//! Browser Console Logging
//!
//! Routes `tracing` events to the devtools console.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Install the console subscriber. Call once, before mounting.
pub fn init() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .set_report_logs_in_timings(false)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
