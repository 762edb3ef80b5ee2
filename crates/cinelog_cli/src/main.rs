//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cinelog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // The interactive shell lives outside this repository; this probe only
    // validates core crate wiring.
    println!("cinelog_core version={}", cinelog_core::core_version());
    println!(
        "cinelog_core default_collection_file={}",
        cinelog_core::DEFAULT_COLLECTION_FILE
    );
}
