//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kadry_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("kadry_core version={}", kadry_core::core_version());
    println!(
        "kadry_core backends={}",
        ["json", "yaml", "db"].join(",")
    );
}
