//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `docketline_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("docketline_core ping={}", docketline_core::ping());
    println!("docketline_core version={}", docketline_core::core_version());
    println!(
        "docketline_core rules={} extensions={}",
        docketline_core::base_catalog().len(),
        docketline_core::extensions().len()
    );
}
