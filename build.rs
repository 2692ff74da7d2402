use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Watchpoints on `a` are set at a hardcoded address, so the binary must not be relocated.
    let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let target_env = env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();
    if os == "linux" && target_env == "gnu" {
        println!("cargo:rustc-link-arg-bins=-no-pie");
    }
}
