// Sets TCSORT_VERSION for `tcsort --version`. Release builds may pass their
// own version string through the environment; otherwise the crate version is used.

fn main() {
    let version =
        std::env::var("TCSORT_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=TCSORT_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=TCSORT_VERSION");
}
