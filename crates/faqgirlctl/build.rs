// Build script for faqgirlctl - embeds version at compile time

fn main() {
    // Release pipelines may pin the version through the environment
    let version =
        std::env::var("FAQGIRL_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=FAQGIRL_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=FAQGIRL_VERSION");
}
