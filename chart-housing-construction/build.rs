//! Build script for chart-housing-construction.
//!
//! Copies the housing dataset into `OUT_DIR` so it can be embedded via
//! `include_str!` at compile time. The source defaults to
//! `../fixtures/housing.json` and can be overridden with `AZH_DATASET`.
//!
//! `AZH_SAMPLE_DATA` is set to `1` for the app when the bundled fixture or
//! the placeholder is embedded, and `0` when `AZH_DATASET` supplied the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Used when no fixture exists so the app still builds and shows one region.
const PLACEHOLDER_JSON: &str = r#"[{"Name": "Arizona", "Total": 0, "2011": 0}]"#;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("housing.json");

    let custom = env::var("AZH_DATASET").ok().map(PathBuf::from);
    let src = custom
        .clone()
        .unwrap_or_else(|| PathBuf::from("../fixtures/housing.json"));

    let sample = if src.exists() {
        fs::copy(&src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src.display(), dest.display(), e);
        });
        custom.is_none()
    } else {
        fs::write(&dest, PLACEHOLDER_JSON).unwrap();
        println!(
            "cargo:warning=Dataset {} not found, using placeholder",
            src.display()
        );
        true
    };

    println!("cargo:rustc-env=AZH_SAMPLE_DATA={}", if sample { 1 } else { 0 });

    println!("cargo:rerun-if-changed={}", src.display());
    println!("cargo:rerun-if-env-changed=AZH_DATASET");
    println!("cargo:rerun-if-changed=build.rs");
}
