//! Build script for sevenseg-simulator.
//!
//! On Windows, links against a vendored SDL2 and places `SDL2.dll` next to the
//! `sevenseg-sim` binary. Other platforms use the system SDL2.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let workspace_root = PathBuf::from(manifest_dir);
    let Some(workspace_root) = workspace_root.parent() else {
        return;
    };
    let vendor_sdl2 = workspace_root.join("vendor").join("sdl2");
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}", vendor_sdl2.display());
        println!("cargo:warning=Put SDL2.lib and SDL2.dll in vendor/sdl2/ at the workspace root");
        return;
    }

    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());
    if let Ok(out_dir) = env::var("OUT_DIR") {
        copy_dll(&vendor_sdl2, Path::new(&out_dir));
    }
}

/// Copy `SDL2.dll` into the profile directory that holds the binary.
///
/// `OUT_DIR` is `target/<profile>/build/sevenseg-simulator-<hash>/out`.
fn copy_dll(
    vendor_sdl2: &Path,
    out_dir: &Path,
) {
    let Some(profile_dir) = out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
    else {
        return;
    };

    let src = vendor_sdl2.join("SDL2.dll");
    let dst = profile_dir.join("SDL2.dll");
    if !src.exists() || dst.exists() {
        return;
    }
    match fs::copy(&src, &dst) {
        Ok(_) => println!("cargo:warning=Copied SDL2.dll to {}", dst.display()),
        Err(e) => println!("cargo:warning=Failed to copy SDL2.dll: {e}"),
    }
}
