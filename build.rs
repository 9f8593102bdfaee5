// Copies static assets (page, styles, wasm-pack output) to `dist/`.
use fs_extra::dir::{copy, CopyOptions};
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }
    let options = CopyOptions::new().content_only(true).overwrite(true);
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {err}");
    }
}
