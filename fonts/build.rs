use std::env;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use zip::ZipArchive;

const FONT_FILE: &str = "SourceHanSansSC-Regular.otf";
const ZIP_URL: &str =
    "https://github.com/adobe-fonts/source-han-sans/releases/download/2.005R/09_SourceHanSansSC.zip";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FONT_TTF");

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        println!("cargo:warning=OUT_DIR not set");
        return;
    };
    let target = out_dir.join(FONT_FILE);

    if let Some(src) = env::var_os("FONT_TTF").map(PathBuf::from) {
        match fs::copy(&src, &target) {
            Ok(_) => return,
            Err(e) => println!("cargo:warning=failed to copy FONT_TTF {}: {e}", src.display()),
        }
    }

    // incremental build
    if fs::metadata(&target).is_ok_and(|m| m.len() > 0) {
        return;
    }

    match fetch_font(&out_dir) {
        Ok(bytes) => {
            if let Err(e) = fs::write(&target, bytes) {
                println!("cargo:warning=failed to write {}: {e}", target.display());
                write_empty(&target);
            }
        }
        Err(e) => {
            println!("cargo:warning={e}; chart text falls back to approximate metrics");
            write_empty(&target);
        }
    }
}

// include_bytes! needs the file to exist even when the font is unavailable.
fn write_empty(target: &Path) {
    if let Err(e) = fs::write(target, b"") {
        println!("cargo:warning=failed to write {}: {e}", target.display());
    }
}

fn fetch_font(out_dir: &Path) -> Result<Vec<u8>, String> {
    let zip_path = out_dir.join("SourceHanSansSC.zip");
    download(&zip_path)?;
    let data = fs::read(&zip_path).map_err(|e| format!("zip read failed: {e}"))?;
    extract(&data)
}

fn download(dest: &Path) -> Result<(), String> {
    let dest = dest.to_string_lossy();
    let attempts: [(&str, Vec<&str>); 2] = [
        ("curl", vec!["-L", "-f", "-s", "-o", &dest, ZIP_URL]),
        ("wget", vec!["-q", "-O", &dest, ZIP_URL]),
    ];
    for (tool, args) in attempts {
        if Command::new(tool)
            .args(&args)
            .status()
            .is_ok_and(|st| st.success())
        {
            return Ok(());
        }
    }
    Err(format!("failed to download {ZIP_URL}"))
}

fn extract(data: &[u8]) -> Result<Vec<u8>, String> {
    let mut zip =
        ZipArchive::new(Cursor::new(data)).map_err(|e| format!("zip parse failed: {e}"))?;
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).map_err(|e| format!("zip entry {i}: {e}"))?;
        if file.name().ends_with(FONT_FILE) {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .map_err(|e| format!("extract failed: {e}"))?;
            return Ok(buf);
        }
    }
    Err(format!("{FONT_FILE} not found in archive"))
}
