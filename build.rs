use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let pkg = std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let version = match git_hash() {
        Some(hash) => format!("{pkg}+g{hash}"),
        None => pkg,
    };

    println!("cargo:rustc-env=GALERIE_VERSION={version}");
}

/// Short commit hash of HEAD, with a `.dirty` marker for uncommitted changes.
/// None outside a git checkout (e.g. a packaged source tarball).
fn git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if hash.is_empty() {
        return None;
    }

    let dirty = Command::new("git")
        .args(["diff", "--quiet", "HEAD"])
        .status()
        .map(|s| !s.success())
        .unwrap_or(false);

    Some(if dirty { format!("{hash}.dirty") } else { hash })
}
