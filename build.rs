use std::path::PathBuf;
use std::process::Command;

/// Embeds the short commit hash for `sketchpad --version`.
///
/// Packagers building from a tarball can set `SKETCHPAD_GIT_HASH` themselves.
fn main() {
    println!("cargo:rerun-if-env-changed=SKETCHPAD_GIT_HASH");

    let hash = std::env::var("SKETCHPAD_GIT_HASH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=SKETCHPAD_GIT_HASH={hash}");

    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]).map(PathBuf::from) {
        for watched in ["HEAD", "packed-refs", "refs/heads"] {
            let path = git_dir.join(watched);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

/// Runs git and returns trimmed stdout, `None` on any failure.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
