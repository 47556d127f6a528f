//! File Controller
//!
//! Input discovery and output placement.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

pub const VUE_EXTENSION: &str = "vue";

/// Expands paths and glob patterns into the `.vue` files they name, sorted
/// and without duplicates. Directories contribute every `.vue` file below
/// them.
pub fn discover_files(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_dir() {
            let nested = format!("{}/**/*.{}", pattern.trim_end_matches('/'), VUE_EXTENSION);
            collect_glob(&nested, &mut files)?;
        } else if path.is_file() {
            if is_vue_file(path) {
                files.insert(path.to_path_buf());
            } else {
                warn!("skipping {}: not a .vue file", path.display());
            }
        } else {
            collect_glob(pattern, &mut files)?;
        }
    }
    debug!("discovered {} file(s)", files.len());
    Ok(files.into_iter().collect())
}

fn collect_glob(pattern: &str, files: &mut BTreeSet<PathBuf>) -> anyhow::Result<()> {
    let entries = glob::glob(pattern).with_context(|| format!("invalid pattern `{}`", pattern))?;
    let before = files.len();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() && is_vue_file(&path) => {
                files.insert(path);
            }
            Ok(_) => {}
            Err(e) => warn!("cannot read {}: {}", e.path().display(), e.error()),
        }
    }
    if files.len() == before {
        warn!("no .vue files match `{}`", pattern);
    }
    Ok(())
}

fn is_vue_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == VUE_EXTENSION)
}

pub fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))
}

/// `Name.vue` -> `Name.<suffix>.vue`, or the input itself when overwriting.
pub fn output_path(input: &Path, overwrite: bool, suffix: &str) -> PathBuf {
    if overwrite {
        return input.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}.{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}.{}", stem, suffix),
    };
    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_inserts_suffix_before_extension() {
        assert_eq!(
            output_path(Path::new("src/Hello.vue"), false, "options"),
            PathBuf::from("src/Hello.options.vue")
        );
        assert_eq!(
            output_path(Path::new("Hello.class.vue"), false, "options"),
            PathBuf::from("Hello.class.options.vue")
        );
    }

    #[test]
    fn overwrite_keeps_input_path() {
        assert_eq!(
            output_path(Path::new("src/Hello.vue"), true, "options"),
            PathBuf::from("src/Hello.vue")
        );
    }
}
