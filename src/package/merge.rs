use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{HandscriptError, HandscriptResult};

/// Names of the inputs and outputs of [`merge_dist`], relative to the dist directory.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PackageLayout {
    /// CommonJS build output directory.
    pub cjs_dir: String,
    /// ES module build output directory.
    pub esm_dir: String,
    /// Entry file name inside both build outputs.
    pub entry: String,
    /// Type declaration file inside the CommonJS output.
    pub declaration: String,
    /// File name the ES module entry is renamed to.
    pub esm_entry: String,
    /// Static asset directories copied verbatim from the CommonJS output.
    pub asset_dirs: Vec<String>,
}

impl Default for PackageLayout {
    fn default() -> Self {
        Self {
            cjs_dir: "cjs".to_string(),
            esm_dir: "esm".to_string(),
            entry: "index.js".to_string(),
            declaration: "index.d.ts".to_string(),
            esm_entry: "index.mjs".to_string(),
            asset_dirs: vec!["components".to_string(), "fonts".to_string()],
        }
    }
}

/// Summary of a completed merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageReport {
    /// Files written into the dist directory (entry files and asset files).
    pub files_copied: usize,
    /// Intermediate directories removed.
    pub dirs_removed: Vec<PathBuf>,
}

/// Merge the CommonJS and ES module build outputs under `dist` into one flat layout.
///
/// Copies the CommonJS entry and declaration, renames the ES module entry, copies the asset
/// directories, then removes both intermediate build trees. File contents are not transformed.
#[tracing::instrument(skip(layout), fields(dist = %dist.display()))]
pub fn merge_dist(dist: &Path, layout: &PackageLayout) -> HandscriptResult<PackageReport> {
    validate_layout(layout)?;
    std::fs::create_dir_all(dist)
        .with_context(|| format!("create dist dir '{}'", dist.display()))?;

    let cjs = dist.join(&layout.cjs_dir);
    let esm = dist.join(&layout.esm_dir);
    let mut report = PackageReport::default();

    copy_file(&cjs.join(&layout.entry), &dist.join(&layout.entry))?;
    copy_file(&cjs.join(&layout.declaration), &dist.join(&layout.declaration))?;
    copy_file(&esm.join(&layout.entry), &dist.join(&layout.esm_entry))?;
    report.files_copied += 3;

    for dir in &layout.asset_dirs {
        report.files_copied += copy_dir_recursive(&cjs.join(dir), &dist.join(dir))?;
    }

    for dir in [cjs, esm] {
        std::fs::remove_dir_all(&dir)
            .with_context(|| format!("remove intermediate dir '{}'", dir.display()))?;
        report.dirs_removed.push(dir);
    }

    tracing::info!(files = report.files_copied, "merged dist layout");
    Ok(report)
}

fn validate_layout(layout: &PackageLayout) -> HandscriptResult<()> {
    let names = [
        &layout.cjs_dir,
        &layout.esm_dir,
        &layout.entry,
        &layout.declaration,
        &layout.esm_entry,
    ];
    for name in names.into_iter().chain(layout.asset_dirs.iter()) {
        if name.is_empty() || name.contains("..") || Path::new(name).is_absolute() {
            return Err(HandscriptError::validation(format!(
                "invalid package layout entry '{name}'"
            )));
        }
    }
    if layout.cjs_dir == layout.esm_dir {
        return Err(HandscriptError::validation(
            "cjs_dir and esm_dir must differ",
        ));
    }
    Ok(())
}

fn copy_file(from: &Path, to: &Path) -> HandscriptResult<()> {
    std::fs::copy(from, to)
        .with_context(|| format!("copy '{}' to '{}'", from.display(), to.display()))?;
    Ok(())
}

fn copy_dir_recursive(from: &Path, to: &Path) -> HandscriptResult<usize> {
    let entries =
        std::fs::read_dir(from).with_context(|| format!("read dir '{}'", from.display()))?;
    std::fs::create_dir_all(to).with_context(|| format!("create dir '{}'", to.display()))?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.with_context(|| format!("read dir entry in '{}'", from.display()))?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat '{}'", src.display()))?;
        if file_type.is_dir() {
            copied += copy_dir_recursive(&src, &dst)?;
        } else {
            copy_file(&src, &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
#[path = "../../tests/unit/package/merge.rs"]
mod tests;
