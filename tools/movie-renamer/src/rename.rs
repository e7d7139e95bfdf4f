//! Directory scanning and renaming.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use relparse_core::{ReleaseRecord, ReleaseType};
use tracing::{debug, error, info, warn};

use crate::template::Template;

/// Extensions treated as video even when the MIME table disagrees,
/// compared case-insensitively.
const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi", "m4v", "webm", "flv", "mov", "wmv"];

/// What a renamer run is allowed to touch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Rename the video files inside each release directory.
    pub files: bool,
    /// Rename the release directories themselves.
    pub dirs: bool,
    /// Only report what would be renamed.
    pub dry_run: bool,
}

/// Naming templates by release type.
#[derive(Debug, Clone)]
pub struct NamingFormats {
    pub movie: Template,
    pub tvshow: Template,
}

/// Counters for one renamer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: u32,
    pub skipped: u32,
    pub failed: u32,
}

/// Whether `path` is a video file worth renaming: a `video/*` MIME type or a
/// known video extension, and no `sample` anywhere in the path.
pub fn is_video(path: &Path) -> bool {
    let is_video_mime = mime_guess::from_path(path)
        .iter()
        .any(|m| m.type_() == mime_guess::mime::VIDEO);
    let is_video_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| VIDEO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false);
    (is_video_mime || is_video_ext) && !path.to_string_lossy().to_lowercase().contains("sample")
}

/// Strips characters that are not allowed in file names, then surrounding
/// whitespace.
pub fn sanitize(name: &str) -> String {
    sanitize_filename::sanitize(name).trim().to_string()
}

/// Renames every release directory directly under `root`.
///
/// Failing to list `root` is an error; failures on individual entries are
/// logged and counted, and the run continues.
pub fn rename_releases(
    root: &Path,
    formats: &NamingFormats,
    options: RenameOptions,
    out: &mut impl Write,
) -> Result<RenameSummary> {
    let mut entries = fs::read_dir(root)
        .with_context(|| format!("failed to read directory {}", root.display()))?
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list directory {}", root.display()))?;
    entries.sort_by_key(|e| e.file_name());

    info!(root = %root.display(), entries = entries.len(), "scanning for releases");

    let mut summary = RenameSummary::default();
    for entry in entries {
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let record = relparse_core::parse(&name);
        if !record.has_title() {
            debug!(name = %name, "no title found, skipping");
            continue;
        }

        let Some(new_name) = target_name(&record, formats) else {
            summary.skipped += 1;
            continue;
        };
        writeln!(out, "rename '{name}' => '{new_name}'")?;

        let dir = entry.path();
        if options.files {
            rename_videos(&dir, &name, options.dry_run, &mut summary, out)?;
        }
        if options.dirs {
            rename_entry(&dir, &root.join(&new_name), options.dry_run, &mut summary);
        }
    }

    Ok(summary)
}

/// New directory name for a release, or `None` when it should be skipped.
fn target_name(record: &ReleaseRecord, formats: &NamingFormats) -> Option<String> {
    match record.release_type {
        ReleaseType::Movie => {
            let name = sanitize(&formats.movie.render(record));
            if name.is_empty() {
                warn!(
                    input = record.input(),
                    template = formats.movie.source(),
                    "rendered an empty name, skipping"
                );
                return None;
            }
            Some(name)
        }
        ReleaseType::TvShow => {
            warn!(
                input = record.input(),
                would_be = %sanitize(&formats.tvshow.render(record)),
                "tv releases are not supported, skipping"
            );
            None
        }
        kind => {
            debug!(input = record.input(), %kind, "not a video release, skipping");
            None
        }
    }
}

/// Renames the non-sample video files in `dir` to `<release name>.<ext>`.
fn rename_videos(
    dir: &Path,
    release: &str,
    dry_run: bool,
    summary: &mut RenameSummary,
    out: &mut impl Write,
) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            error!(dir = %dir.display(), error = %e, "failed to read release directory");
            summary.failed += 1;
            return Ok(());
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| is_video(p))
        .collect();
    files.sort();

    for path in files {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let new_name = format!("{}.{ext}", release.trim());
        let old_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(out, "rename '{old_name}' => '{new_name}'")?;
        rename_entry(&path, &dir.join(&new_name), dry_run, summary);
    }
    Ok(())
}

fn rename_entry(from: &Path, to: &Path, dry_run: bool, summary: &mut RenameSummary) {
    if from == to {
        summary.skipped += 1;
        return;
    }
    if dry_run {
        debug!(from = %from.display(), to = %to.display(), "dry run, not renaming");
        return;
    }
    if to.exists() {
        error!(from = %from.display(), to = %to.display(), "target already exists");
        summary.failed += 1;
        return;
    }
    match fs::rename(from, to) {
        Ok(()) => summary.renamed += 1,
        Err(e) => {
            error!(from = %from.display(), to = %to.display(), error = %e, "rename failed");
            summary.failed += 1;
        }
    }
}
