//! Movie Renamer
//!
//! Renames scene release directories (and optionally the video files inside
//! them) to clean names built from naming templates.

mod rename;
mod template;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::rename::{NamingFormats, RenameOptions, RenameSummary, rename_releases};
use crate::template::Template;

/// Release name used to demonstrate the available placeholders.
const EXAMPLE_RELEASE: &str = "Release.Name.Uncut.2010.German.Dubbed.AC3.BluRay.1080p.x264-GroupName";

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "movie-renamer")]
#[command(about = "Rename scene release directories to clean movie names")]
#[command(version)]
struct Cli {
    /// Also rename the video file inside each release directory
    #[arg(long)]
    files: bool,

    /// Leave the release directories themselves untouched
    #[arg(long)]
    no_rename: bool,

    /// Only print what would be renamed
    #[arg(long)]
    test: bool,

    /// Naming template for movies
    #[arg(long, env = "RELPARSE_MOVIE_FORMAT", default_value = "{title}[ ({year})]")]
    mformat: String,

    /// Naming template for tv shows
    #[arg(long, env = "RELPARSE_TV_FORMAT", default_value = "{title} S{season}E{episode}")]
    tvformat: String,

    /// Print the available template placeholders and exit
    #[arg(long)]
    formats: bool,

    /// Directories containing release directories
    #[arg(required_unless_present = "formats")]
    roots: Vec<PathBuf>,
}

impl Cli {
    fn options(&self) -> RenameOptions {
        RenameOptions {
            files: self.files,
            dirs: !self.no_rename,
            dry_run: self.test,
        }
    }

    fn naming_formats(&self) -> Result<NamingFormats> {
        Ok(NamingFormats {
            movie: Template::parse(&self.mformat)
                .with_context(|| format!("invalid movie format {:?}", self.mformat))?,
            tvshow: Template::parse(&self.tvformat)
                .with_context(|| format!("invalid tv format {:?}", self.tvformat))?,
        })
    }
}

/// Prints every placeholder with its value for the example release.
fn print_formats(out: &mut impl Write) -> Result<()> {
    let example = relparse_core::parse(EXAMPLE_RELEASE);
    writeln!(out, "available formats for example release name: {EXAMPLE_RELEASE}")?;
    writeln!(out)?;
    for attr in example.attributes() {
        writeln!(out, "{{{}}}\t => \t{}", attr.key, attr.value)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "wrap text in [...] to drop it when a placeholder inside is empty, e.g. {{title}}[ ({{year}})]"
    )?;
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<RenameSummary> {
    let formats = cli.naming_formats()?;
    let options = cli.options();
    if options.dry_run {
        warn!("running in test mode, no actual renaming is done");
    }

    let mut total = RenameSummary::default();
    for root in &cli.roots {
        let summary = rename_releases(root, &formats, options, out)?;
        total.renamed += summary.renamed;
        total.skipped += summary.skipped;
        total.failed += summary.failed;
    }
    Ok(total)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.formats {
        return print_formats(&mut out);
    }

    let summary = run(&cli, &mut out)?;
    info!(
        renamed = summary.renamed,
        skipped = summary.skipped,
        failed = summary.failed,
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags() {
        let cli = Cli::try_parse_from(["movie-renamer", "/media/movies"]).unwrap();
        let options = cli.options();
        assert!(options.dirs);
        assert!(!options.files);
        assert!(!options.dry_run);
        assert_eq!(cli.mformat, "{title}[ ({year})]");
        assert_eq!(cli.tvformat, "{title} S{season}E{episode}");
    }

    #[test]
    fn roots_required_unless_formats() {
        assert!(Cli::try_parse_from(["movie-renamer"]).is_err());
        assert!(Cli::try_parse_from(["movie-renamer", "--formats"]).is_ok());
    }

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "movie-renamer",
            "--files",
            "--no-rename",
            "--test",
            "/media/movies",
        ])
        .unwrap();
        let options = cli.options();
        assert!(options.files);
        assert!(!options.dirs);
        assert!(options.dry_run);
    }

    #[test]
    fn invalid_format_is_reported() {
        let cli = Cli::try_parse_from(["movie-renamer", "--mformat", "{title", "/media"]).unwrap();
        let err = cli.naming_formats().unwrap_err();
        assert!(format!("{err:#}").contains("invalid movie format"));
    }

    #[test]
    fn formats_table_lists_placeholders() {
        let mut out = Vec::new();
        print_formats(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(EXAMPLE_RELEASE));
        assert!(text.contains("{title}\t => \tRelease Name\n"));
        assert!(text.contains("{year}\t => \t2010\n"));
        assert!(text.contains("{uncut}\t => \ttrue\n"));
        assert!(text.contains("{season}\t => \t\n"));
    }

    #[test]
    fn run_renames_each_root() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::create_dir(first.path().join("Brave.2012.DVDRip.XViD-UNiQUE")).unwrap();
        std::fs::create_dir(
            second
                .path()
                .join("Hercules.2014.EXTENDED.1080p.WEB-DL.DD5.1.H264-RARBG"),
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            std::ffi::OsStr::new("movie-renamer"),
            first.path().as_os_str(),
            second.path().as_os_str(),
        ])
        .unwrap();
        let mut out = Vec::new();
        let summary = run(&cli, &mut out).unwrap();

        assert_eq!(summary.renamed, 2);
        assert!(first.path().join("Brave (2012)").is_dir());
        assert!(second.path().join("Hercules (2014)").is_dir());
    }
}
