//! Release Dump Tool
//!
//! Parses release names read from standard input or from directory listings
//! and prints the extracted fields, either as a text dump or as JSON.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use relparse_core::ReleaseRecord;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "relparse")]
#[command(about = "Parse scene release names and dump the extracted fields")]
#[command(version)]
struct Cli {
    /// Print a JSON array of records instead of the text dump
    #[arg(long)]
    json: bool,

    /// Read one release name from standard input
    #[arg(long)]
    stdin: bool,

    /// Directories whose entries are parsed
    #[arg(required_unless_present = "stdin")]
    dirs: Vec<PathBuf>,
}

/// Release name of a directory entry: directories keep their full name,
/// files lose their extension.
fn release_name(path: &Path, is_dir: bool) -> Option<String> {
    let name = if is_dir {
        path.file_name()
    } else {
        path.file_stem()
    };
    name.map(|n| n.to_string_lossy().into_owned())
}

/// Reads the first line of `reader` without its line terminator.
fn read_release_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read release name from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parses every entry of `dir`, in file name order, keeping only records
/// with a title.
fn scan_dir(dir: &Path) -> Result<Vec<ReleaseRecord>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list directory {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());

    let mut records = Vec::new();
    for entry in entries {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let Some(name) = release_name(&entry.path(), is_dir) else {
            continue;
        };
        let record = relparse_core::parse(&name);
        if record.has_title() {
            records.push(record);
        } else {
            debug!(name = %name, "no title found, skipping");
        }
    }
    Ok(records)
}

fn run(cli: &Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut output = Vec::new();

    if cli.stdin {
        let record = relparse_core::parse(&read_release_line(input)?);
        if record.has_title() {
            if cli.json {
                output.push(record);
            } else {
                write!(out, "{record}")?;
            }
        }
    }

    for dir in &cli.dirs {
        if !cli.json {
            writeln!(out, "scanning directory '{}' for releases", dir.display())?;
        }
        let records = scan_dir(dir)?;
        if cli.json {
            output.extend(records);
        } else {
            for record in &records {
                write!(out, "{record}")?;
            }
        }
    }

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, &mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(json: bool, stdin: bool, dirs: Vec<PathBuf>) -> Cli {
        Cli { json, stdin, dirs }
    }

    #[test]
    fn files_lose_their_extension() {
        let path = Path::new("/media/Brave.2012.DVDRip.XViD-UNiQUE.mkv");
        assert_eq!(
            release_name(path, false).as_deref(),
            Some("Brave.2012.DVDRip.XViD-UNiQUE")
        );
        let path = Path::new("/media/Brave.2012.DVDRip.XViD-UNiQUE");
        assert_eq!(
            release_name(path, true).as_deref(),
            Some("Brave.2012.DVDRip.XViD-UNiQUE")
        );
    }

    #[test]
    fn stdin_line_is_trimmed() {
        let mut input = io::Cursor::new("Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE\r\nignored\n");
        assert_eq!(
            read_release_line(&mut input).unwrap(),
            "Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE"
        );
    }

    #[test]
    fn stdin_text_dump() {
        let mut input = io::Cursor::new("Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE\n");
        let mut out = Vec::new();
        run(&cli(false, true, vec![]), &mut input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("'Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE' parsed to:\n"));
        assert!(text.contains("\tTitle:\tBrave\n"));
        assert!(text.contains("\tYear:\t2012\n"));
        assert!(!text.contains("Season"));
    }

    #[test]
    fn directory_json_dump() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE")).unwrap();
        fs::write(
            dir.path().join("Sons.of.Anarchy.S07E07.720p.HDTV.X264-DIMENSION.mkv"),
            b"",
        )
        .unwrap();
        fs::write(dir.path().join("notes"), b"").unwrap();

        let mut out = Vec::new();
        run(
            &cli(true, false, vec![dir.path().to_path_buf()]),
            &mut io::Cursor::new(""),
            &mut out,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["title"], "Brave");
        assert_eq!(records[0]["type"], "movie");
        assert_eq!(records[1]["title"], "Sons of Anarchy");
        assert_eq!(records[1]["type"], "tvshow");
        assert_eq!(records[1]["season"], 7);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = run(
            &cli(false, false, vec![PathBuf::from("/definitely/not/here")]),
            &mut io::Cursor::new(""),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read directory"));
    }

    #[test]
    fn cli_requires_dir_or_stdin() {
        assert!(Cli::try_parse_from(["relparse"]).is_err());
        assert!(Cli::try_parse_from(["relparse", "--stdin"]).is_ok());
        assert!(Cli::try_parse_from(["relparse", "--json", "/tmp"]).is_ok());
    }
}
