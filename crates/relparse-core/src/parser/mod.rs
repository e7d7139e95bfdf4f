pub mod boundary;
pub mod classify;
pub mod config;
pub mod release;

use std::sync::LazyLock;

pub use boundary::TitleBoundary;
pub use classify::classify;
pub use config::ParserConfig;
pub use release::ReleaseParser;

use crate::types::ReleaseRecord;

static DEFAULT_PARSER: LazyLock<ReleaseParser> =
    LazyLock::new(|| ReleaseParser::new().expect("static catalog patterns must compile"));

impl ReleaseParser {
    /// Process-wide parser with the default configuration, built on first use.
    #[must_use]
    pub fn global() -> &'static ReleaseParser {
        &DEFAULT_PARSER
    }
}

/// Parses a release name with the shared default parser.
///
/// # Examples
/// ```
/// use relparse_core::parser::parse;
///
/// let release = parse("Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE");
/// assert_eq!(release.title(), "Brave");
/// assert_eq!(release.year, 2012);
/// ```
pub fn parse(input: &str) -> ReleaseRecord {
    ReleaseParser::global().parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_parser_is_shared() {
        assert!(std::ptr::eq(ReleaseParser::global(), ReleaseParser::global()));
    }

    #[test]
    fn free_function_matches_fresh_parser() {
        let input = "Mr.Robot.S01.PROPER.VOSTFR.720p.WEB-DL.DD5.1.H264-ARK01";
        assert_eq!(parse(input), ReleaseParser::new().unwrap().parse(input));
    }

    #[test]
    fn parsing_from_threads_is_independent() {
        let handles: Vec<_> = ["Brave.2012.R5.DVDRip.XViD.LiNE-UNiQUE", "Some.Game-CODEX"]
            .into_iter()
            .map(|input| std::thread::spawn(move || parse(input)))
            .collect();
        let titles: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap().title().to_string())
            .collect();
        assert_eq!(titles, vec!["Brave", "Some Game"]);
    }
}
