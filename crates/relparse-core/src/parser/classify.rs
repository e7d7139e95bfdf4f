use tracing::trace;

use super::config::ParserConfig;
use crate::normalize::parse_int;
use crate::types::{ReleaseRecord, ReleaseType};

/// Assigns the final release type.
///
/// 1. A season, or an episode that is not just the codec's digits, makes a
///    tv show.
/// 2. Otherwise a type already detected during extraction (console
///    platforms) is kept, and a known publishing group decides next.
/// 3. Everything else is a movie.
///
/// Any non-tvshow record has its episode cleared.
pub fn classify(record: &mut ReleaseRecord, detected: Option<ReleaseType>, config: &ParserConfig) {
    let codec_digits = parse_int(&record.codec);
    if record.season > 0 || (record.episode > 0 && record.episode != codec_digits) {
        record.release_type = ReleaseType::TvShow;
        return;
    }

    let kind = config
        .group_type(&record.group)
        .or(detected)
        .unwrap_or(ReleaseType::Movie);

    trace!(group = %record.group, %kind, "classified non-episodic release");
    record.release_type = kind;
    record.episode = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ReleaseRecord {
        ReleaseRecord::new("input")
    }

    #[test]
    fn season_makes_tvshow() {
        let mut r = record();
        r.season = 2;
        classify(&mut r, None, &ParserConfig::default());
        assert_eq!(r.release_type, ReleaseType::TvShow);
    }

    #[test]
    fn episode_equal_to_codec_digits_is_ignored() {
        let mut r = record();
        r.episode = 264;
        r.codec = "x264".into();
        classify(&mut r, None, &ParserConfig::default());
        assert_eq!(r.release_type, ReleaseType::Movie);
        assert_eq!(r.episode, 0);
    }

    #[test]
    fn episode_alone_makes_tvshow() {
        let mut r = record();
        r.episode = 5;
        r.codec = "x264".into();
        classify(&mut r, None, &ParserConfig::default());
        assert_eq!(r.release_type, ReleaseType::TvShow);
        assert_eq!(r.episode, 5);
    }

    #[test]
    fn known_group_sets_type() {
        let mut r = record();
        r.group = "SKIDROW".into();
        classify(&mut r, None, &ParserConfig::default());
        assert_eq!(r.release_type, ReleaseType::Pc);
    }

    #[test]
    fn detected_console_survives() {
        let mut r = record();
        r.episode = 360;
        r.codec = "x360".into();
        classify(&mut r, Some(ReleaseType::Console), &ParserConfig::default());
        assert_eq!(r.release_type, ReleaseType::Console);
        assert_eq!(r.episode, 0);
    }

    #[test]
    fn fallback_is_movie() {
        let mut r = record();
        classify(&mut r, None, &ParserConfig::default());
        assert_eq!(r.release_type, ReleaseType::Movie);
    }
}
