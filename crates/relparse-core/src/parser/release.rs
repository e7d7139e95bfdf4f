use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::boundary::TitleBoundary;
use super::classify::classify;
use super::config::ParserConfig;
use crate::catalog::{Catalog, Field};
use crate::error::Result;
use crate::normalize::{parse_int, split_episodes, split_seasons, strip_group};
use crate::types::{ReleaseRecord, ReleaseType};

/// Scene release parser built on the pattern catalog.
///
/// Each field pattern is matched once against the input (leftmost match
/// wins), the matches bound the title, and the filled record is classified
/// as movie, tv show, console or pc release.
#[derive(Debug, Clone)]
pub struct ReleaseParser {
    catalog: Catalog,
    config: ParserConfig,
}

/// Per-call working state, never shared between inputs.
#[derive(Debug, Default)]
struct Extraction {
    matched: BTreeMap<Field, String>,
    boundary: TitleBoundary,
    detected: Option<ReleaseType>,
}

impl ReleaseParser {
    /// Constructs a parser with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `RelparseError::Regex` if a catalog pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_config(ParserConfig::default())
    }

    /// Constructs a parser with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `RelparseError::Regex` if a catalog pattern fails to compile.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            catalog: Catalog::new()?,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one release name. Never fails; unknown input yields an
    /// empty title.
    pub fn parse(&self, input: &str) -> ReleaseRecord {
        let mut record = ReleaseRecord::new(input);

        // A password token could read as any other field, so it goes first.
        let working = match self.catalog.split_password(input) {
            Some((password, stripped)) => {
                record.password = password;
                stripped
            }
            None => input.to_string(),
        };

        let mut state = Extraction::default();
        for field in Field::ALL {
            let Some(matched) = self.catalog.pattern(field).find(&working) else {
                continue;
            };
            if self.apply(field, matched, &mut record, &mut state) {
                state.boundary.record(input, matched);
                state.matched.insert(field, matched.to_string());
            }
        }

        record.set_title(state.boundary.title(input, &self.catalog));
        debug!(
            input,
            title = record.title(),
            start = state.boundary.start(),
            end = state.boundary.end(),
            matched = ?state.matched,
            "extracted release fields"
        );

        classify(&mut record, state.detected, &self.config);
        record
    }

    /// Stores one field match on the record.
    ///
    /// Returns `false` when a guard rejects the match and it must not count
    /// towards the title boundary.
    fn apply(
        &self,
        field: Field,
        matched: &str,
        record: &mut ReleaseRecord,
        state: &mut Extraction,
    ) -> bool {
        let codec = self.catalog.pattern(Field::Codec);
        match field {
            Field::Season => {
                (record.season, record.season_end) = split_seasons(matched);
            }
            Field::Episode => {
                // "x264" looks like an episode marker; the codec wins.
                if codec.is_match(matched) {
                    trace!(matched, "episode match is a codec, ignoring value");
                } else {
                    let episodes = split_episodes(matched);
                    if let Some(first) = episodes.first() {
                        record.episode = parse_int(first);
                    }
                    if let Some(last) = episodes.get(1) {
                        record.episode_end = parse_int(last);
                    }
                }
            }
            Field::Year => record.year = parse_int(matched),
            Field::Resolution => {
                record.resolution = self.label(field, matched).to_lowercase();
            }
            Field::Source => {
                record.source = matched.trim_matches(' ').to_string();
                record.source_group = self.label(field, matched);
            }
            Field::Codec => {
                record.codec = matched.to_string();
                record.codec_group = self.label(field, matched);
            }
            Field::Audio => {
                record.audio = matched.to_string();
                record.audio_group = self.label(field, matched);
            }
            Field::Group => {
                let technical = codec.is_match(matched)
                    || self.catalog.pattern(Field::Source).is_match(matched)
                    || self.catalog.pattern(Field::Language).is_match(matched);
                if technical {
                    trace!(matched, "group match is a technical tag, skipping");
                    return false;
                }
                record.group = strip_group(matched, self.catalog.pattern(Field::Container));
            }
            Field::Console => state.detected = Some(ReleaseType::Console),
            Field::Container => record.container = matched.replace('.', ""),
            Field::Region => record.region = matched.to_string(),
            Field::Website => record.website = matched.to_string(),
            Field::Language => record.language = matched.to_string(),
            Field::Sbs => record.sbs = matched.to_string(),
            Field::Size => record.size = matched.to_string(),
            Field::Doku => record.doku = true,
            Field::Extended => record.extended = true,
            Field::Uncut => record.uncut = true,
            Field::Hardcoded => record.hardcoded = true,
            Field::Proper => record.proper = true,
            Field::Subbed => record.subbed = true,
            Field::Repack => record.repack = true,
            Field::Is3D => record.is_3d = true,
            Field::Widescreen => record.widescreen = true,
        }
        true
    }

    fn label(&self, field: Field, matched: &str) -> String {
        self.catalog
            .pattern(field)
            .label(matched)
            .map(str::to_string)
            .unwrap_or_default()
    }
}
