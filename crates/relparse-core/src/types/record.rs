use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::ReleaseType;

fn is_zero(n: &u32) -> bool {
    *n == 0
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Everything extracted from one scene release name.
///
/// Records are built by [`ReleaseParser`](crate::parser::ReleaseParser) only.
/// `input` and `title` are read through accessors because the title is always
/// derived from the input. Absent values are `0`, `""` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseRecord {
    #[serde(skip_serializing_if = "String::is_empty")]
    input: String,

    /// Output only: a deserialized record never carries a title of its own.
    #[serde(skip_serializing_if = "String::is_empty", skip_deserializing)]
    title: String,

    #[serde(rename = "type")]
    pub release_type: ReleaseType,

    #[serde(skip_serializing_if = "is_zero")]
    pub season: u32,

    /// Last season of a multi-season pack, else 0.
    #[serde(skip_serializing_if = "is_zero")]
    pub season_end: u32,

    #[serde(skip_serializing_if = "is_zero")]
    pub episode: u32,

    /// Last episode of a multi-episode release, else 0.
    #[serde(skip_serializing_if = "is_zero")]
    pub episode_end: u32,

    #[serde(skip_serializing_if = "is_zero")]
    pub year: u32,

    /// Lower-cased resolution label, e.g. `720p`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resolution: String,

    /// Source text as written, e.g. `Blu-Ray`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Canonical source label, e.g. `BLURAY`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_group: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub codec: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub codec_group: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub audio: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub audio_group: String,

    /// Release group credited at the end of the name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group: String,

    /// DVD region, e.g. `R5`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub container: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,

    /// Inner text of a `{{...}}` token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub sbs: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub size: String,

    #[serde(skip_serializing_if = "is_false")]
    pub doku: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub extended: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub hardcoded: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub subbed: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub proper: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub repack: bool,

    #[serde(rename = "is_3d", skip_serializing_if = "is_false")]
    pub is_3d: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub uncut: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub widescreen: bool,
}

/// One named attribute of a record, rendered as text.
///
/// `value` is empty when the attribute is absent (zero, empty or false).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Snake-case key, identical to the JSON key.
    pub key: &'static str,
    /// Human-readable label used by the text dump.
    pub label: &'static str,
    pub value: String,
}

impl ReleaseRecord {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// The original, unmodified input string.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Human-readable title; empty when the name could not be delimited.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` if a title was extracted, the caller-visible signal
    /// that the input looked like a release name at all.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    #[must_use]
    pub fn is_movie(&self) -> bool {
        self.release_type == ReleaseType::Movie
    }

    #[must_use]
    pub fn is_tvshow(&self) -> bool {
        self.release_type == ReleaseType::TvShow
    }

    /// All attributes in declaration order.
    #[must_use]
    pub fn attributes(&self) -> Vec<Attribute> {
        fn num(n: u32) -> String {
            if n == 0 { String::new() } else { n.to_string() }
        }
        fn flag(b: bool) -> String {
            if b { "true".to_string() } else { String::new() }
        }
        fn attr(key: &'static str, label: &'static str, value: String) -> Attribute {
            Attribute { key, label, value }
        }

        vec![
            attr("input", "Input", self.input.clone()),
            attr("title", "Title", self.title.clone()),
            attr("type", "Type", self.release_type.to_string()),
            attr("season", "Season", num(self.season)),
            attr("season_end", "SeasonEnd", num(self.season_end)),
            attr("episode", "Episode", num(self.episode)),
            attr("episode_end", "EpisodeEnd", num(self.episode_end)),
            attr("year", "Year", num(self.year)),
            attr("resolution", "Resolution", self.resolution.clone()),
            attr("source", "Source", self.source.clone()),
            attr("source_group", "SourceGroup", self.source_group.clone()),
            attr("codec", "Codec", self.codec.clone()),
            attr("codec_group", "CodecGroup", self.codec_group.clone()),
            attr("audio", "Audio", self.audio.clone()),
            attr("audio_group", "AudioGroup", self.audio_group.clone()),
            attr("group", "Group", self.group.clone()),
            attr("region", "Region", self.region.clone()),
            attr("container", "Container", self.container.clone()),
            attr("website", "Website", self.website.clone()),
            attr("language", "Language", self.language.clone()),
            attr("password", "Password", self.password.clone()),
            attr("sbs", "SBS", self.sbs.clone()),
            attr("size", "Size", self.size.clone()),
            attr("doku", "Doku", flag(self.doku)),
            attr("extended", "Extended", flag(self.extended)),
            attr("hardcoded", "Hardcoded", flag(self.hardcoded)),
            attr("subbed", "Subbed", flag(self.subbed)),
            attr("proper", "Proper", flag(self.proper)),
            attr("repack", "Repack", flag(self.repack)),
            attr("is_3d", "Is3D", flag(self.is_3d)),
            attr("uncut", "Uncut", flag(self.uncut)),
            attr("widescreen", "Widescreen", flag(self.widescreen)),
        ]
    }

    /// Rendered value of the attribute with the given JSON key.
    ///
    /// Returns `None` for unknown keys and `Some("")` for absent values.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|a| a.key == key)
            .map(|a| a.value)
    }
}

impl fmt::Display for ReleaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "'{}' parsed to:", self.input)?;
        for attr in self.attributes() {
            if !attr.value.is_empty() {
                writeln!(f, "\t{}:\t{}", attr.label, attr.value)?;
            }
        }
        Ok(())
    }
}
