//! # Pattern Catalog
//!
//! The fixed vocabulary of scene release names: one pattern per extracted
//! field. Composite patterns (resolution, source, codec, audio) are ordered
//! lists of `(label, sub-pattern)` pairs so the canonical label of a match can
//! be resolved without named-group introspection.

use std::fmt;

use regex::Regex;

use crate::error::Result;

/// A field of the release name, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Season,
    Episode,
    Year,
    Resolution,
    Source,
    Codec,
    Audio,
    Language,
    Region,
    Doku,
    Extended,
    Uncut,
    Hardcoded,
    Proper,
    Subbed,
    Repack,
    Is3D,
    Widescreen,
    Container,
    Website,
    Sbs,
    Size,
    Group,
    Console,
}

impl Field {
    /// Every field, in the order the pipeline processes them.
    pub const ALL: [Field; 24] = [
        Field::Season,
        Field::Episode,
        Field::Year,
        Field::Resolution,
        Field::Source,
        Field::Codec,
        Field::Audio,
        Field::Language,
        Field::Region,
        Field::Doku,
        Field::Extended,
        Field::Uncut,
        Field::Hardcoded,
        Field::Proper,
        Field::Subbed,
        Field::Repack,
        Field::Is3D,
        Field::Widescreen,
        Field::Container,
        Field::Website,
        Field::Sbs,
        Field::Size,
        Field::Group,
        Field::Console,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Season => "season",
            Self::Episode => "episode",
            Self::Year => "year",
            Self::Resolution => "resolution",
            Self::Source => "source",
            Self::Codec => "codec",
            Self::Audio => "audio",
            Self::Language => "language",
            Self::Region => "region",
            Self::Doku => "doku",
            Self::Extended => "extended",
            Self::Uncut => "uncut",
            Self::Hardcoded => "hardcoded",
            Self::Proper => "proper",
            Self::Subbed => "subbed",
            Self::Repack => "repack",
            Self::Is3D => "is3d",
            Self::Widescreen => "widescreen",
            Self::Container => "container",
            Self::Website => "website",
            Self::Sbs => "sbs",
            Self::Size => "size",
            Self::Group => "group",
            Self::Console => "console",
        }
    }

    /// Source text of this field's pattern.
    fn definition(self) -> PatternDef {
        match self {
            Self::Season => PatternDef::Plain(SEASON),
            Self::Episode => PatternDef::Plain(EPISODE),
            Self::Year => PatternDef::Plain(YEAR),
            Self::Resolution => PatternDef::Composite(&RESOLUTION),
            Self::Source => PatternDef::Composite(&SOURCE),
            Self::Codec => PatternDef::Composite(&CODEC),
            Self::Audio => PatternDef::Composite(&AUDIO),
            Self::Language => PatternDef::Plain(LANGUAGE),
            Self::Region => PatternDef::Plain(REGION),
            Self::Doku => PatternDef::Plain(DOKU),
            Self::Extended => PatternDef::Plain(EXTENDED),
            Self::Uncut => PatternDef::Plain(UNCUT),
            Self::Hardcoded => PatternDef::Plain(HARDCODED),
            Self::Proper => PatternDef::Plain(PROPER),
            Self::Subbed => PatternDef::Plain(SUBBED),
            Self::Repack => PatternDef::Plain(REPACK),
            Self::Is3D => PatternDef::Plain(IS3D),
            Self::Widescreen => PatternDef::Plain(WIDESCREEN),
            Self::Container => PatternDef::Plain(CONTAINER),
            Self::Website => PatternDef::Plain(WEBSITE),
            Self::Sbs => PatternDef::Plain(SBS),
            Self::Size => PatternDef::Plain(SIZE),
            Self::Group => PatternDef::Plain(GROUP),
            Self::Console => PatternDef::Plain(CONSOLE),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Perl classes are kept ASCII-only (`(?-u:\b)`, `[0-9]`) so accented
// letters and non-ASCII digits never count as word or digit characters.
//
// The episode pattern is case-sensitive: a capital `X` belongs to codecs and
// words, never to an `1x02` style marker.
const SEASON: &str = r"(?i)(s[0-9]{2}-s[0-9]{2}|s([0-9]{1,2})[eEx])|([Ss]?([0-9]{1,2}))[Eex]|([Ss]([0-9]{1,2}))";
const EPISODE: &str = r"([Eex]([0-9]{2,4}-?[Eex]?[0-9]{2,4}))|([Eex]([0-9]{2,4}(?:[abc])?)(?:[^0-9]|$))|(?-u:\b)((?:[Eex]p?\.?)([0-9]{2,4}(:?-?(?:[Eex]?p?)[0-9]{2,4})?)|[Ee]pisode[\t\n\f\r ]?([0-9]{1,4}))(?-u:\b)";
const YEAR: &str = r"([\[\(]?((?:19[0-9]|20[01])[0-9])[\]\)]?)";
const LANGUAGE: &str = r"(?i)(?-u:\b)(?:TRUE)?FR(?:ENCH)?(?-u:\b)|(?-u:\b)DE(?:UTSCH)?(?-u:\b)|(?-u:\b)GERMAN(?-u:\b)|(?-u:\b)EN(?:G(?:LISH)?)?(?-u:\b)|(?-u:\b)VOST(?:(F(?:R)?)|A)?(?-u:\b)|(?-u:\b)MULTI(?:Lang|Truefrench|\-VF2)?(?-u:\b)|(?-u:\b)SUBFRENCH(?-u:\b)|(?-u:\b)Hindi(?-u:\b)";
const REGION: &str = r"R[0-9]";
const DOKU: &str = r"(?i)(?-u:\b)DOKU(?-u:\b)";
const EXTENDED: &str = r"(?i)(?-u:\b)EXTENDED(?-u:\b)";
const UNCUT: &str = r"(?i)(?-u:\b)UNCUT(?-u:\b)";
const HARDCODED: &str = r"(?i)(?-u:\b)HC(?-u:\b)";
const PROPER: &str = r"(?i)(?-u:\b)PROPER(?-u:\b)";
const SUBBED: &str = r"(?i)subbed|ger[.-]?sub(s|ed)?|nlsub|eng-sub";
const REPACK: &str = r"(?i)(?-u:\b)REPACK(?-u:\b)";
const IS3D: &str = r"(?i)(?-u:\b)3d(?-u:\b)";
const WIDESCREEN: &str = r"(?i)(?-u:\b)WS(?-u:\b)";
const CONTAINER: &str = r"(?i)(?-u:\b)\.?(mkv|avi|mp4|m4v)(?-u:\b)";
const WEBSITE: &str = r"^(\[ ?([^\]]+?) ?\])";
const SBS: &str = r"(?i)(?-u:\b)(?:Half-)?SBS(?-u:\b)";
const SIZE: &str = r"([0-9]+(?:\.[0-9]+)?(?:GB|MB))";
const GROUP: &str = r"(?:- ?([^-]+))$";
const CONSOLE: &str = r"(?-u:\b)(XBOX|XBOX360|Wii|WiiU|PSP|PS4|NSW|PS3|NDS)(?-u:\b)";

const PASSWORD: &str = r"\{\{([^{}]+)\}\}";

/// An alternation whose branches carry canonical labels.
struct Composite {
    /// Inline flags applied to the whole pattern, e.g. `(?i)`.
    flags: &'static str,
    /// Assertion wrapped around the alternation, e.g. `(?-u:\b)`.
    boundary: &'static str,
    alternatives: &'static [(&'static str, &'static str)],
}

const RESOLUTION: Composite = Composite {
    flags: "",
    boundary: "",
    alternatives: &[
        ("480p", "480p|640x480|848x480"),
        ("576p", "576p"),
        ("720p", "720p|1280x720"),
        ("1080p", "1080p|1920x1080"),
        ("2160p", "2160p"),
    ],
};

const SOURCE: Composite = Composite {
    flags: "(?i)",
    boundary: r"(?-u:\b)",
    alternatives: &[
        ("BDRIP", "BDRip"),
        ("BRRIP", "BRRip"),
        ("BLURAY", "BluRay|Blu-Ray|HDDVD|BD"),
        (
            "WEBDL",
            r"WEB[-_. ]DL|HDRIP|WEBDL|FUNi-DL|WebRip|Web-Rip|AmazonHD|NetflixHD|iTunesHD|WebHD|[. ]?WEB[. ](?:[xh]26[45]|DD5[. ]1)|[0-9]+0p[. ]WEB[. ]",
        ),
        ("HDTV", "HDTV"),
        ("SCR", "SCR|SCREENER|DVDSCR|DVDSCREENER"),
        ("DVD", "DVDRip|DVD[^-R]|NTSC|PAL|xvidvd"),
        ("DVDR", "DVD-R|DVDR|DVD[0-9]"),
        ("DSR", "WS[-_. ]DSR|DSR"),
        ("TS", r"TS|TELESYNC|HD-TS|HDTS|PDVD(?-u:\b)"),
        ("TC", "TC|TELECINE|HD-TC|HDTC"),
        ("CAM", "CAMRIP|CAM|HDCAM|HD-CAM"),
        ("WP", "WORKPRINT|WP"),
        ("PDTV", "PDTV"),
        ("SDTV", "SDTV"),
        ("TVRIP", "(?:HD)?TVRip|[ad]TV"),
    ],
};

const CODEC: Composite = Composite {
    flags: "(?i)",
    boundary: "",
    alternatives: &[
        ("X264", "x264"),
        ("H264", "h264"),
        ("H265", "[xh]265|hevc"),
        ("XVIDHD", "XvidHD"),
        ("XVID", "X-?vid"),
        ("DIVX", "divx|mpeg[0-9]"),
        ("VP", "vp(?:8|9)"),
    ],
};

const AUDIO: Composite = Composite {
    flags: "(?i)",
    boundary: "",
    alternatives: &[
        ("MP3", "MP3"),
        ("FLAC", "FLAC"),
        ("DD", r"DD[\t\n\f\r .]?(?:2|5)\.?(?:1|0)"),
        ("DUALAUDIO", r"Dual[\- ]Audio"),
        ("LINE", "LiNE"),
        ("DTS", "DTS"),
        ("AAC", r"AAC(?:\.?2\.0)?"),
        ("AC3", r"AC3D?(?:\.5\.1)?"),
    ],
};

enum PatternDef {
    Plain(&'static str),
    Composite(&'static Composite),
}

/// A compiled catalog pattern.
///
/// Plain patterns carry no labels; composite patterns keep one anchored regex
/// per alternative, tried in declaration order to resolve a match's label.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    labels: Vec<(&'static str, Regex)>,
}

impl Pattern {
    /// Compiles a plain, unlabelled pattern.
    pub fn plain(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            labels: Vec::new(),
        })
    }

    fn composite(def: &Composite) -> Result<Self> {
        let alternation = def
            .alternatives
            .iter()
            .map(|(_, alt)| format!("(?:{alt})"))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(
            "{flags}{b}(?:{alternation}){b}",
            flags = def.flags,
            b = def.boundary,
        ))?;

        let labels = def
            .alternatives
            .iter()
            .map(|(label, alt)| Ok((*label, Regex::new(&format!("{}^(?:{alt})$", def.flags))?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { regex, labels })
    }

    fn compile(def: PatternDef) -> Result<Self> {
        match def {
            PatternDef::Plain(pattern) => Self::plain(pattern),
            PatternDef::Composite(composite) => Self::composite(composite),
        }
    }

    /// Leftmost match in `haystack`, if any.
    #[must_use]
    pub fn find<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        self.regex.find(haystack).map(|m| m.as_str())
    }

    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Removes every match from `haystack`.
    #[must_use]
    pub fn strip(&self, haystack: &str) -> String {
        self.regex.replace_all(haystack, "").into_owned()
    }

    /// Canonical label of the alternative that produced `matched`.
    ///
    /// Returns `None` for plain patterns or text no alternative spans fully.
    #[must_use]
    pub fn label(&self, matched: &str) -> Option<&'static str> {
        self.labels
            .iter()
            .find(|(_, alt)| alt.is_match(matched))
            .map(|(label, _)| *label)
    }
}

/// All compiled patterns, immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<Pattern>,
    password: Regex,
}

impl Catalog {
    /// Compiles every field pattern.
    ///
    /// # Errors
    ///
    /// Returns `RelparseError::Regex` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        let patterns = Field::ALL
            .iter()
            .map(|field| Pattern::compile(field.definition()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            password: Regex::new(PASSWORD)?,
        })
    }

    #[must_use]
    pub fn pattern(&self, field: Field) -> &Pattern {
        // `patterns` is built from `Field::ALL`, whose order matches the discriminants.
        &self.patterns[field as usize]
    }

    /// Splits a `{{password}}` token off the input.
    ///
    /// Returns the inner text of the first token and the input with every
    /// token removed, or `None` if the input holds no token.
    #[must_use]
    pub fn split_password(&self, input: &str) -> Option<(String, String)> {
        let caps = self.password.captures(input)?;
        let password = caps[1].to_string();
        Some((password, self.strip_password(input)))
    }

    /// Removes every `{{password}}` token from `text`.
    #[must_use]
    pub fn strip_password(&self, text: &str) -> String {
        self.password.replace_all(text, "").into_owned()
    }
}
