use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelparseError;

/// Classification assigned to every parsed release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// Feature film (the fallback classification).
    #[default]
    Movie,
    /// Episodic release: at least a season or a plausible episode number.
    TvShow,
    /// Game for a console platform (XBOX, PS3, Wii, ...).
    Console,
    /// PC game or software from a known publishing group.
    Pc,
}

impl ReleaseType {
    /// Lower-case name as used in JSON output and name templates.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::TvShow => "tvshow",
            Self::Console => "console",
            Self::Pc => "pc",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = RelparseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" => Ok(Self::Movie),
            "tvshow" => Ok(Self::TvShow),
            "console" => Ok(Self::Console),
            "pc" => Ok(Self::Pc),
            _ => Err(RelparseError::UnknownReleaseType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serialized_name() {
        for kind in [
            ReleaseType::Movie,
            ReleaseType::TvShow,
            ReleaseType::Console,
            ReleaseType::Pc,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("TVShow".parse::<ReleaseType>().unwrap(), ReleaseType::TvShow);
        assert_eq!("pc".parse::<ReleaseType>().unwrap(), ReleaseType::Pc);
        assert!(matches!(
            "anime".parse::<ReleaseType>(),
            Err(RelparseError::UnknownReleaseType(_))
        ));
    }

    #[test]
    fn default_is_movie() {
        assert_eq!(ReleaseType::default(), ReleaseType::Movie);
    }
}
