//! # Relparse Core
//!
//! Extracts structured metadata from scene release names: title, year,
//! season/episode, resolution, source, codec, audio, language, release group
//! and a set of flags, then classifies the release as movie, tv show,
//! console or pc release.
//!
//! ## Quick Start
//!
//! ```rust
//! use relparse_core::{ReleaseParser, ReleaseType};
//!
//! let parser = ReleaseParser::new().unwrap();
//! let release = parser.parse("Winx.Club.S06E16.Die.Zombie-Invasion.GERMAN.DUBBED.DL.720p.WEB-DL.h264-pbw");
//!
//! assert_eq!(release.title(), "Winx Club");
//! assert_eq!(release.release_type, ReleaseType::TvShow);
//! assert_eq!((release.season, release.episode), (6, 16));
//! assert_eq!(release.group, "pbw");
//! ```
pub mod catalog;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod types;

// Re-export primary API
pub use catalog::{Catalog, Field, Pattern};
pub use error::{RelparseError, Result};
pub use parser::{parse, ParserConfig, ReleaseParser};
pub use types::{Attribute, ReleaseRecord, ReleaseType};
