use crate::types::ReleaseType;

/// Known non-scene publishing groups and the release type their names imply.
const DEFAULT_GROUP_TYPES: &[(&str, ReleaseType)] = &[
    ("CODEX", ReleaseType::Pc),
    ("DARKSiDERS", ReleaseType::Pc),
    ("PLAZA", ReleaseType::Pc),
    ("RAZOR", ReleaseType::Pc),
    ("SiMPLEX", ReleaseType::Pc),
    ("Razor1911", ReleaseType::Pc),
    ("HOODLUM", ReleaseType::Pc),
    ("SKIDROW", ReleaseType::Pc),
    ("ALiAS", ReleaseType::Pc),
];

/// Configuration for the release parser.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Exact (case-sensitive) group name to release type.
    group_types: Vec<(String, ReleaseType)>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            group_types: DEFAULT_GROUP_TYPES
                .iter()
                .map(|(name, kind)| ((*name).to_string(), *kind))
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with the default group table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map releases by `group` to `kind`, replacing any existing entry.
    pub fn with_group_type(mut self, group: impl Into<String>, kind: ReleaseType) -> Self {
        let group = group.into();
        match self.group_types.iter_mut().find(|(name, _)| *name == group) {
            Some(entry) => entry.1 = kind,
            None => self.group_types.push((group, kind)),
        }
        self
    }

    /// Release type implied by an exact group name, if the group is known.
    pub fn group_type(&self, group: &str) -> Option<ReleaseType> {
        self.group_types
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, kind)| *kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_case_sensitive() {
        let config = ParserConfig::default();
        assert_eq!(config.group_type("CODEX"), Some(ReleaseType::Pc));
        assert_eq!(config.group_type("Razor1911"), Some(ReleaseType::Pc));
        assert_eq!(config.group_type("codex"), None);
        assert_eq!(config.group_type("RARBG"), None);
    }

    #[test]
    fn with_group_type_adds_and_overrides() {
        let config = ParserConfig::new()
            .with_group_type("BigBlueBox", ReleaseType::Console)
            .with_group_type("PLAZA", ReleaseType::Console);
        assert_eq!(config.group_type("BigBlueBox"), Some(ReleaseType::Console));
        assert_eq!(config.group_type("PLAZA"), Some(ReleaseType::Console));
        assert_eq!(config.group_type("CODEX"), Some(ReleaseType::Pc));
    }
}
