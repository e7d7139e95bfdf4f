//! Title boundary heuristic.
//!
//! Every matched field narrows the region of the input that holds the title:
//! a field at the very front pushes the start forward, any other field pulls
//! the end back to its position. The result is order-sensitive and may be
//! empty when matches overlap.

use crate::catalog::Catalog;
use crate::normalize::clean_title;

/// Byte offsets bounding the title within the original input. `0` means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleBoundary {
    start: usize,
    end: usize,
}

impl TitleBoundary {
    /// Accounts for one matched field.
    ///
    /// The match is located in `input` by its first occurrence, which may
    /// differ from where it was matched when a password token was removed.
    pub fn record(&mut self, input: &str, matched: &str) {
        match input.find(matched) {
            Some(index) if index > 0 => {
                if self.end == 0 || index < self.end {
                    self.end = index;
                }
            }
            // at the front, or not found at all
            _ => self.start = matched.len(),
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Cleaned title between the bounds, or an empty string when the bounds
    /// are unset, inverted, or do not fall on character boundaries.
    ///
    /// The bounds index the original input, so a `{{password}}` token in
    /// front of the title lands inside the region and is removed here.
    #[must_use]
    pub fn title(&self, input: &str, catalog: &Catalog) -> String {
        if self.end == 0 || self.end > input.len() || self.start >= self.end {
            return String::new();
        }
        input
            .get(self.start..self.end)
            .map(|region| clean_title(&catalog.strip_password(region)))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new().unwrap()
    }

    #[test]
    fn end_tracks_leftmost_match() {
        let input = "Winx.Club.S06E16.720p.WEB-DL.h264-pbw";
        let mut b = TitleBoundary::default();
        b.record(input, "720p");
        b.record(input, "S06E");
        b.record(input, "h264");
        assert_eq!(b.end(), 10);
        assert_eq!(b.start(), 0);
        assert_eq!(b.title(input, &catalog()), "Winx Club");
    }

    #[test]
    fn front_match_moves_start() {
        let input = "[ www.Speed.cd ] -Sons.of.Anarchy.S07E07.720p";
        let mut b = TitleBoundary::default();
        b.record(input, "[ www.Speed.cd ]");
        b.record(input, "S07E");
        assert_eq!(b.start(), 16);
        assert_eq!(b.title(input, &catalog()), "Sons of Anarchy");
    }

    #[test]
    fn missing_match_counts_as_front() {
        let input = "Movie.2015.x264";
        let mut b = TitleBoundary::default();
        b.record(input, "2015");
        b.record(input, "elsewhere");
        assert_eq!(b.start(), "elsewhere".len());
        assert_eq!(b.title(input, &catalog()), "");
    }

    #[test]
    fn password_token_is_cut_from_title() {
        let input = "{{secret}}Movie.2015.1080p";
        let mut b = TitleBoundary::default();
        b.record(input, "2015");
        b.record(input, "1080p");
        assert_eq!(b.start(), 0);
        assert_eq!(b.title(input, &catalog()), "Movie");
    }

    #[test]
    fn unset_end_gives_empty_title() {
        let b = TitleBoundary::default();
        assert_eq!(b.title("Anything", &catalog()), "");
    }

    #[test]
    fn non_char_boundary_gives_empty_title() {
        let input = "Amélie.2001.x264";
        let mut b = TitleBoundary::default();
        // "é" spans bytes 2..4; a 3-byte front match lands inside it
        b.record(input, "xyz");
        b.record(input, "2001");
        assert_eq!(b.start(), 3);
        assert_eq!(b.title(input, &catalog()), "");
    }
}
