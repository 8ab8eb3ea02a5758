//! Musical key utilities
//!
//! Key parsing and Camelot wheel conversion for the metadata shown in the
//! library browser and the grid-inspect tool.

/// Musical key with root note and scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicalKey {
    /// Root note as semitone offset from C (0=C, 1=C#, ..., 11=B)
    pub root: u8,
    /// true = minor, false = major
    pub minor: bool,
}

impl MusicalKey {
    /// Create a new musical key
    pub const fn new(root: u8, minor: bool) -> Self {
        Self {
            root: root % 12,
            minor,
        }
    }

    /// Parse key strings like "Am", "C#m", "F", "Bb"
    ///
    /// Accepts a single note letter, an optional `#`/`b` accidental, and an
    /// optional minor suffix (`m` or `min`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();

        let base = match chars.next()?.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let rest: String = chars.collect();
        let (root, suffix) = match rest.chars().next() {
            Some('#') => ((base + 1) % 12, &rest[1..]),
            Some('b') => ((base + 11) % 12, &rest[1..]),
            _ => (base, rest.as_str()),
        };

        let suffix = suffix.to_ascii_lowercase();
        let minor = suffix.starts_with('m');

        Some(Self { root, minor })
    }

    /// Camelot wheel position (1-12 plus A for minor, B for major)
    ///
    /// The number is the key's position on the circle of fifths as laid out
    /// on the Camelot wheel (Am/C = 8).
    pub fn camelot(&self) -> (u8, char) {
        // Indexed by semitone root (0=C .. 11=B)
        const MAJOR: [u8; 12] = [8, 3, 10, 5, 12, 7, 2, 9, 4, 11, 6, 1];
        const MINOR: [u8; 12] = [5, 12, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10];

        let table = if self.minor { &MINOR } else { &MAJOR };
        let letter = if self.minor { 'A' } else { 'B' };
        (table[self.root as usize], letter)
    }

    /// Note name with `m` suffix for minor keys
    pub fn name(&self) -> String {
        const NOTES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        let note = NOTES[self.root as usize];
        if self.minor {
            format!("{}m", note)
        } else {
            note.to_string()
        }
    }
}

impl std::fmt::Display for MusicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_accidentals() {
        assert_eq!(MusicalKey::parse("C"), Some(MusicalKey::new(0, false)));
        assert_eq!(MusicalKey::parse("C#"), Some(MusicalKey::new(1, false)));
        assert_eq!(MusicalKey::parse("Bb"), Some(MusicalKey::new(10, false)));
        assert_eq!(MusicalKey::parse("Am"), Some(MusicalKey::new(9, true)));
        assert_eq!(MusicalKey::parse("F#min"), Some(MusicalKey::new(6, true)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(MusicalKey::parse(""), None);
        assert_eq!(MusicalKey::parse("H"), None);
        assert_eq!(MusicalKey::parse("3A"), None);
    }

    #[test]
    fn test_camelot_anchor_points() {
        // Am and C share Camelot position 8
        assert_eq!(MusicalKey::parse("Am").unwrap().camelot(), (8, 'A'));
        assert_eq!(MusicalKey::parse("C").unwrap().camelot(), (8, 'B'));
        // One step up the wheel is a fifth away
        assert_eq!(MusicalKey::parse("G").unwrap().camelot(), (9, 'B'));
        assert_eq!(MusicalKey::parse("Em").unwrap().camelot(), (9, 'A'));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["C", "F#", "Am", "A#m"] {
            let key = MusicalKey::parse(s).unwrap();
            assert_eq!(key.to_string(), s);
        }
    }
}
