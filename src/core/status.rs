//! Per-letter feedback classification

use std::fmt;

/// Feedback for a single guessed letter
///
/// Variants are declared worst to best, so the derived ordering is the
/// ranking used when merging feedback: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter has no uncredited occurrence left in the target (gray)
    Absent,
    /// Letter is in the target at a different, not-yet-credited position (yellow)
    Present,
    /// Letter matches the target at this position (green)
    Correct,
}

impl LetterStatus {
    /// All statuses, worst to best
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Check whether this status ranks strictly above `other`
    #[inline]
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        self > other
    }

    /// Single-character symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Colored square emoji for sharing a result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(label)
    }
}
