//! Regular-expression values: source text, flag set and match cursor.
//!
//! The engine never executes patterns; it only compares their parts.

use alloc::rc::Rc;
use core::fmt;

use crate::error::ValueError;

/// Set of regular-expression flags.
///
/// Stored as a bitset, so `"gi"` and `"ig"` are the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegExpFlags(u8);

/// Flag characters in canonical order, paired with their bits.
const FLAG_TABLE: [(char, u8); 8] = [
    ('d', 1 << 0),
    ('g', 1 << 1),
    ('i', 1 << 2),
    ('m', 1 << 3),
    ('s', 1 << 4),
    ('u', 1 << 5),
    ('v', 1 << 6),
    ('y', 1 << 7),
];

impl RegExpFlags {
    /// `d`: record match indices.
    pub const HAS_INDICES: Self = Self(1 << 0);
    /// `g`: global search.
    pub const GLOBAL: Self = Self(1 << 1);
    /// `i`: case-insensitive.
    pub const IGNORE_CASE: Self = Self(1 << 2);
    /// `m`: multi-line anchors.
    pub const MULTILINE: Self = Self(1 << 3);
    /// `s`: `.` matches newlines.
    pub const DOT_ALL: Self = Self(1 << 4);
    /// `u`: Unicode mode.
    pub const UNICODE: Self = Self(1 << 5);
    /// `v`: Unicode sets mode.
    pub const UNICODE_SETS: Self = Self(1 << 6);
    /// `y`: sticky matching.
    pub const STICKY: Self = Self(1 << 7);

    /// Parse a flag string in any order.
    pub fn parse(flags: &str) -> Result<Self, ValueError> {
        let mut bits = 0u8;
        for c in flags.chars() {
            let Some(&(_, bit)) = FLAG_TABLE.iter().find(|(f, _)| *f == c) else {
                return Err(ValueError::InvalidRegExpFlag(c));
            };
            if bits & bit != 0 {
                return Err(ValueError::DuplicateRegExpFlag(c));
            }
            bits |= bit;
        }
        Ok(Self(bits))
    }

    /// `true` if every flag in `other` is set here.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl fmt::Display for RegExpFlags {
    /// Canonical `dgimsuvy` ordering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(c, bit) in FLAG_TABLE.iter() {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// A regular expression as seen by the comparator.
#[derive(Clone, Debug)]
pub struct RegExp {
    source: Rc<str>,
    flags: RegExpFlags,
    /// Position the next match starts from.
    pub last_index: usize,
}

impl RegExp {
    /// Build from pattern text and a flag string; `last_index` starts at 0.
    pub fn new(source: &str, flags: &str) -> Result<Self, ValueError> {
        Ok(Self {
            source: Rc::from(source),
            flags: RegExpFlags::parse(flags)?,
            last_index: 0,
        })
    }

    /// Same pattern with a different match cursor.
    pub fn with_last_index(mut self, last_index: usize) -> Self {
        self.last_index = last_index;
        self
    }

    /// Pattern text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flag set.
    pub fn flags(&self) -> RegExpFlags {
        self.flags
    }

    /// `g` flag.
    pub fn global(&self) -> bool {
        self.flags.contains(RegExpFlags::GLOBAL)
    }

    /// `i` flag.
    pub fn ignore_case(&self) -> bool {
        self.flags.contains(RegExpFlags::IGNORE_CASE)
    }

    /// `m` flag.
    pub fn multiline(&self) -> bool {
        self.flags.contains(RegExpFlags::MULTILINE)
    }

    /// `u` flag.
    pub fn unicode(&self) -> bool {
        self.flags.contains(RegExpFlags::UNICODE)
    }

    /// `y` flag.
    pub fn sticky(&self) -> bool {
        self.flags.contains(RegExpFlags::STICKY)
    }
}
