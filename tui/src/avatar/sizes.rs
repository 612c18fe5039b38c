//! Avatar Size Variants
//!
//! Badges use Unicode block elements (█ ▀ ▄) for a chunky round shape.
//! Terminal cells are roughly twice as tall as they are wide, so every
//! pattern is twice as wide as it is tall.
//!
//! # Pattern Keys
//!
//! - `a` / `A`: ring, top stop of the personality gradient (half / full block)
//! - `B`: ring, gradient midpoint
//! - `c` / `C`: ring, bottom stop of the gradient (half / full block)
//! - `g`: inner glow
//! - `o`: core highlight

/// Avatar size categories
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AvatarSize {
    /// 6x3 - next to chat bubbles
    Small,
    /// 10x5 - conversation header
    #[default]
    Medium,
    /// 14x7 - personality picker cards
    Large,
    /// 18x9 - dashboard hero
    Hero,
}

impl AvatarSize {
    /// Maximum bounds (width, height) for this size
    pub fn max_bounds(&self) -> (u16, u16) {
        match self {
            Self::Small => (6, 3),
            Self::Medium => (10, 5),
            Self::Large => (14, 7),
            Self::Hero => (18, 9),
        }
    }

    /// Badge pattern for this size
    pub fn pattern(&self) -> &'static [&'static str] {
        match self {
            Self::Small => SMALL,
            Self::Medium => MEDIUM,
            Self::Large => LARGE,
            Self::Hero => HERO,
        }
    }
}

const SMALL: &[&str] = &[
    " aaaa ",
    "BgoogB",
    " cccc ",
];

const MEDIUM: &[&str] = &[
    "  aaaaaa  ",
    " AggggggA ",
    "BggooooggB",
    " CggggggC ",
    "  cccccc  ",
];

const LARGE: &[&str] = &[
    "   aaaaaaaa   ",
    " aAAggggggAAa ",
    "BgggoooooogggB",
    "BggooooooooggB",
    "BgggoooooogggB",
    " cCCggggggCCc ",
    "   cccccccc   ",
];

const HERO: &[&str] = &[
    "    aaaaaaaaaa    ",
    "  aAAggggggggAAa  ",
    " AAggggggggggggAA ",
    "BBggggooooooggggBB",
    "BBgggoooooooogggBB",
    "BBggggooooooggggBB",
    " CCggggggggggggCC ",
    "  cCCggggggggCCc  ",
    "    cccccccccc    ",
];
