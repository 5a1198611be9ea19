//! Pages and Navigation Directions
//!
//! The portfolio has exactly three logical pages arranged in a ring:
//!
//! ```text
//!        advance            advance            advance
//!  hero ─────────▶ projects ─────────▶ contact ─────────▶ hero
//!       ◀─────────          ◀─────────         ◀─────────
//!        retreat            retreat            retreat
//! ```
//!
//! Everything here is pure; the controller that owns "which page is current"
//! lives in [`crate::navigation`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three logical pages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// Introduction page
    #[default]
    Hero,
    /// Project showcase
    Projects,
    /// Contact form
    Contact,
}

/// Direction of travel around the page ring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavDirection {
    /// hero → projects → contact → hero
    Advance,
    /// hero → contact → projects → hero
    Retreat,
}

impl NavDirection {
    /// The opposite direction
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Advance => Self::Retreat,
            Self::Retreat => Self::Advance,
        }
    }

    /// Signed unit step (+1 for advance, -1 for retreat)
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Advance => 1,
            Self::Retreat => -1,
        }
    }
}

/// Error returned when a stored page name cannot be parsed
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0:?}")]
pub struct UnknownPage(pub String);

impl PageId {
    /// All pages in ring order
    pub const ALL: [PageId; 3] = [PageId::Hero, PageId::Projects, PageId::Contact];

    /// Number of pages in the ring
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the ring (hero = 0)
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Projects => 1,
            Self::Contact => 2,
        }
    }

    /// Page at a ring position (wraps)
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The page reached by stepping once in `direction`
    #[must_use]
    pub fn successor(self, direction: NavDirection) -> Self {
        match direction {
            NavDirection::Advance => Self::from_index(self.index() + 1),
            NavDirection::Retreat => Self::from_index(self.index() + Self::COUNT - 1),
        }
    }

    /// Next page in the advance direction
    #[must_use]
    pub fn next(self) -> Self {
        self.successor(NavDirection::Advance)
    }

    /// Next page in the retreat direction
    #[must_use]
    pub fn prev(self) -> Self {
        self.successor(NavDirection::Retreat)
    }

    /// Number of steps from `self` to `target` going in `direction`
    #[must_use]
    pub fn distance_to(self, target: Self, direction: NavDirection) -> usize {
        let from = self.index();
        let to = target.index();
        match direction {
            NavDirection::Advance => (to + Self::COUNT - from) % Self::COUNT,
            NavDirection::Retreat => (from + Self::COUNT - to) % Self::COUNT,
        }
    }

    /// Direction of the shorter path to `target`
    ///
    /// Ties break toward [`NavDirection::Advance`]. Returns `None` when
    /// `target` is this page.
    #[must_use]
    pub fn shortest_direction_to(self, target: Self) -> Option<NavDirection> {
        if self == target {
            return None;
        }
        let forward = self.distance_to(target, NavDirection::Advance);
        let backward = self.distance_to(target, NavDirection::Retreat);
        if forward <= backward {
            Some(NavDirection::Advance)
        } else {
            Some(NavDirection::Retreat)
        }
    }

    /// Stored/wire name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Human-readable title for navigation hints
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hero" => Ok(Self::Hero),
            "projects" => Ok(Self::Projects),
            "contact" => Ok(Self::Contact),
            other => Err(UnknownPage(other.to_string())),
        }
    }
}
