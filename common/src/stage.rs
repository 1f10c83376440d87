//! The lemonade-making cycle.
//!
//! A [`Stage`] is one of four points in the cycle. Each stage carries a fixed
//! triple of attributes (picture, content description, instructions) looked up
//! from a compile-time table. [`StageMachine`] owns the current stage and
//! advances it on every activate event:
//!
//! ```text
//! Tree -> Lemon -> Lemonade -> Glass -> Tree -> ...
//! ```

use crate::strings::StringId;

/// Opaque handle to one of the pictures drawn by [`crate::widgets::draw_picture`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Picture {
    LemonTree,
    LemonSqueeze,
    LemonDrink,
    LemonRestart,
}

/// Immutable attributes shown for a stage.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StageAttributes {
    pub image: Picture,
    pub description: StringId,
    pub instructions: StringId,
}

/// Indexed by `Stage as usize`.
const ATTRIBUTES: [StageAttributes; Stage::COUNT] = [
    StageAttributes {
        image: Picture::LemonTree,
        description: StringId::CdLemonTree,
        instructions: StringId::Instructions1,
    },
    StageAttributes {
        image: Picture::LemonSqueeze,
        description: StringId::CdLemon,
        instructions: StringId::Instructions2,
    },
    StageAttributes {
        image: Picture::LemonDrink,
        description: StringId::CdGlassOfLemonade,
        instructions: StringId::Instructions3,
    },
    StageAttributes {
        image: Picture::LemonRestart,
        description: StringId::CdEmptyGlass,
        instructions: StringId::Instructions4,
    },
];

/// A point in the lemonade-making cycle.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Stage {
    /// Lemon tree, waiting for a lemon to be picked.
    #[default]
    Tree = 0,
    /// Picked lemon, waiting to be squeezed.
    Lemon = 1,
    /// Full glass of lemonade.
    Lemonade = 2,
    /// Empty glass, tap to start over.
    Glass = 3,
}

impl Stage {
    /// Number of stages in the cycle.
    pub const COUNT: usize = 4;

    /// All stages in cycle order, starting from the initial one.
    pub const ALL: [Self; Self::COUNT] = [Self::Tree, Self::Lemon, Self::Lemonade, Self::Glass];

    /// Successor in the cycle. Total over all four stages.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Tree => Self::Lemon,
            Self::Lemon => Self::Lemonade,
            Self::Lemonade => Self::Glass,
            Self::Glass => Self::Tree,
        }
    }

    #[inline]
    pub const fn attributes(self) -> StageAttributes { ATTRIBUTES[self as usize] }

    #[inline]
    pub const fn image(self) -> Picture { self.attributes().image }

    #[inline]
    pub const fn description(self) -> StringId { self.attributes().description }

    #[inline]
    pub const fn instructions(self) -> StringId { self.attributes().instructions }

    /// Short label for logs and the debug page.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tree => "Tree",
            Self::Lemon => "Lemon",
            Self::Lemonade => "Lemonade",
            Self::Glass => "Glass",
        }
    }
}

/// Holds the current stage. Starts at [`Stage::Tree`].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct StageMachine {
    current: Stage,
}

impl StageMachine {
    pub const fn new() -> Self { Self { current: Stage::Tree } }

    #[inline]
    pub const fn current(&self) -> Stage { self.current }

    /// Advance to the next stage and return it.
    pub fn activate(&mut self) -> Stage {
        self.current = self.current.next();
        self.current
    }
}
