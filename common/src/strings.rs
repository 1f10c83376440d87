//! String resources.
//!
//! Every user-visible string goes through a [`StringId`] handle so stages can
//! refer to text without owning it.

/// Handle to a static string resource.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StringId {
    AppName,
    CdLemonTree,
    CdLemon,
    CdGlassOfLemonade,
    CdEmptyGlass,
    Instructions1,
    Instructions2,
    Instructions3,
    Instructions4,
}

impl StringId {
    /// Resolve the handle to its text.
    pub const fn text(self) -> &'static str {
        match self {
            Self::AppName => "Lemonade",
            Self::CdLemonTree => "Lemon tree",
            Self::CdLemon => "Lemon",
            Self::CdGlassOfLemonade => "Glass of lemonade",
            Self::CdEmptyGlass => "Empty glass",
            Self::Instructions1 => "Tap the lemon tree to select a lemon",
            Self::Instructions2 => "Keep tapping the lemon to squeeze it",
            Self::Instructions3 => "Tap the lemonade to drink it",
            Self::Instructions4 => "Tap the empty glass to start again",
        }
    }
}
