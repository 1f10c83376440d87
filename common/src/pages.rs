//! Page navigation.
//!
//! Press `Y` to switch between the lemonade screen and the debug view.

/// Full-screen views of the application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Header, card and caption for the current stage.
    #[default]
    Lemonade,

    /// Current stage details, counters and the transition log.
    Debug,
}

impl Page {
    /// Switch to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Lemonade => Self::Debug,
            Self::Debug => Self::Lemonade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Lemonade);
    }

    #[test]
    fn test_page_toggle_round_trip() {
        assert_eq!(Page::Lemonade.toggle(), Page::Debug);
        assert_eq!(Page::Lemonade.toggle().toggle(), Page::Lemonade);
    }
}
