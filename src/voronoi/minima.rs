//! Running first/second nearest distances.

use glam::Vec4;

/// Per-lane pair of the two smallest candidate distances seen so far.
///
/// `first <= second` holds in every lane after every [`Minima::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minima {
    pub first: Vec4,
    pub second: Vec4,
}

impl Minima {
    /// Register state before any candidate has been folded in.
    pub const INITIAL: Minima = Minima {
        first: Vec4::splat(2.0),
        second: Vec4::splat(2.0),
    };

    /// Folds one candidate distance per lane into the sorted pair.
    ///
    /// A new smallest value demotes the old first to second; a value between
    /// the two replaces second. Lanes never look at each other.
    #[must_use]
    pub fn update(self, distance: Vec4) -> Self {
        let new_first = distance.cmplt(self.first);
        let new_second = distance.cmplt(self.second);
        Self {
            first: Vec4::select(new_first, distance, self.first),
            second: Vec4::select(
                new_first,
                self.first,
                Vec4::select(new_second, distance, self.second),
            ),
        }
    }

    /// Applies `f` to both slots.
    #[must_use]
    pub fn map(self, f: impl Fn(Vec4) -> Vec4) -> Self {
        Self {
            first: f(self.first),
            second: f(self.second),
        }
    }
}

impl Default for Minima {
    fn default() -> Self {
        Self::INITIAL
    }
}
