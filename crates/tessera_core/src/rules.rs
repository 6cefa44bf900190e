pub use tessera_data::{Cell, RuleSet};

/// Outcome of applying a rule set to one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Die,
    Born,
    Unchanged,
}

impl Transition {
    /// Signed change this transition makes to every neighbor's tally.
    #[inline]
    pub fn delta(self) -> i8 {
        match self {
            Transition::Die => -1,
            Transition::Born => 1,
            Transition::Unchanged => 0,
        }
    }

    #[inline]
    pub fn is_flip(self) -> bool {
        self != Transition::Unchanged
    }
}

pub trait RuleLogic {
    fn transition(&self, cell: &Cell) -> Transition;

    /// `transition` expressed as `-1`, `0` or `+1`.
    fn apply(&self, cell: &Cell) -> i8 {
        self.transition(cell).delta()
    }
}

impl RuleLogic for RuleSet {
    #[inline]
    fn transition(&self, cell: &Cell) -> Transition {
        if cell.alive {
            if cell.neighbors >= self.survive_upper || cell.neighbors <= self.survive_lower {
                return Transition::Die;
            }
        } else if cell.neighbors == self.birth {
            return Transition::Born;
        }
        Transition::Unchanged
    }
}
