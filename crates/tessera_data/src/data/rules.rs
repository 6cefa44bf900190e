use serde::{Deserialize, Serialize};

/// Two survival thresholds plus a birth count.
///
/// A live cell dies when its neighbor count is `<= survive_lower` or
/// `>= survive_upper`. A dead cell is born when the count equals `birth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub survive_lower: u8,
    pub survive_upper: u8,
    pub birth: u8,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            survive_lower: 1,
            survive_upper: 4,
            birth: 3,
        }
    }
}

impl RuleSet {
    #[must_use]
    pub fn new(survive_lower: u8, survive_upper: u8, birth: u8) -> Self {
        Self {
            survive_lower,
            survive_upper,
            birth,
        }
    }
}
