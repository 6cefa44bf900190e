pub mod data;

pub use data::board::BoardSpec;
pub use data::cell::Cell;
pub use data::rules::RuleSet;
