pub mod roster;

pub use roster::{roster, sorted_roster};
