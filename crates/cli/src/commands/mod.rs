pub mod quirks;
pub mod rule;
