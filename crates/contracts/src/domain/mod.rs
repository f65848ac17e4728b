pub mod release;
pub mod rule;
