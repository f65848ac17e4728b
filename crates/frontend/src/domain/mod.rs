pub mod releases;
pub mod rules;
