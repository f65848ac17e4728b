pub mod message;
pub mod pagination;
