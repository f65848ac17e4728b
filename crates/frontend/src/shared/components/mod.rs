pub mod nfo_viewer;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;

pub use nfo_viewer::{decode_nfo, NfoViewer};
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
