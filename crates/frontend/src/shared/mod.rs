pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod debug;
pub mod error_boundary;
pub mod http;
pub mod icons;
pub mod page_layout;
pub mod storage;
pub mod theme;
pub mod toast;
