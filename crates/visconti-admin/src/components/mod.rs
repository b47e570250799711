//! Reusable UI components

pub mod loading;
pub mod notice;
pub mod pagination;
pub mod shell;

pub use loading::Loading;
pub use notice::NoticeBanner;
pub use pagination::Pagination;
pub use shell::AdminLayout;
