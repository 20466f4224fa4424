//! Small reusable widgets shared across pages.

mod app_version;

pub use app_version::app_version;
