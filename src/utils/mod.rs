pub mod app_time;
pub mod format;
pub mod periodic;

pub use periodic::Periodic;
