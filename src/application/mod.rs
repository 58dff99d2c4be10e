pub mod chart_widget;
pub mod config;

pub use chart_widget::*;
pub use config::*;
