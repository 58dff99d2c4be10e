//! Live trade ticks into a Highcharts Stock chart.
//!
//! A host UI runtime drives [`presentation::StockChartHook`]; the chart logic
//! itself lives in [`application::ChartWidget`], which only talks to the
//! [`domain::chart::ChartFactory`] seam and runs without a browser.

use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod presentation;

pub use application::{ChartWidget, UpdateOutcome, WidgetConfig};
pub use presentation::StockChartHook;

/// Module start: panic hook and browser clock.
///
/// The console logger is installed by the first `StockChartHook`, which
/// knows the configured level.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().debug(LogComponent::Presentation("Initialize"), "stock chart hook module loaded");
}
