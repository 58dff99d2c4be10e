pub mod highcharts;
pub mod memory_chart;
pub mod services;

pub use highcharts::{HighchartsChart, HighchartsFactory};
pub use memory_chart::{InMemoryChart, InMemoryChartFactory};
pub use services::{BrowserTimeProvider, ConsoleLogger};
