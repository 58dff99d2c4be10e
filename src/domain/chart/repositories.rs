use super::entities::{ChartOptions, SeriesSlot};
use super::value_objects::DataPoint;
use crate::domain::errors::ChartResult;

/// A live chart instance the widget appends to
pub trait StockChart {
    /// Append one point to the end of a series; the backend redraws on its own.
    fn add_point(&mut self, slot: SeriesSlot, point: DataPoint) -> ChartResult<()>;

    /// Points currently held by a series, when the backend can tell.
    fn series_len(&self, slot: SeriesSlot) -> Option<usize>;
}

/// Builds chart instances inside a host container
pub trait ChartFactory {
    type Chart: StockChart;

    fn create(&self, container_id: &str, options: &ChartOptions) -> ChartResult<Self::Chart>;
}
