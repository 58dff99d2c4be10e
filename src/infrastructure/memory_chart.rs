//! Headless chart backend that records what it is asked to draw.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{
    chart::{ChartFactory, ChartOptions, DataPoint, SeriesSlot, StockChart},
    errors::{ChartError, ChartResult},
};

#[derive(Debug)]
struct RecordedChart {
    container_id: String,
    options: ChartOptions,
    series: Vec<Vec<DataPoint>>,
}

/// Shared handle; clones observe the same chart
#[derive(Debug, Clone)]
pub struct InMemoryChart(Rc<RefCell<RecordedChart>>);

impl InMemoryChart {
    pub fn container_id(&self) -> String {
        self.0.borrow().container_id.clone()
    }

    pub fn options(&self) -> ChartOptions {
        self.0.borrow().options.clone()
    }

    pub fn points(&self, slot: SeriesSlot) -> Vec<DataPoint> {
        self.0.borrow().series.get(slot.index()).cloned().unwrap_or_default()
    }

    /// Points as plain `(x, y)` pairs, convenient for assertions.
    pub fn pairs(&self, slot: SeriesSlot) -> Vec<(i64, f64)> {
        self.points(slot).iter().map(|p| (p.x.value(), p.y)).collect()
    }
}

impl StockChart for InMemoryChart {
    fn add_point(&mut self, slot: SeriesSlot, point: DataPoint) -> ChartResult<()> {
        let mut chart = self.0.borrow_mut();
        let series = chart
            .series
            .get_mut(slot.index())
            .ok_or(ChartError::UnknownSeries(slot.index()))?;
        series.push(point);
        Ok(())
    }

    fn series_len(&self, slot: SeriesSlot) -> Option<usize> {
        self.0.borrow().series.get(slot.index()).map(Vec::len)
    }
}

/// Factory handing out [`InMemoryChart`]s and remembering each of them
#[derive(Debug, Default, Clone)]
pub struct InMemoryChartFactory {
    created: Rc<RefCell<Vec<InMemoryChart>>>,
    failure: Option<ChartError>,
}

impl InMemoryChartFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose every `create` fails with `error`.
    pub fn failing(error: ChartError) -> Self {
        Self { failure: Some(error), ..Self::default() }
    }

    pub fn created(&self) -> Vec<InMemoryChart> {
        self.created.borrow().clone()
    }

    pub fn last_chart(&self) -> Option<InMemoryChart> {
        self.created.borrow().last().cloned()
    }
}

impl ChartFactory for InMemoryChartFactory {
    type Chart = InMemoryChart;

    fn create(&self, container_id: &str, options: &ChartOptions) -> ChartResult<InMemoryChart> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let chart = InMemoryChart(Rc::new(RefCell::new(RecordedChart {
            container_id: container_id.to_string(),
            options: options.clone(),
            series: options.series.iter().map(|s| s.data.clone()).collect(),
        })));
        self.created.borrow_mut().push(chart.clone());
        Ok(chart)
    }
}
