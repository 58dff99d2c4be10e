//! Highcharts Stock backend.
//!
//! Expects the page to have loaded `highcharts/highstock` so that
//! `window.Highcharts.stockChart` exists.

use js_sys::{Array, JSON};
use wasm_bindgen::{JsCast, prelude::*};

use crate::domain::{
    chart::{ChartFactory, ChartOptions, DataPoint, SeriesSlot, StockChart},
    errors::{ChartError, ChartResult},
    logging::LogComponent,
};
use crate::{log_debug, log_error};

const COMPONENT: LogComponent = LogComponent::Infrastructure("Highcharts");

#[wasm_bindgen]
extern "C" {
    type JsStockChart;

    #[wasm_bindgen(catch, js_namespace = Highcharts, js_name = stockChart)]
    fn stock_chart(container_id: &str, options: &JsValue) -> Result<JsStockChart, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn series(this: &JsStockChart) -> Array;

    type JsSeries;

    #[wasm_bindgen(catch, method, js_name = addPoint)]
    fn add_point(this: &JsSeries, point: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter, js_name = xData)]
    fn x_data(this: &JsSeries) -> Option<Array>;
}

fn js_error(err: JsValue) -> ChartError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ChartError::Backend(message)
}

/// Creates charts with `Highcharts.stockChart`
#[derive(Debug, Default, Clone, Copy)]
pub struct HighchartsFactory;

impl HighchartsFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ChartFactory for HighchartsFactory {
    type Chart = HighchartsChart;

    fn create(&self, container_id: &str, options: &ChartOptions) -> ChartResult<HighchartsChart> {
        if gloo::utils::document().get_element_by_id(container_id).is_none() {
            log_error!(COMPONENT, "container #{} is not in the document", container_id);
            return Err(ChartError::ContainerNotFound(container_id.to_string()));
        }

        let json = options.to_json().map_err(|e| ChartError::Backend(e.to_string()))?;
        let js_options = JSON::parse(&json).map_err(js_error)?;
        let inner = stock_chart(container_id, &js_options).map_err(js_error)?;

        log_debug!(COMPONENT, "stock chart created in #{}", container_id);
        Ok(HighchartsChart { inner })
    }
}

/// A chart living in the page
pub struct HighchartsChart {
    inner: JsStockChart,
}

impl HighchartsChart {
    fn series_handle(&self, slot: SeriesSlot) -> ChartResult<JsSeries> {
        let value = self.inner.series().get(slot.index() as u32);
        if value.is_undefined() {
            return Err(ChartError::UnknownSeries(slot.index()));
        }
        Ok(value.unchecked_into())
    }
}

impl StockChart for HighchartsChart {
    fn add_point(&mut self, slot: SeriesSlot, point: DataPoint) -> ChartResult<()> {
        // Built by hand: JSON would turn a NaN y into null.
        let pair = Array::of2(&JsValue::from_f64(point.x.as_f64()), &JsValue::from_f64(point.y));
        self.series_handle(slot)?.add_point(&pair).map_err(js_error)
    }

    fn series_len(&self, slot: SeriesSlot) -> Option<usize> {
        let series = self.series_handle(slot).ok()?;
        series.x_data().map(|data| data.length() as usize)
    }
}
