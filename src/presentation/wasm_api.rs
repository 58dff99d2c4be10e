use js_sys::JSON;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::attributes::{attributes_from_dataset, attributes_from_object};
use crate::application::{ChartWidget, UpdateOutcome, WidgetConfig};
use crate::domain::{
    errors::AppError,
    logging::{LogComponent, init_logger},
    market_data::HookAttributes,
};
use crate::infrastructure::{ConsoleLogger, HighchartsFactory};
use crate::log_error;

const COMPONENT: LogComponent = LogComponent::Presentation("StockChartHook");

fn to_js(err: AppError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Stock chart hook for a host UI runtime.
///
/// The host keeps one instance per bound element and forwards its
/// lifecycle: `mounted(el)` once, `updated(el)` after every patch.
#[wasm_bindgen]
pub struct StockChartHook {
    widget: ChartWidget<HighchartsFactory>,
}

#[wasm_bindgen]
impl StockChartHook {
    /// Hook drawing into `containerId` (defaults to `stockchart-container`).
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: Option<String>) -> Result<StockChartHook, JsValue> {
        let config = match container_id {
            Some(id) => WidgetConfig::with_container(id),
            None => WidgetConfig::default(),
        };
        Self::from_config(config)
    }

    /// Hook built from a `{ containerId, priceDecimals, malformedFields, logLevel }` object.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<StockChartHook, JsValue> {
        if config.is_undefined() || config.is_null() {
            return Self::from_config(WidgetConfig::default());
        }
        let json: String = JSON::stringify(&config)?.into();
        let config = WidgetConfig::from_json(&json).map_err(to_js)?;
        Self::from_config(config)
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.widget.is_attached()
    }

    pub fn mounted(&mut self, element: &HtmlElement) -> Result<(), JsValue> {
        self.attach(attributes_from_dataset(&element.dataset()))
    }

    /// Returns `true` when a trade point was appended.
    pub fn updated(&mut self, element: &HtmlElement) -> Result<bool, JsValue> {
        self.update(attributes_from_dataset(&element.dataset()))
    }

    #[wasm_bindgen(js_name = mountedWith)]
    pub fn mounted_with(&mut self, attributes: JsValue) -> Result<(), JsValue> {
        self.attach(attributes_from_object(&attributes).map_err(to_js)?)
    }

    #[wasm_bindgen(js_name = updatedWith)]
    pub fn updated_with(&mut self, attributes: JsValue) -> Result<bool, JsValue> {
        self.update(attributes_from_object(&attributes).map_err(to_js)?)
    }
}

impl StockChartHook {
    fn from_config(config: WidgetConfig) -> Result<StockChartHook, JsValue> {
        config.validate().map_err(to_js)?;
        // First hook on the page decides the console level.
        init_logger(Box::new(ConsoleLogger::new(config.log_level)));
        Ok(Self { widget: ChartWidget::new(HighchartsFactory::new(), config) })
    }

    fn attach(&mut self, attributes: HookAttributes) -> Result<(), JsValue> {
        self.widget.on_attach(&attributes).map_err(|err| {
            log_error!(COMPONENT, "mount failed: {}", err);
            to_js(err)
        })
    }

    fn update(&mut self, attributes: HookAttributes) -> Result<bool, JsValue> {
        match self.widget.on_data_changed(&attributes) {
            Ok(UpdateOutcome::Applied(_)) => Ok(true),
            Ok(UpdateOutcome::NoTrade | UpdateOutcome::Rejected(_)) => Ok(false),
            Err(err) => {
                log_error!(COMPONENT, "update failed: {}", err);
                Err(to_js(err))
            }
        }
    }
}
