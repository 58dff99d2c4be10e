use strum::IntoEnumIterator;

use super::config::WidgetConfig;
use crate::domain::{
    chart::{ChartFactory, ChartOptions, SeriesSlot, StockChart},
    errors::{AppError, AppResult, ValidationError},
    events::{ChartEvent, EventDispatcher, NoOpEventDispatcher},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{HookAttributes, TradeTick},
};
use crate::{log_debug, log_trace, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("ChartWidget");

/// Result of one update notification
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The bag carried no trade timestamp
    NoTrade,
    /// Both series received a point
    Applied(TradeTick),
    /// A field did not parse and the configured policy dropped the tick
    Rejected(ValidationError),
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, UpdateOutcome::Applied(_))
    }
}

enum WidgetState<C> {
    Unattached,
    Attached(C),
}

/// Bridges a host's attribute bag to a two-series stock chart.
///
/// The host calls [`on_attach`](Self::on_attach) once when the bound element
/// appears and [`on_data_changed`](Self::on_data_changed) whenever its
/// attributes change. Once attached a widget stays attached.
pub struct ChartWidget<F: ChartFactory, D: EventDispatcher = NoOpEventDispatcher> {
    factory: F,
    config: WidgetConfig,
    dispatcher: D,
    state: WidgetState<F::Chart>,
}

impl<F: ChartFactory> ChartWidget<F> {
    pub fn new(factory: F, config: WidgetConfig) -> Self {
        Self { factory, config, dispatcher: NoOpEventDispatcher, state: WidgetState::Unattached }
    }
}

impl<F: ChartFactory, D: EventDispatcher> ChartWidget<F, D> {
    /// Swap the event sink.
    pub fn with_dispatcher<E: EventDispatcher>(self, dispatcher: E) -> ChartWidget<F, E> {
        ChartWidget { factory: self.factory, config: self.config, dispatcher, state: self.state }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, WidgetState::Attached(_))
    }

    pub fn chart(&self) -> Option<&F::Chart> {
        match &self.state {
            WidgetState::Attached(chart) => Some(chart),
            WidgetState::Unattached => None,
        }
    }

    /// Build the chart: a price line named after the product over a volume column pane.
    pub fn on_attach(&mut self, attributes: &HookAttributes) -> AppResult<()> {
        get_logger().log_with_metadata(
            LogLevel::Debug,
            COMPONENT,
            "attach requested",
            &attributes.to_json(),
        );

        if self.is_attached() {
            log_warn!(COMPONENT, "attach ignored: chart already exists in #{}", self.config.container_id);
            return Err(AppError::AlreadyAttached);
        }

        let product = attributes.product_name()?;
        let options = ChartOptions::stock_with_volume(&product, self.config.price_decimals);
        let chart = self.factory.create(&self.config.container_id, &options)?;
        self.state = WidgetState::Attached(chart);

        log_debug!(COMPONENT, "chart for {} attached to #{}", product, self.config.container_id);
        self.dispatcher.publish_chart_event(ChartEvent::ChartAttached {
            container_id: self.config.container_id.clone(),
            product,
        });
        Ok(())
    }

    /// Append the bag's trade, if any, to both series: price first, then volume.
    pub fn on_data_changed(&mut self, attributes: &HookAttributes) -> AppResult<UpdateOutcome> {
        let WidgetState::Attached(chart) = &mut self.state else {
            return Err(AppError::NotAttached);
        };

        let tick = match TradeTick::from_attributes(attributes, self.config.malformed_fields) {
            Ok(Some(tick)) => tick,
            Ok(None) => {
                log_trace!(COMPONENT, "update without trade timestamp");
                return Ok(UpdateOutcome::NoTrade);
            }
            Err(reason) => {
                log_warn!(COMPONENT, "trade dropped: {}", reason);
                self.dispatcher
                    .publish_chart_event(ChartEvent::TradeSkipped { reason: reason.clone() });
                return Ok(UpdateOutcome::Rejected(reason));
            }
        };

        if !tick.is_fully_numeric() {
            log_warn!(COMPONENT, "appending non-numeric trade at {}", tick.timestamp);
        }

        for slot in SeriesSlot::iter() {
            chart.add_point(slot, slot.point_for(&tick))?;
        }

        self.dispatcher.publish_chart_event(ChartEvent::TradeApplied { tick });
        Ok(UpdateOutcome::Applied(tick))
    }
}
