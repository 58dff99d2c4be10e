use crate::domain::errors::ValidationError;
use crate::domain::market_data::{ProductName, TradeTick};
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Things that happen to a widget's chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    ChartAttached { container_id: String, product: ProductName },
    TradeApplied { tick: TradeTick },
    TradeSkipped { reason: ValidationError },
}

impl DomainEvent for ChartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ChartEvent::ChartAttached { .. } => "ChartAttached",
            ChartEvent::TradeApplied { .. } => "TradeApplied",
            ChartEvent::TradeSkipped { .. } => "TradeSkipped",
        }
    }
}

/// Observability hook a host can inject into the widget
pub trait EventDispatcher {
    fn publish_chart_event(&self, event: ChartEvent);
}

/// Dispatcher that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpEventDispatcher;

impl EventDispatcher for NoOpEventDispatcher {
    fn publish_chart_event(&self, _event: ChartEvent) {}
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    chart_handlers: Vec<Box<dyn Fn(&ChartEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_chart_events<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.chart_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_chart_event(&self, event: ChartEvent) {
        for handler in &self.chart_handlers {
            handler(&event);
        }
    }
}
