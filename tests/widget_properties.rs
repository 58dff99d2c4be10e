use std::collections::HashMap;

use quickcheck_macros::quickcheck;
use stock_chart_hook::application::{ChartWidget, UpdateOutcome, WidgetConfig};
use stock_chart_hook::domain::chart::SeriesSlot;
use stock_chart_hook::domain::market_data::HookAttributes;
use stock_chart_hook::infrastructure::InMemoryChartFactory;

fn attached() -> (ChartWidget<InMemoryChartFactory>, InMemoryChartFactory) {
    let factory = InMemoryChartFactory::new();
    let mut widget = ChartWidget::new(factory.clone(), WidgetConfig::default());
    widget.on_attach(&HookAttributes::new().with("productName", "BTCUSD")).unwrap();
    (widget, factory)
}

fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[quickcheck]
fn bag_without_timestamp_never_mutates(extra: HashMap<String, String>, updates: u8) -> bool {
    let (mut widget, factory) = attached();
    let attrs: HookAttributes =
        extra.into_iter().filter(|(key, _)| key != "tradeTimestamp").collect();

    let all_skipped = (0..updates % 8)
        .all(|_| widget.on_data_changed(&attrs) == Ok(UpdateOutcome::NoTrade));

    let chart = factory.last_chart().unwrap();
    all_skipped
        && chart.points(SeriesSlot::Price).is_empty()
        && chart.points(SeriesSlot::Volume).is_empty()
}

#[quickcheck]
fn every_valid_tick_lands_once_in_each_series(ticks: Vec<(i64, f64, f64)>) -> bool {
    let (mut widget, factory) = attached();
    let ticks: Vec<(i64, f64, f64)> =
        ticks.into_iter().map(|(ts, p, v)| (ts, finite(p), finite(v))).collect();

    for (ts, price, volume) in &ticks {
        let attrs = HookAttributes::new()
            .with("tradeTimestamp", ts.to_string())
            .with("tradePrice", price.to_string())
            .with("tradeVolume", volume.to_string());
        if !widget.on_data_changed(&attrs).is_ok_and(|o| o.is_applied()) {
            return false;
        }
    }

    let chart = factory.last_chart().unwrap();
    let expected_price: Vec<(i64, f64)> = ticks.iter().map(|(ts, p, _)| (*ts, *p)).collect();
    let expected_volume: Vec<(i64, f64)> = ticks.iter().map(|(ts, _, v)| (*ts, *v)).collect();
    chart.pairs(SeriesSlot::Price) == expected_price
        && chart.pairs(SeriesSlot::Volume) == expected_volume
}
