use serde::Serialize;
use strum::EnumIter;

use super::value_objects::{
    AxisLabels, DataPoint, LabelAlign, Percent, SeriesKind, SeriesTooltip, Title, Toggle,
};
use crate::domain::market_data::{ProductName, TradeTick};

pub const VOLUME_SERIES_NAME: &str = "Volume";
pub const DEFAULT_PRICE_DECIMALS: u8 = 2;

/// The two series the widget owns, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SeriesSlot {
    Price,
    Volume,
}

impl SeriesSlot {
    pub fn index(self) -> usize {
        match self {
            SeriesSlot::Price => 0,
            SeriesSlot::Volume => 1,
        }
    }

    /// The point this slot receives for a tick.
    pub fn point_for(self, tick: &TradeTick) -> DataPoint {
        match self {
            SeriesSlot::Price => DataPoint::new(tick.timestamp, tick.price.value()),
            SeriesSlot::Volume => DataPoint::new(tick.timestamp, tick.volume.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub name: String,
    pub data: Vec<DataPoint>,
    pub y_axis: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<SeriesTooltip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub title: Title,
    pub labels: AxisLabels,
    pub top: Percent,
    pub height: Percent,
    pub line_width: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize: Option<Toggle>,
}

impl AxisOptions {
    /// Right-aligned labels pulled 3px left of the axis, 2px axis line
    fn stacked(title: &str, top: u8, height: u8) -> Self {
        Self {
            title: Title::new(title),
            labels: AxisLabels { align: LabelAlign::Right, x: -3 },
            top: Percent::new(top),
            height: Percent::new(height),
            line_width: 2,
            offset: None,
            resize: None,
        }
    }
}

/// Full description of the chart handed to a backend at construction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: Title,
    pub series: Vec<SeriesOptions>,
    pub y_axis: Vec<AxisOptions>,
}

impl ChartOptions {
    /// Price line over a volume column pane.
    ///
    /// The price axis takes the top 60% of the plot, the volume axis the
    /// bottom 35%, leaving a 5% gap between them.
    pub fn stock_with_volume(product: &ProductName, price_decimals: u8) -> Self {
        let price_axis = AxisOptions {
            resize: Some(Toggle { enabled: true }),
            ..AxisOptions::stacked("Price", 0, 60)
        };
        let volume_axis = AxisOptions { offset: Some(0), ..AxisOptions::stacked("Volume", 65, 35) };

        Self {
            title: Title::new(product.value()),
            series: vec![
                SeriesOptions {
                    kind: SeriesKind::Line,
                    name: product.value().to_string(),
                    data: Vec::new(),
                    y_axis: 0,
                    tooltip: Some(SeriesTooltip { value_decimals: price_decimals }),
                },
                SeriesOptions {
                    kind: SeriesKind::Column,
                    name: VOLUME_SERIES_NAME.to_string(),
                    data: Vec::new(),
                    y_axis: 1,
                    tooltip: None,
                },
            ],
            y_axis: vec![price_axis, volume_axis],
        }
    }

    pub fn series(&self, slot: SeriesSlot) -> Option<&SeriesOptions> {
        self.series.get(slot.index())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{Price, Timestamp, Volume};

    #[test]
    fn axes_leave_gap_between_panes() {
        let product = ProductName::new("BTCUSD").unwrap();
        let options = ChartOptions::stock_with_volume(&product, DEFAULT_PRICE_DECIMALS);
        let (price, volume) = (&options.y_axis[0], &options.y_axis[1]);
        assert_eq!(price.top.value() + price.height.value(), 60);
        assert_eq!(volume.top.value() - (price.top.value() + price.height.value()), 5);
        assert_eq!(volume.top.value() + volume.height.value(), 100);
    }

    #[test]
    fn slots_pick_their_field() {
        let tick = TradeTick::new(Timestamp::from(7), Price::from(1.5), Volume::from(3.0));
        assert_eq!(SeriesSlot::Price.point_for(&tick), DataPoint::from((7, 1.5)));
        assert_eq!(SeriesSlot::Volume.point_for(&tick), DataPoint::from((7, 3.0)));
        assert_eq!(SeriesSlot::Volume.index(), 1);
    }
}
