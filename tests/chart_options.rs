use insta::assert_json_snapshot;
use stock_chart_hook::domain::chart::{ChartOptions, DEFAULT_PRICE_DECIMALS};
use stock_chart_hook::domain::market_data::ProductName;

#[test]
fn stock_with_volume_options() {
    let product = ProductName::new("BTCUSD").unwrap();
    let options = ChartOptions::stock_with_volume(&product, DEFAULT_PRICE_DECIMALS);

    assert_json_snapshot!(options, @r#"
    {
      "title": {
        "text": "BTCUSD"
      },
      "series": [
        {
          "type": "line",
          "name": "BTCUSD",
          "data": [],
          "yAxis": 0,
          "tooltip": {
            "valueDecimals": 2
          }
        },
        {
          "type": "column",
          "name": "Volume",
          "data": [],
          "yAxis": 1
        }
      ],
      "yAxis": [
        {
          "title": {
            "text": "Price"
          },
          "labels": {
            "align": "right",
            "x": -3
          },
          "top": "0%",
          "height": "60%",
          "lineWidth": 2,
          "resize": {
            "enabled": true
          }
        },
        {
          "title": {
            "text": "Volume"
          },
          "labels": {
            "align": "right",
            "x": -3
          },
          "top": "65%",
          "height": "35%",
          "lineWidth": 2,
          "offset": 0
        }
      ]
    }
    "#);
}

#[test]
fn options_json_is_compact_for_the_bridge() {
    let product = ProductName::new("ETH-USD").unwrap();
    let json = ChartOptions::stock_with_volume(&product, 4).to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"]["text"], "ETH-USD");
    assert_eq!(value["series"][0]["name"], "ETH-USD");
    assert_eq!(value["series"][0]["tooltip"]["valueDecimals"], 4);
    assert_eq!(value["series"][1]["yAxis"], 1);
    assert!(value["yAxis"][1].get("resize").is_none());
}
