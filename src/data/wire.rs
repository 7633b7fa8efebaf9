//! Wire types for the ISS JSON endpoints and their conversion to domain rows.

use serde::Deserialize;
use serde_json::Value;

use crate::data::moex_api::GatewayError;
use crate::domain::SecurityRef;

/// One row of the securities listing (`securities.columns=SECID,SHORTNAME`).
#[derive(Debug, Clone, Deserialize)]
pub struct MoexSecurity {
    #[serde(rename = "SECID")]
    pub secid: String,
    #[serde(rename = "SHORTNAME", default)]
    pub short_name: Option<String>,
}

impl From<MoexSecurity> for SecurityRef {
    fn from(s: MoexSecurity) -> Self {
        let display_name = s.short_name.unwrap_or_else(|| s.secid.clone());
        SecurityRef::new(s.secid, display_name)
    }
}

/// A candle row before any time parsing: `[begin, close]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandle {
    pub begin: String,
    pub close: f64,
}

/// Extract the security universe from an `iss.json=extended` body.
///
/// The extended format is an array of blocks; the data block is the second
/// element and holds a `securities` list of objects.
pub fn parse_securities(body: &Value) -> Result<Vec<SecurityRef>, GatewayError> {
    let rows = body
        .get(1)
        .and_then(|block| block.get("securities"))
        .ok_or_else(|| GatewayError::Malformed("missing [1].securities".to_string()))?;

    let securities: Vec<MoexSecurity> = serde_json::from_value(rows.clone())
        .map_err(|e| GatewayError::Malformed(format!("securities: {e}")))?;

    Ok(securities.into_iter().map(SecurityRef::from).collect())
}

/// Extract `[begin, close]` rows from a `candles.json` body.
///
/// A missing `candles.data` array fails the whole payload. Individual rows
/// with the wrong shape (null close, non-string begin) are skipped.
pub fn parse_candles(body: &Value) -> Result<Vec<RawCandle>, GatewayError> {
    let rows = body
        .get("candles")
        .and_then(|c| c.get("data"))
        .and_then(Value::as_array)
        .ok_or_else(|| GatewayError::Malformed("missing candles.data".to_string()))?;

    let mut candles = Vec::with_capacity(rows.len());
    for row in rows {
        match parse_candle_row(row) {
            Some(candle) => candles.push(candle),
            None => log::warn!("Skipping malformed candle row: {}", row),
        }
    }
    Ok(candles)
}

fn parse_candle_row(row: &Value) -> Option<RawCandle> {
    let begin = row.get(0)?.as_str()?.to_string();
    let close = row.get(1)?.as_f64()?;
    Some(RawCandle { begin, close })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn securities_are_read_from_the_second_block() {
        let body = json!([
            {"charsetinfo": {"name": "utf-8"}},
            {"securities": [
                {"SECID": "SBER", "SHORTNAME": "Сбербанк"},
                {"SECID": "GAZP", "SHORTNAME": "ГАЗПРОМ ао"}
            ]}
        ]);

        let securities = parse_securities(&body).unwrap();
        assert_eq!(securities.len(), 2);
        assert_eq!(securities[0], SecurityRef::new("SBER", "Сбербанк"));
        assert_eq!(securities[1].symbol, "GAZP");
    }

    #[test]
    fn missing_short_name_falls_back_to_ticker() {
        let body = json!([{}, {"securities": [{"SECID": "YNDX", "SHORTNAME": null}]}]);
        let securities = parse_securities(&body).unwrap();
        assert_eq!(securities[0].display_name, "YNDX");
    }

    #[test]
    fn securities_without_data_block_are_malformed() {
        let body = json!({"securities": {"data": []}});
        assert!(matches!(
            parse_securities(&body),
            Err(GatewayError::Malformed(_))
        ));
    }

    #[test]
    fn candle_rows_keep_response_order_and_skip_bad_rows() {
        let body = json!({"candles": {
            "columns": ["begin", "close"],
            "data": [
                ["2024-03-01 10:20:00", 281.5],
                ["2024-03-01 10:10:00", null],
                [12345, 280.0],
                ["2024-03-01 10:00:00", 280]
            ]
        }});

        let candles = parse_candles(&body).unwrap();
        assert_eq!(
            candles,
            vec![
                RawCandle { begin: "2024-03-01 10:20:00".into(), close: 281.5 },
                RawCandle { begin: "2024-03-01 10:00:00".into(), close: 280.0 },
            ]
        );
    }

    #[test]
    fn candles_without_data_are_malformed() {
        let body = json!({"candles": {"columns": ["begin", "close"]}});
        assert!(parse_candles(&body).is_err());
        assert!(parse_candles(&json!(null)).is_err());
    }
}
