//! Asset records as the price API returns them
//!
//! Numeric fields stay strings on the wire; the accessors parse them on demand
//! so callers never do arithmetic on unparsed text.

use serde::{Deserialize, Serialize};

/// One asset snapshot from the price API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Stable identifier (e.g. "bitcoin"), used as the list key
    pub id: String,
    /// Display name (e.g. "Bitcoin")
    pub name: String,
    /// Ticker (e.g. "BTC")
    pub symbol: String,
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub market_cap_usd: Option<String>,
    #[serde(default, rename = "changePercent24Hr")]
    pub change_percent_24_hr: Option<String>,
    #[serde(default, rename = "volumeUsd24Hr")]
    pub volume_usd_24_hr: Option<String>,
    #[serde(default)]
    pub supply: Option<String>,
}

/// Ordered list of assets, response order preserved.
pub type AssetList = Vec<AssetRecord>;

/// Envelope around the asset list: `{ "data": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsResponse {
    pub data: AssetList,
    /// Server time in Unix millis, when the API sends it
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Parse an API numeric string.
///
/// `None`, blank, and non-finite values all come back as `None`.
pub fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

impl AssetRecord {
    /// Create a record with only the identifying fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            price_usd: None,
            market_cap_usd: None,
            change_percent_24_hr: None,
            volume_usd_24_hr: None,
            supply: None,
        }
    }

    /// Builder: set the price string
    pub fn price(mut self, price_usd: impl Into<String>) -> Self {
        self.price_usd = Some(price_usd.into());
        self
    }

    /// Builder: set market cap, 24h change, 24h volume and supply
    pub fn stats(
        mut self,
        market_cap_usd: impl Into<String>,
        change_percent_24_hr: impl Into<String>,
        volume_usd_24_hr: impl Into<String>,
        supply: impl Into<String>,
    ) -> Self {
        self.market_cap_usd = Some(market_cap_usd.into());
        self.change_percent_24_hr = Some(change_percent_24_hr.into());
        self.volume_usd_24_hr = Some(volume_usd_24_hr.into());
        self.supply = Some(supply.into());
        self
    }

    pub fn price_value(&self) -> Option<f64> {
        parse_numeric(self.price_usd.as_deref())
    }

    pub fn market_cap_value(&self) -> Option<f64> {
        parse_numeric(self.market_cap_usd.as_deref())
    }

    pub fn change_percent_value(&self) -> Option<f64> {
        parse_numeric(self.change_percent_24_hr.as_deref())
    }

    pub fn volume_value(&self) -> Option<f64> {
        parse_numeric(self.volume_usd_24_hr.as_deref())
    }

    pub fn supply_value(&self) -> Option<f64> {
        parse_numeric(self.supply.as_deref())
    }

    /// List label, e.g. "Bitcoin (BTC)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }

    /// Case-insensitive match on id or symbol
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        self.id.eq_ignore_ascii_case(needle) || self.symbol.eq_ignore_ascii_case(needle)
    }
}
