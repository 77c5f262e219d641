use serde::{Deserialize, Serialize};

/// Supported settlement currencies. GBP is the base currency; the other two
/// are converted with fixed demo rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "£")]
    Gbp,
    #[serde(rename = "€")]
    Eur,
    #[serde(rename = "$")]
    Usd,
}

impl Currency {
    /// Parse a currency symbol from the wire. The request form constrains the
    /// input to a closed set, so anything unrecognised falls back to the base
    /// currency instead of failing.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "€" => Currency::Eur,
            "$" => Currency::Usd,
            _ => Currency::Gbp,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    fn rate(&self) -> f64 {
        match self {
            Currency::Gbp => 1.0,
            Currency::Eur => 1.2,
            Currency::Usd => 1.3,
        }
    }
}

/// Convert a base (GBP) price into the target currency.
///
/// The result is deliberately left unrounded; callers round once at the edge
/// so repeated rounding does not compound across pipeline stages.
pub fn convert(base_price: f64, currency: Currency) -> f64 {
    base_price * currency.rate()
}
