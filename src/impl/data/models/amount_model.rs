use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

/// Non-negative monetary amount. Thousands separators are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AmountModel(pub f64);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let amount = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| InvalidAmount::with_debug(s, &e))?;
        AmountModel::try_from(amount).map_err(|_| InvalidAmount::new(s))
    }
}

impl TryFrom<f64> for AmountModel {
    type Error = ();
    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(AmountModel(amount))
        } else {
            Err(())
        }
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
