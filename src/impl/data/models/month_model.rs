use std::str::FromStr;

use chrono::Month;
use fractic_server_error::ServerError;

use crate::errors::InvalidMonth;

/// Calendar month given as its number, 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MonthModel(Month);
impl FromStr for MonthModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<u8>()
            .map_err(|e| InvalidMonth::with_debug(s, &e))?;
        let month = Month::try_from(n).map_err(|e| InvalidMonth::with_debug(s, &e))?;
        Ok(MonthModel(month))
    }
}

impl Into<Month> for MonthModel {
    fn into(self) -> Month {
        self.0
    }
}
