pub mod converter;
pub mod flag;

use std::{fs::File, io, path::Path};

use itertools::Itertools;
use rust_decimal::Decimal;
use serde::Serialize;

pub use self::flag::TariffFlag;
use crate::{
    columns::Field,
    error::{Error, Result},
    numeric::parse_decimal,
    prelude::*,
    quantity::{Quantity, rate::KilowattHourRate},
};

/// Base rate used when the state and utility pair is not in the tariff table.
pub const DEFAULT_BASE_RATE: KilowattHourRate = Quantity(Decimal::from_parts(85, 0, 0, false, 2));

const STATE: Field = Field::new("state", &["estado"]);
const UTILITY: Field = Field::new("utility", &["empresa"]);
const BASE_RATE: Field = Field::new("base rate", &["tarifa"]);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TariffRecord {
    #[serde(rename = "estado")]
    pub state: String,

    #[serde(rename = "empresa")]
    pub utility: String,

    #[serde(rename = "tarifa")]
    pub base_rate: KilowattHourRate,
}

/// Outcome of a base rate lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BaseRate {
    Found(KilowattHourRate),

    /// The pair is unknown and the default rate stands in.
    Default(KilowattHourRate),
}

impl BaseRate {
    pub const fn rate(self) -> KilowattHourRate {
        match self {
            Self::Found(rate) | Self::Default(rate) => rate,
        }
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default(_))
    }
}

/// Read-only tariff reference table.
#[must_use]
#[derive(Debug, Default)]
pub struct Tariffs {
    records: Vec<TariffRecord>,
}

impl From<Vec<TariffRecord>> for Tariffs {
    fn from(records: Vec<TariffRecord>) -> Self {
        Self { records }
    }
}

impl Tariffs {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_owned()));
        }
        let tariffs = Self::from_reader(
            &mut csv::ReaderBuilder::new().flexible(true).from_reader(File::open(path)?),
        )?;
        info!(n_records = tariffs.records.len(), "loaded the tariffs");
        Ok(tariffs)
    }

    pub fn from_reader<R: io::Read>(reader: &mut csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?;
        let state = STATE.locate(headers)?;
        let utility = UTILITY.locate(headers)?;
        let base_rate = BASE_RATE.locate(headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let cell = |index: usize| row.get(index).unwrap_or_default().trim();
            let (state, utility) = (normalize_state(cell(state)), cell(utility));
            if state.is_empty() {
                continue;
            }
            let Some(rate) = parse_decimal(cell(base_rate)).map(KilowattHourRate::from) else {
                warn!(%state, utility, "invalid base rate, skipping");
                continue;
            };
            if rate.is_sign_negative() {
                warn!(%state, utility, "negative base rate, skipping");
                continue;
            }
            if records
                .iter()
                .any(|record: &TariffRecord| record.state == state && record.utility == utility)
            {
                debug!(%state, utility, "duplicate tariff, skipping");
                continue;
            }
            records.push(TariffRecord { state, utility: utility.to_owned(), base_rate: rate });
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[TariffRecord] {
        &self.records
    }

    #[must_use]
    pub fn states(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.state.as_str()).unique().sorted().collect()
    }

    /// Utilities of the state with their rates, sorted by the utility name.
    #[must_use]
    pub fn utilities(&self, state: &str) -> Vec<&TariffRecord> {
        let state = normalize_state(state);
        self.records
            .iter()
            .filter(|record| record.state == state)
            .sorted_by(|lhs, rhs| lhs.utility.cmp(&rhs.utility))
            .collect()
    }

    /// Look the base rate up, falling back to the `default` one.
    pub fn base_rate(&self, state: &str, utility: &str, default: KilowattHourRate) -> BaseRate {
        let state = normalize_state(state);
        let utility = utility.trim();
        if let Some(record) =
            self.records.iter().find(|record| record.state == state && record.utility == utility)
        {
            BaseRate::Found(record.base_rate)
        } else {
            warn!(%state, utility, %default, "tariff not found, falling back to the default rate");
            BaseRate::Default(default)
        }
    }
}

/// State codes are matched trimmed and upper-cased.
#[must_use]
pub fn normalize_state(state: &str) -> String {
    state.trim().to_uppercase()
}

/// Parse a base rate given by the user. Comma decimals are accepted, negative rates are not.
pub fn parse_base_rate(text: &str) -> Result<KilowattHourRate> {
    parse_decimal(text)
        .map(KilowattHourRate::from)
        .filter(|rate| !rate.is_sign_negative())
        .ok_or_else(|| Error::InvalidRate(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // language=CSV
    const TARIFFS: &str = "\
estado,empresa,tarifa
SP,ENEL SP,0.656
SP,CPFL Paulista,\"0,701\"
RJ,Light,0.70
,Orphan,0.5
MG,CEMIG,n/d
MG,Negative,-0.1
SP,ENEL SP,0.999
";

    fn tariffs() -> Tariffs {
        Tariffs::from_reader(&mut csv::Reader::from_reader(TARIFFS.as_bytes())).unwrap()
    }

    fn rate(text: &str) -> KilowattHourRate {
        text.parse().unwrap()
    }

    #[test]
    fn test_load_drops_invalid_and_duplicate_rows() {
        assert_eq!(tariffs().records().len(), 3);
    }

    #[test]
    fn test_states_and_utilities() {
        let tariffs = tariffs();
        assert_eq!(tariffs.states(), ["RJ", "SP"]);
        let utilities = tariffs.utilities(" sp ");
        let names = utilities.iter().map(|record| record.utility.as_str()).collect_vec();
        assert_eq!(names, ["CPFL Paulista", "ENEL SP"]);
        assert!(tariffs.utilities("AC").is_empty());
    }

    #[test]
    fn test_base_rate_found_first_wins() {
        let lookup = tariffs().base_rate("SP", "ENEL SP", DEFAULT_BASE_RATE);
        assert_eq!(lookup, BaseRate::Found(rate("0.656")));
        assert!(!lookup.is_default());
    }

    #[test]
    fn test_base_rate_comma_decimal() {
        assert_eq!(
            tariffs().base_rate("SP", "CPFL Paulista", DEFAULT_BASE_RATE).rate(),
            rate("0.701"),
        );
    }

    #[test]
    fn test_base_rate_default() {
        let lookup = tariffs().base_rate("AC", "Energisa", DEFAULT_BASE_RATE);
        assert_eq!(lookup, BaseRate::Default(rate("0.85")));
        assert!(lookup.is_default());
    }

    #[test]
    fn test_base_rate_normalizes_state_and_utility() {
        let lookup = tariffs().base_rate("rj ", " Light", DEFAULT_BASE_RATE);
        assert_eq!(lookup, BaseRate::Found(rate("0.70")));
        assert_eq!(TariffFlag::RedP1.apply(lookup.rate()), rate("0.744"));
    }

    #[test]
    fn test_parse_base_rate() -> Result {
        assert_eq!(parse_base_rate("0,85")?, DEFAULT_BASE_RATE);
        assert_eq!(parse_base_rate("0")?, KilowattHourRate::ZERO);
        assert!(matches!(parse_base_rate("-1"), Err(Error::InvalidRate(_))));
        assert!(matches!(parse_base_rate("abc"), Err(Error::InvalidRate(_))));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Tariffs::load(Path::new("/nonexistent/Tarifas.csv")),
            Err(Error::MissingInput(_)),
        ));
    }
}
