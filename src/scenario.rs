use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    catalog::{ApplianceRecord, Catalog, clean_brand},
    error::{Error, Result},
    estimate::UsageProfile,
    prelude::*,
    quantity::cost::Cost,
    tariff::{TariffFlag, normalize_state},
};

/// Comparison scenario: where the appliances run, how long, and which two to compare.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub state: String,
    pub utility: String,

    #[serde(default)]
    pub flag: TariffFlag,

    pub hours_per_day: Option<u8>,
    pub days_per_month: Option<u8>,

    pub a: Choice,
    pub b: Choice,
}

/// One side of the comparison.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Choice {
    pub brand: String,
    pub model: String,

    /// Purchase price, the catalog price is used when missing.
    pub price: Option<Cost>,
}

impl Scenario {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_owned()));
        }
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Parse and validate the scenario, normalizing the location the way the tariff table does.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut scenario: Self = toml::from_str(text)?;
        scenario.a.validate()?;
        scenario.b.validate()?;
        scenario.state = normalize_state(&scenario.state);
        scenario.utility = scenario.utility.trim().to_owned();
        Ok(scenario)
    }

    /// Usage from the scenario, where the explicit overrides take precedence.
    pub fn usage(
        &self,
        hours_per_day: Option<u8>,
        days_per_month: Option<u8>,
    ) -> Result<UsageProfile> {
        let default = UsageProfile::default();
        UsageProfile::try_new(
            hours_per_day.or(self.hours_per_day).unwrap_or(default.hours_per_day()),
            days_per_month.or(self.days_per_month).unwrap_or(default.days_per_month()),
        )
    }
}

impl Choice {
    fn validate(&self) -> Result {
        match self.price {
            Some(price) if !(price.0.is_finite() && price >= Cost::ZERO) => {
                Err(Error::InvalidPrice(price.0))
            }
            _ => Ok(()),
        }
    }

    /// Find the chosen appliance, matching the brand the way the catalog cleans it.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<&'a ApplianceRecord> {
        let brand = clean_brand(&self.brand);
        let model = self.model.trim();
        catalog
            .find(&brand, model)
            .ok_or_else(|| Error::UnknownAppliance { brand, model: model.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::BtuPerHour, quantity::energy::KilowattHours};

    // language=TOML
    const SCENARIO: &str = r#"
        state = " sp"
        utility = "ENEL SP "
        flag = "red-p1"
        hours_per_day = 10

        [a]
        brand = "lg"
        model = " S4-Q12JA3WF "
        price = 2500

        [b]
        brand = "Samsung"
        model = "AR12"
    "#;

    #[test]
    fn test_parse() -> Result {
        let scenario = Scenario::from_toml(SCENARIO)?;
        assert_eq!(scenario.flag, TariffFlag::RedP1);
        assert_eq!(scenario.state, "SP");
        assert_eq!(scenario.utility, "ENEL SP");
        assert_eq!(scenario.a.price, Some(Cost::from(2500.0)));
        assert_eq!(scenario.b.price, None);
        Ok(())
    }

    #[test]
    fn test_usage_overrides() -> Result {
        let scenario = Scenario::from_toml(SCENARIO)?;
        assert_eq!(scenario.usage(None, None)?, UsageProfile::try_new(10, 30)?);
        assert_eq!(scenario.usage(Some(4), Some(20))?, UsageProfile::try_new(4, 20)?);
        assert!(matches!(scenario.usage(Some(25), None), Err(Error::InvalidUsage { .. })));
        Ok(())
    }

    #[test]
    fn test_resolve() -> Result {
        let scenario = Scenario::from_toml(SCENARIO)?;
        let catalog = Catalog::from(vec![
            ApplianceRecord::builder()
                .brand("LG")
                .model("S4-Q12JA3WF")
                .btu(BtuPerHour::from(12000.0))
                .annual_consumption(KilowattHours::from(550.0))
                .build(),
        ]);
        assert_eq!(scenario.a.resolve(&catalog)?.brand, "LG");
        assert!(matches!(
            scenario.b.resolve(&catalog),
            Err(Error::UnknownAppliance { brand, .. }) if brand == "SAMSUNG",
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_price() {
        for price in ["nan", "inf", "-500"] {
            let text = format!(
                "state = \"SP\"\nutility = \"ENEL SP\"\n[a]\nbrand = \"LG\"\nmodel = \"S4\"\nprice = {price}\n[b]\nbrand = \"LG\"\nmodel = \"S4\"\n",
            );
            assert!(matches!(Scenario::from_toml(&text), Err(Error::InvalidPrice(_))), "{price}");
        }
    }

    #[test]
    fn test_zero_price_is_fine() -> Result {
        let text = SCENARIO.replace("price = 2500", "price = 0");
        assert_eq!(Scenario::from_toml(&text)?.a.price, Some(Cost::ZERO));
        Ok(())
    }

    #[test]
    fn test_read_missing() {
        assert!(matches!(
            Scenario::read(Path::new("/nonexistent/scenario.toml")),
            Err(Error::MissingInput(_)),
        ));
    }
}
