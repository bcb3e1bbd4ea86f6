use std::path::PathBuf;

use arcomp::{
    catalog::Catalog,
    estimate::{Comparison, Estimator, UsageProfile, Verdict},
    quantity::rate::KilowattHourRate,
    scenario::Scenario,
    tables::{build_comparison_table, build_curve_table},
    tariff::{TariffFlag, Tariffs},
};
use clap::Parser;
use serde::Serialize;

use crate::cli::{CatalogPathArgs, TariffTableArgs, prelude::*};

#[derive(Parser)]
pub struct CompareArgs {
    /// Scenario file, see `README.md` for the format.
    pub scenario: PathBuf,

    #[clap(flatten)]
    pub catalog: CatalogPathArgs,

    #[clap(flatten)]
    pub tariffs: TariffTableArgs,

    /// Override the scenario tariff flag.
    #[clap(long = "flag")]
    pub flag: Option<TariffFlag>,

    /// Override the scenario daily usage.
    #[clap(long = "hours-per-day")]
    pub hours_per_day: Option<u8>,

    /// Override the scenario monthly usage.
    #[clap(long = "days-per-month")]
    pub days_per_month: Option<u8>,

    /// Show the cumulative cost curve every this many months.
    #[clap(long = "curve-step", default_value = "3")]
    pub curve_step: usize,

    /// Print the comparison as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    state: &'a str,
    utility: &'a str,
    flag: TariffFlag,
    is_default_rate: bool,
    rate: KilowattHourRate,
    usage: UsageProfile,

    #[serde(flatten)]
    comparison: &'a Comparison<'a>,
}

impl CompareArgs {
    #[instrument(skip_all, fields(scenario = %self.scenario.display()))]
    pub fn run(&self) -> Result {
        let scenario = Scenario::read(&self.scenario)
            .with_context(|| format!("failed to read `{}`", self.scenario.display()))?;
        let catalog = Catalog::load(&self.catalog.path)?;
        let tariffs = Tariffs::load(&self.tariffs.path)?;

        let flag = self.flag.unwrap_or(scenario.flag);
        let usage = scenario.usage(self.hours_per_day, self.days_per_month)?;
        let base_rate =
            tariffs.base_rate(&scenario.state, &scenario.utility, self.tariffs.default_rate);
        let rate = flag.apply(base_rate.rate());
        info!(%flag, base_rate = %base_rate.rate(), %rate, "effective rate");

        let estimator = Estimator::builder().rate(rate).usage(usage).build();
        let a = estimator.estimate(scenario.a.resolve(&catalog)?, scenario.a.price)?;
        let b = estimator.estimate(scenario.b.resolve(&catalog)?, scenario.b.price)?;
        let comparison = Comparison::new(&a, &b);

        if self.json {
            let report = Report {
                state: &scenario.state,
                utility: &scenario.utility,
                flag,
                is_default_rate: base_rate.is_default(),
                rate: estimator.rate(),
                usage: estimator.usage(),
                comparison: &comparison,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if base_rate.is_default() {
            println!(
                "`{}` in {} is not in the tariff table, using the default base rate.",
                scenario.utility, scenario.state,
            );
        }
        println!(
            "Effective rate: {} ({flag} flag), {} h/day × {} days/month",
            estimator.rate(),
            estimator.usage().hours_per_day(),
            estimator.usage().days_per_month(),
        );
        println!("{}", build_comparison_table(&comparison));
        match comparison.verdict {
            Verdict::Identical => {
                println!("Both sides are the same appliance.");
            }
            Verdict::Tie => {
                println!("Technical tie: the options cost the same to buy and to run.");
            }
            Verdict::Winner { side, monthly_savings } => {
                println!(
                    "Option {side} saves {monthly_savings} per month ({:.1}% less to run).",
                    comparison.savings_percentage,
                );
                if let Some(five_year_savings) = comparison.five_year_savings {
                    println!("Over 5 years: {five_year_savings}.");
                }
                println!("Payback: {}.", comparison.payback);
            }
        }
        println!("{}", build_curve_table(&a, &b, self.curve_step));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use arcomp::{estimate::CostEstimate, quantity::cost::Cost, tariff::DEFAULT_BASE_RATE};

    use super::*;

    fn estimate(brand: &str, price: f64, monthly_cost: f64) -> CostEstimate {
        CostEstimate::builder()
            .brand(brand)
            .model("X")
            .purchase_price(Cost::from(price))
            .monthly_cost(Cost::from(monthly_cost))
            .build()
    }

    #[test]
    fn test_report_json() -> Result {
        let (a, b) = (estimate("LG", 2000.0, 100.0), estimate("GREE", 2500.0, 80.0));
        let comparison = Comparison::new(&a, &b);
        let report = Report {
            state: "SP",
            utility: "ENEL SP",
            flag: TariffFlag::Yellow,
            is_default_rate: true,
            rate: TariffFlag::Yellow.apply(DEFAULT_BASE_RATE),
            usage: UsageProfile::default(),
            comparison: &comparison,
        };
        let json = serde_json::to_value(&report)?;
        assert_eq!(json["flag"], "yellow");
        assert_eq!(json["is_default_rate"], true);
        assert_eq!(json["rate"], "0.868");
        assert_eq!(json["usage"]["hours_per_day"], 8);
        assert_eq!(json["verdict"]["kind"], "winner");
        assert_eq!(json["verdict"]["side"], "B");
        assert_eq!(json["payback"]["kind"], "months");
        assert_eq!(json["payback"]["months"], 25.0);
        assert_eq!(json["a"]["brand"], "LG");
        assert!(json["five_year_savings"].is_number());
        Ok(())
    }
}
