mod catalog;
mod compare;
mod normalize;
pub mod prelude;
mod size;
mod tariffs;

use std::path::PathBuf;

use arcomp::{quantity::rate::KilowattHourRate, tariff::parse_base_rate};
use clap::{Parser, Subcommand};

pub use self::{
    catalog::CatalogArgs,
    compare::CompareArgs,
    normalize::NormalizeArgs,
    size::SizeArgs,
    tariffs::TariffsArgs,
};
use crate::cli::prelude::*;

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter and clean the INMETRO registry export into the catalog file.
    #[clap(name = "normalize")]
    Normalize(NormalizeArgs),

    /// Tariff reference table tools.
    #[clap(name = "tariffs")]
    Tariffs(TariffsArgs),

    /// Browse the catalog: brands, capacities of a brand, or models of a brand and capacity.
    #[clap(name = "catalog")]
    Catalog(CatalogArgs),

    /// Compare the running costs of two appliances described by a scenario file.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Suggest an appliance capacity for a room.
    #[clap(name = "size")]
    Size(SizeArgs),
}

#[derive(Parser)]
pub struct CatalogPathArgs {
    /// Normalized appliance catalog.
    #[clap(id = "catalog", long = "catalog", default_value = "dados_limpos.csv", env = "CATALOG_PATH")]
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct TariffTableArgs {
    /// Tariff reference table.
    #[clap(id = "tariffs", long = "tariffs", default_value = "Tarifas.csv", env = "TARIFFS_PATH")]
    pub path: PathBuf,

    /// Base rate for the state and utility pairs missing from the table.
    #[clap(
        long = "default-rate",
        default_value = "0.85",
        env = "DEFAULT_RATE",
        value_parser = parse_base_rate
    )]
    pub default_rate: KilowattHourRate,
}

#[derive(Parser)]
pub struct DelimiterArgs {
    /// Field delimiter of the input file.
    #[clap(long = "delimiter", default_value = ",", env = "CSV_DELIMITER")]
    pub delimiter: char,
}

impl DelimiterArgs {
    pub fn byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("delimiter `{}` must be a single ASCII character", self.delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compare() {
        let args = Args::try_parse_from([
            "arcomp",
            "compare",
            "scenario.toml",
            "--flag",
            "vermelha-p2",
            "--hours-per-day",
            "10",
        ])
        .unwrap();
        let Command::Compare(args) = args.command else {
            panic!("expected `compare`");
        };
        assert_eq!(args.hours_per_day, Some(10));
    }

    #[test]
    fn test_negative_default_rate() {
        assert!(
            Args::try_parse_from(["arcomp", "tariffs", "list", "--default-rate=-1"]).is_err()
        );
        let args =
            Args::try_parse_from(["arcomp", "tariffs", "list", "--default-rate=0,9"]).unwrap();
        assert!(matches!(args.command, Command::Tariffs(_)));
    }

    #[test]
    fn test_delimiter() {
        assert_eq!(DelimiterArgs { delimiter: ';' }.byte().unwrap(), b';');
        assert!(DelimiterArgs { delimiter: 'é' }.byte().is_err());
    }
}
