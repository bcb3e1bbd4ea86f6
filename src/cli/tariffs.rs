use std::path::PathBuf;

use arcomp::{
    tables::{build_list_table, build_tariffs_table},
    tariff::{TariffFlag, Tariffs, converter::convert_file},
};
use clap::{Parser, Subcommand};

use crate::cli::{DelimiterArgs, TariffTableArgs, prelude::*};

#[derive(Parser)]
pub struct TariffsArgs {
    #[command(subcommand)]
    pub command: TariffsCommand,
}

#[derive(Subcommand)]
pub enum TariffsCommand {
    /// Convert the ANEEL tariff sheet (exported as CSV) into the tariff reference table.
    #[clap(name = "convert")]
    Convert(ConvertArgs),

    /// List the states, the utilities of a state, or the effective rate of a utility.
    #[clap(name = "list")]
    List(ListArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// ANEEL tariff sheet.
    #[clap(long = "input")]
    pub input: PathBuf,

    /// Where to write the tariff reference table.
    #[clap(long = "output", default_value = "Tarifas.csv", env = "TARIFFS_PATH")]
    pub output: PathBuf,

    #[clap(flatten)]
    pub delimiter: DelimiterArgs,
}

#[derive(Parser)]
pub struct ListArgs {
    #[clap(flatten)]
    pub tariffs: TariffTableArgs,

    /// Two-letter state code.
    #[clap(long = "state")]
    pub state: Option<String>,

    /// Utility name, shows the effective rate of the utility.
    #[clap(long = "utility", requires = "state")]
    pub utility: Option<String>,

    /// Tariff flag for the effective rate.
    #[clap(long = "flag", default_value = "green", env = "TARIFF_FLAG")]
    pub flag: TariffFlag,
}

impl TariffsArgs {
    pub fn run(&self) -> Result {
        match &self.command {
            TariffsCommand::Convert(args) => args.run(),
            TariffsCommand::List(args) => args.run(),
        }
    }
}

impl ConvertArgs {
    fn run(&self) -> Result {
        let n_records = convert_file(&self.input, &self.output, self.delimiter.byte()?)
            .with_context(|| format!("failed to convert `{}`", self.input.display()))?;
        println!("Wrote {n_records} tariffs to `{}`.", self.output.display());
        Ok(())
    }
}

impl ListArgs {
    fn run(&self) -> Result {
        let tariffs = Tariffs::load(&self.tariffs.path)?;
        match (&self.state, &self.utility) {
            (None, _) => {
                println!("{}", build_list_table("State", tariffs.states()));
            }
            (Some(state), None) => {
                let utilities = tariffs.utilities(state);
                if utilities.is_empty() {
                    warn!(%state, "no utilities found for the state");
                }
                println!("{}", build_tariffs_table(&utilities));
            }
            (Some(state), Some(utility)) => {
                let base_rate = tariffs.base_rate(state, utility, self.tariffs.default_rate);
                let rate = self.flag.apply(base_rate.rate());
                println!("Base rate: {}", base_rate.rate());
                println!("{} flag surcharge: {}", self.flag, self.flag.surcharge());
                println!("Effective rate: {rate}");
                if base_rate.is_default() {
                    println!("The utility is not in the table, the default base rate is used.");
                }
            }
        }
        Ok(())
    }
}
