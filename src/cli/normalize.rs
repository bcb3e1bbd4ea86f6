use std::path::PathBuf;

use arcomp::catalog::normalizer::normalize_file;
use clap::Parser;

use crate::cli::{DelimiterArgs, prelude::*};

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Raw registry export.
    #[clap(long = "input", default_value = "Itens.csv", env = "REGISTRY_EXPORT_PATH")]
    pub input: PathBuf,

    /// Where to write the normalized catalog.
    #[clap(long = "output", default_value = "dados_limpos.csv", env = "CATALOG_PATH")]
    pub output: PathBuf,

    #[clap(flatten)]
    pub delimiter: DelimiterArgs,
}

impl NormalizeArgs {
    pub fn run(&self) -> Result {
        let n_records = normalize_file(&self.input, &self.output, self.delimiter.byte()?)
            .with_context(|| format!("failed to normalize `{}`", self.input.display()))?;
        println!("Wrote {n_records} records to `{}`.", self.output.display());
        Ok(())
    }
}
