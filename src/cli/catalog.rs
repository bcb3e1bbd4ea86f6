use arcomp::{
    catalog::{BtuPerHour, Catalog, clean_brand},
    tables::{build_list_table, build_models_table},
};
use clap::Parser;

use crate::cli::{CatalogPathArgs, prelude::*};

#[derive(Parser)]
pub struct CatalogArgs {
    #[clap(flatten)]
    pub catalog: CatalogPathArgs,

    /// Brand to list the capacities of.
    #[clap(long = "brand")]
    pub brand: Option<String>,

    /// Capacity in BTU/h to list the models of.
    #[clap(long = "btu", requires = "brand")]
    pub btu: Option<f64>,
}

impl CatalogArgs {
    pub fn run(&self) -> Result {
        let catalog = Catalog::load(&self.catalog.path)?;
        let Some(brand) = self.brand.as_deref().map(clean_brand) else {
            println!("{}", build_list_table("Brand", catalog.brands()));
            return Ok(());
        };
        match self.btu {
            None => {
                let ratings = catalog.btu_ratings(&brand);
                if ratings.is_empty() {
                    warn!(%brand, "no selectable models for the brand");
                }
                println!("{}", build_list_table("Capacity", ratings));
            }
            Some(btu) => {
                let models = catalog.models(&brand, BtuPerHour::from(btu));
                if models.is_empty() {
                    warn!(%brand, btu, "no models with the capacity");
                }
                println!("{}", build_models_table(&models));
            }
        }
        Ok(())
    }
}
