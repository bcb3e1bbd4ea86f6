use arcomp::sizing::{BTU_PER_SQUARE_METER, suggest_btu};
use clap::Parser;

use crate::cli::prelude::*;

#[derive(Parser)]
pub struct SizeArgs {
    /// Room area in square meters.
    #[clap(long = "area")]
    pub area: f64,
}

impl SizeArgs {
    pub fn run(&self) -> Result {
        let btu = suggest_btu(self.area)?;
        println!("Suggested capacity: {btu}");
        println!(
            "This is a rough {BTU_PER_SQUARE_METER} BTU/h per m² estimate, consult an installer for the final choice.",
        );
        Ok(())
    }
}
