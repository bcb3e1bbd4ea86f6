pub mod brand;
pub mod normalizer;
pub mod record;

use std::{fs::File, io, path::Path};

use itertools::Itertools;

pub use self::{
    brand::clean_brand,
    record::{ApplianceRecord, BtuPerHour},
};
use crate::{
    columns::Field,
    error::{Error, Result},
    numeric::parse_f64,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
};

const BRAND: Field = Field::new("brand", &["marca"]);
const MODEL: Field = Field::new("model", &["modelo"]).excluding(&["status"]);
const BTU: Field = Field::new("BTU rating", &["btu"]).excluding(&["aquecimento"]);
const CONSUMPTION: Field = Field::new("annual consumption", &["consumo"]);
const CATEGORY: Field = Field::new("category", &["tipo"]);
const EFFICIENCY: Field = Field::new("efficiency label", &["idrs", "eficiência", "eficiencia"]);
const PRICE: Field = Field::new("price", &["preco", "preço"]);

/// Read-only appliance catalog, loaded once from the clean catalog file.
#[must_use]
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ApplianceRecord>,
}

impl From<Vec<ApplianceRecord>> for Catalog {
    fn from(records: Vec<ApplianceRecord>) -> Self {
        Self { records }
    }
}

impl Catalog {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_owned()));
        }
        let catalog = Self::from_reader(
            &mut csv::ReaderBuilder::new().flexible(true).from_reader(File::open(path)?),
        )?;
        info!(n_records = catalog.records.len(), "loaded the catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: io::Read>(reader: &mut csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?;
        let brand = BRAND.locate(headers)?;
        let model = MODEL.locate(headers)?;
        let btu = BTU.locate(headers)?;
        let consumption = CONSUMPTION.locate(headers)?;
        let category = CATEGORY.locate_optional(headers)?;
        let efficiency = EFFICIENCY.locate_optional(headers)?;
        let price = PRICE.locate_optional(headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let cell = |index: usize| row.get(index).unwrap_or_default().trim();
            let optional_cell = |index: Option<usize>| index.map_or("", cell);

            if cell(brand).is_empty() || cell(model).is_empty() {
                debug!(line = row.position().map(csv::Position::line), "no brand or model");
                continue;
            }
            let record = ApplianceRecord::builder()
                .brand(clean_brand(cell(brand)))
                .model(cell(model))
                .category(optional_cell(category))
                .maybe_btu(parse_f64(cell(btu)).filter(|btu| *btu > 0.0).map(BtuPerHour::from))
                .maybe_annual_consumption(
                    parse_f64(cell(consumption))
                        .filter(|consumption| *consumption > 0.0)
                        .map(KilowattHours::from),
                )
                .efficiency_label(optional_cell(efficiency))
                .price(parse_f64(optional_cell(price)).map_or(Cost::ZERO, Cost::from))
                .build();
            records.push(record);
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[ApplianceRecord] {
        &self.records
    }

    /// All brands, sorted. An empty brand is listed too.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.brand.as_str()).unique().sorted().collect()
    }

    /// BTU ratings available for the brand, sorted.
    #[must_use]
    pub fn btu_ratings(&self, brand: &str) -> Vec<BtuPerHour> {
        self.selectable(brand).filter_map(|record| record.btu).unique().sorted().collect()
    }

    /// Models of the brand with the given rating, one record per model name, sorted by model.
    #[must_use]
    pub fn models(&self, brand: &str, btu: BtuPerHour) -> Vec<&ApplianceRecord> {
        self.selectable(brand)
            .filter(|record| record.btu == Some(btu))
            .unique_by(|record| record.model.as_str())
            .sorted_by(|lhs, rhs| lhs.model.cmp(&rhs.model))
            .collect()
    }

    /// Find the appliance, preferring a selectable record over one with invalid numerics.
    #[must_use]
    pub fn find(&self, brand: &str, model: &str) -> Option<&ApplianceRecord> {
        self.records
            .iter()
            .filter(|record| record.is_same_appliance(brand, model))
            .find_or_first(|record| record.is_selectable())
    }

    fn selectable(&self, brand: &str) -> impl Iterator<Item = &ApplianceRecord> {
        self.records
            .iter()
            .filter(move |record| record.brand == brand && record.is_selectable())
    }
}

pub fn write_catalog<W: io::Write>(mut writer: csv::Writer<W>, records: &[ApplianceRecord]) -> Result {
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
