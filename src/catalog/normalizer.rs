use std::{fs::File, io, path::Path};

use csv::StringRecord;

use crate::{
    catalog::{brand::clean_brand, record::ApplianceRecord, write_catalog},
    columns::Field,
    error::{Error, Result},
    numeric::parse_f64,
    prelude::*,
    quantity::energy::KilowattHours,
};

pub const REGISTRATION_ACTIVE: &str = "Ativo";
pub const MODEL_DELETED: &str = "Excluido";
pub const SPLIT_HI_WALL: &str = "Split Hi-Wall";

const CATEGORY: Field = Field::new("category", &["tipo"]);
const REGISTRATION_STATUS: Field = Field::new("registration status", &["status do registro"]);
const MODEL_STATUS: Field = Field::new("model status", &["status do modelo"]);
const BRAND: Field = Field::new("brand", &["marca"]);
const MODEL: Field = Field::new("model", &["modelo"]).excluding(&["status"]);
const BTU: Field = Field::new("BTU rating", &["btu"]).excluding(&["aquecimento"]);
const CONSUMPTION: Field = Field::new("annual consumption", &["consumo anual"]);
const EFFICIENCY: Field = Field::new("efficiency label", &["idrs"]);

/// Column positions in the raw registry export.
struct RawColumns {
    category: usize,
    registration_status: usize,
    model_status: usize,
    brand: usize,
    model: usize,
    btu: usize,
    consumption: usize,
    efficiency: usize,
}

impl RawColumns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            category: CATEGORY.locate(headers)?,
            registration_status: REGISTRATION_STATUS.locate(headers)?,
            model_status: MODEL_STATUS.locate(headers)?,
            brand: BRAND.locate(headers)?,
            model: MODEL.locate(headers)?,
            btu: BTU.locate(headers)?,
            consumption: CONSUMPTION.locate(headers)?,
            efficiency: EFFICIENCY.locate(headers)?,
        })
    }

    fn is_wanted(&self, row: &StringRecord) -> bool {
        cell(row, self.registration_status) == REGISTRATION_ACTIVE
            && cell(row, self.model_status) != MODEL_DELETED
            && cell(row, self.category) == SPLIT_HI_WALL
    }

    fn to_record(&self, row: &StringRecord) -> ApplianceRecord {
        ApplianceRecord::builder()
            .brand(clean_brand(cell(row, self.brand)))
            .model(cell(row, self.model))
            .category(cell(row, self.category))
            .maybe_btu(parse_f64(cell(row, self.btu)).filter(|btu| *btu > 0.0).map(Into::into))
            .maybe_annual_consumption(
                parse_f64(cell(row, self.consumption))
                    .filter(|consumption| *consumption > 0.0)
                    .map(KilowattHours::from),
            )
            .efficiency_label(cell(row, self.efficiency))
            .build()
    }
}

fn cell(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or_default().trim()
}

/// Filter the raw registry export down to active split hi-wall units and clean them up.
///
/// The whole input is read before anything is returned, so a schema mismatch never leaves a
/// partial result behind.
#[instrument(skip_all)]
pub fn normalize<R: io::Read>(reader: &mut csv::Reader<R>) -> Result<Vec<ApplianceRecord>> {
    let columns = RawColumns::locate(reader.headers()?)?;

    let mut n_read = 0_usize;
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        n_read += 1;
        if columns.is_wanted(&row) {
            records.push(columns.to_record(&row));
        } else {
            debug!(line = row.position().map(csv::Position::line), "skipped");
        }
    }

    let n_empty_brands = records.iter().filter(|record| record.brand.is_empty()).count();
    if n_empty_brands != 0 {
        warn!(n_empty_brands, "some brands are empty after cleaning");
    }
    let n_incomplete = records.iter().filter(|record| !record.is_selectable()).count();
    if n_incomplete != 0 {
        warn!(n_incomplete, "some records miss a valid BTU rating or annual consumption");
    }
    info!(n_read, n_kept = records.len(), "normalized");
    Ok(records)
}

/// Normalize the registry export file into the clean catalog file.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn normalize_file(input: &Path, output: &Path, delimiter: u8) -> Result<usize> {
    if !input.is_file() {
        return Err(Error::MissingInput(input.to_owned()));
    }
    let mut reader =
        csv::ReaderBuilder::new().delimiter(delimiter).flexible(true).from_reader(File::open(input)?);
    let records = normalize(&mut reader)?;
    write_catalog(csv::Writer::from_path(output)?, &records)?;
    Ok(records.len())
}
