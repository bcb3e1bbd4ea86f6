use std::{fs::File, io, path::Path};

use serde::Serialize;

use crate::{
    columns::Field,
    error::{Error, Result},
    numeric::parse_decimal,
    prelude::*,
    quantity::rate::KilowattHourRate,
};

const UTILITY: Field = Field::new("utility", &["distribuidora"]);
const STATE: Field = Field::new("state", &["uf", "estado"]);
const BASE_RATE: Field = Field::new("base rate", &["tarifa convencional"]);

/// Row of the tariff reference file. The rate stays empty when the sheet value is not a number.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ConvertedTariff {
    #[serde(rename = "estado")]
    pub state: String,

    #[serde(rename = "empresa")]
    pub utility: String,

    #[serde(rename = "tarifa")]
    pub base_rate: Option<KilowattHourRate>,
}

/// Reshape the ANEEL rate sheet into the tariff reference rows, keeping the conventional rate only.
#[instrument(skip_all)]
pub fn convert<R: io::Read>(reader: &mut csv::Reader<R>) -> Result<Vec<ConvertedTariff>> {
    let headers = reader.headers()?;
    let utility = UTILITY.locate(headers)?;
    let state = STATE.locate(headers)?;
    let base_rate = BASE_RATE.locate(headers)?;

    let tariffs = reader
        .records()
        .map(|row| -> Result<ConvertedTariff> {
            let row = row?;
            let cell = |index: usize| row.get(index).unwrap_or_default().trim();
            Ok(ConvertedTariff {
                state: cell(state).to_owned(),
                utility: cell(utility).to_owned(),
                base_rate: parse_decimal(cell(base_rate)).map(KilowattHourRate::from),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    info!(n_tariffs = tariffs.len(), "converted");
    Ok(tariffs)
}

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_file(input: &Path, output: &Path, delimiter: u8) -> Result<usize> {
    if !input.is_file() {
        return Err(Error::MissingInput(input.to_owned()));
    }
    let mut reader =
        csv::ReaderBuilder::new().delimiter(delimiter).flexible(true).from_reader(File::open(input)?);
    let tariffs = convert(&mut reader)?;
    let mut writer = csv::Writer::from_path(output)?;
    for tariff in &tariffs {
        writer.serialize(tariff)?;
    }
    writer.flush()?;
    Ok(tariffs.len())
}
