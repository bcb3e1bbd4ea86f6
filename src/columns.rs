//! Header discovery for loosely formatted spreadsheet exports.
//!
//! Every canonical field declares the lower-case header fragments it accepts and the fragments
//! which disqualify a header. A field resolves only when exactly one header qualifies.

use csv::StringRecord;
use itertools::Itertools;

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug)]
pub struct Field {
    pub name: &'static str,
    include: &'static [&'static str],
    exclude: &'static [&'static str],
}

impl Field {
    pub const fn new(name: &'static str, include: &'static [&'static str]) -> Self {
        Self { name, include, exclude: &[] }
    }

    #[must_use]
    pub const fn excluding(mut self, exclude: &'static [&'static str]) -> Self {
        self.exclude = exclude;
        self
    }

    #[must_use]
    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        self.include.iter().any(|fragment| header.contains(fragment))
            && !self.exclude.iter().any(|fragment| header.contains(fragment))
    }

    /// Find the index of the single header matching the field.
    pub fn locate(&self, headers: &StringRecord) -> Result<usize> {
        self.locate_optional(headers)?.ok_or_else(|| Error::SchemaMismatch {
            field: self.name,
            candidates: Vec::new(),
        })
    }

    /// Same as [`Field::locate`], but a missing column is fine.
    pub fn locate_optional(&self, headers: &StringRecord) -> Result<Option<usize>> {
        let candidates =
            headers.iter().enumerate().filter(|(_, header)| self.matches(header)).collect_vec();
        match candidates.as_slice() {
            [] => Ok(None),
            [(index, _)] => Ok(Some(*index)),
            _ => Err(Error::SchemaMismatch {
                field: self.name,
                candidates: candidates.into_iter().map(|(_, header)| header.to_owned()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: Field = Field::new("model", &["modelo"]).excluding(&["status"]);

    #[test]
    fn test_locate_case_insensitive() -> Result {
        let headers = StringRecord::from(vec!["Marca", "MODELO", "Status do Modelo"]);
        assert_eq!(MODEL.locate(&headers)?, 1);
        Ok(())
    }

    #[test]
    fn test_locate_missing() {
        let headers = StringRecord::from(vec!["Marca", "Status do Modelo"]);
        assert!(matches!(
            MODEL.locate(&headers),
            Err(Error::SchemaMismatch { field: "model", candidates }) if candidates.is_empty(),
        ));
    }

    #[test]
    fn test_locate_ambiguous() {
        let headers = StringRecord::from(vec!["Modelo", "Modelo Unidade Externa"]);
        assert!(matches!(
            MODEL.locate(&headers),
            Err(Error::SchemaMismatch { field: "model", candidates }) if candidates.len() == 2,
        ));
    }

    #[test]
    fn test_locate_optional_missing() -> Result {
        let headers = StringRecord::from(vec!["Marca"]);
        assert_eq!(MODEL.locate_optional(&headers)?, None);
        Ok(())
    }

    #[test]
    fn test_matches_accented_header() {
        let field = Field::new("btu", &["btu"]).excluding(&["aquecimento"]);
        assert!(field.matches("Capacidade de Refrigeração Nominal (Btu/h)"));
        assert!(!field.matches("Capacidade de Aquecimento Nominal (Btu/h)"));
    }
}
