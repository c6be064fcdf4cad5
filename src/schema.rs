//! Canonical passenger schema and the normalization boundary.
//!
//! Input tables arrive with whatever headers the source file used (observed
//! variants differ in casing and language), so the rest of the pipeline never
//! touches raw columns: `normalize` resolves headers once, coerces the 0/1
//! outcome coding to `bool`, and hands every downstream stage a strongly
//! typed [`Dataset`] with explicit optional fields.

use crate::error::Error;

/// Header variants accepted for each canonical field, matched
/// case-insensitively.
const CLASS_ALIASES: &[&str] = &["pclass", "clase", "class"];
const OUTCOME_ALIASES: &[&str] = &["survived", "sobrevivencia", "sobreviviente"];
const AGE_ALIASES: &[&str] = &["age", "edad"];
const FARE_ALIASES: &[&str] = &["fare", "tarifa"];
const SIBSP_ALIASES: &[&str] = &["sibsp", "hermanos/pareja"];
const PARCH_ALIASES: &[&str] = &["parch", "padres/hijos"];

/// Raw tabular input as handed over by an external ingestion collaborator:
/// named columns over rows of optional numeric cells. No file format is
/// implied; whoever reads the CSV (or upload, or URL) builds one of these.
#[derive(Clone, Debug)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<f64>>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<f64>>>) -> Result<Self, Error> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::InvalidInput(format!(
                    "row {} has {} cells but the table has {} columns",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn position_of(&self, aliases: &[&str]) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| aliases.iter().any(|a| c.eq_ignore_ascii_case(a)))
    }
}

/// One passenger, after normalization. Any field may be missing for a given
/// record; only column-level absence of class or outcome is an error.
#[derive(Clone, Debug, PartialEq)]
pub struct PassengerRecord {
    pub class: Option<u8>,
    pub outcome: Option<bool>,
    pub age: Option<f64>,
    pub fare: Option<f64>,
    pub sibsp: Option<u32>,
    pub parch: Option<u32>,
}

/// Ordered sequence of normalized passenger records. Every derived view is a
/// pure function of one of these; nothing mutates it after normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub records: Vec<PassengerRecord>,
}

impl Dataset {
    pub fn new(records: Vec<PassengerRecord>) -> Self {
        Self { records }
    }

    pub fn n_records(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Maps arbitrary input headers to the canonical field set and coerces cell
/// values into their typed domains. Returns a new dataset; the raw table is
/// left untouched.
///
/// Fails with [`Error::MissingColumn`] if no header matches the class or
/// outcome field. The other four fields are optional at the column level too.
pub fn normalize(table: &RawTable) -> Result<Dataset, Error> {
    let class_idx = table
        .position_of(CLASS_ALIASES)
        .ok_or(Error::MissingColumn("class"))?;
    let outcome_idx = table
        .position_of(OUTCOME_ALIASES)
        .ok_or(Error::MissingColumn("outcome"))?;
    let age_idx = table.position_of(AGE_ALIASES);
    let fare_idx = table.position_of(FARE_ALIASES);
    let sibsp_idx = table.position_of(SIBSP_ALIASES);
    let parch_idx = table.position_of(PARCH_ALIASES);

    let cell = |row: &Vec<Option<f64>>, idx: Option<usize>| idx.and_then(|i| row[i]);

    let records = table
        .rows
        .iter()
        .map(|row| PassengerRecord {
            class: row[class_idx].and_then(coerce_class),
            outcome: row[outcome_idx].and_then(coerce_outcome),
            age: cell(row, age_idx).and_then(coerce_nonnegative),
            fare: cell(row, fare_idx).and_then(coerce_nonnegative),
            sibsp: cell(row, sibsp_idx).and_then(coerce_count),
            parch: cell(row, parch_idx).and_then(coerce_count),
        })
        .collect();

    Ok(Dataset::new(records))
}

// Cells outside a field's domain become missing for that record rather than
// failing the whole table.
fn coerce_class(value: f64) -> Option<u8> {
    if value.fract() == 0.0 && (1.0..=3.0).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

fn coerce_outcome(value: f64) -> Option<bool> {
    if value == 0.0 {
        Some(false)
    } else if value == 1.0 {
        Some(true)
    } else {
        None
    }
}

fn coerce_nonnegative(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

fn coerce_count(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then(|| value as u32)
}

/// Display label for an outcome. Presentation boundary only: pipeline stages
/// and filters always compare the `bool` form.
pub fn outcome_label(survived: bool) -> &'static str {
    if survived { "survived" } else { "did not survive" }
}
