//! Standardization-and-projection stage: complete-case filtering over an
//! explicit feature list, per-feature standardization, and a deterministic
//! 3-component projection for the scatter view.

use crate::decomposition::Pca;
use crate::error::Error;
use crate::preprocessing::StandardScaler;
use crate::schema::{Dataset, PassengerRecord};
use crate::view::OutcomeLabeled;
use crate::Matrix;
use ndarray::Axis;

/// Number of projected coordinates handed to the 3-D scatter view.
pub const N_COMPONENTS: usize = 3;

/// Quantitative feature columns a caller may select for projection. The
/// source variants never agreed on a canonical list, so the stage takes an
/// explicit selection instead of guessing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Class,
    Age,
    Fare,
    SibSp,
    Parch,
}

impl Feature {
    /// The four purely quantitative columns, the widest selection used by
    /// the reference dashboards. Callers opt in explicitly.
    pub const QUANTITATIVE: [Feature; 4] =
        [Feature::Age, Feature::Fare, Feature::SibSp, Feature::Parch];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Class => "class",
            Feature::Age => "age",
            Feature::Fare => "fare",
            Feature::SibSp => "sibsp",
            Feature::Parch => "parch",
        }
    }

    pub fn value(self, record: &PassengerRecord) -> Option<f64> {
        match self {
            Feature::Class => record.class.map(f64::from),
            Feature::Age => record.age,
            Feature::Fare => record.fare,
            Feature::SibSp => record.sibsp.map(f64::from),
            Feature::Parch => record.parch.map(f64::from),
        }
    }
}

/// One row of the 3-D scatter table: the first three principal components
/// plus the outcome label carried through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub pc1: f64,
    pub pc2: f64,
    pub pc3: f64,
    pub outcome: bool,
}

impl OutcomeLabeled for ProjectedPoint {
    fn outcome(&self) -> bool {
        self.outcome
    }
}

/// Projection output: the point table, plus the share of variance each
/// component explains (for axis annotation by the rendering collaborator).
#[derive(Clone, Debug)]
pub struct ProjectionView {
    pub points: Vec<ProjectedPoint>,
    pub explained_variance_ratio: [f64; N_COMPONENTS],
}

/// Runs the full stage over the selected features: drop every record with a
/// missing value in any selected feature or in the outcome label, standardize
/// each retained column to zero mean and unit variance using statistics from
/// the retained rows only, then project onto the first three principal
/// components.
///
/// Fails with [`Error::InsufficientDimensions`] when fewer than three
/// distinct features are selected, [`Error::EmptyInput`] when no record
/// survives complete-case filtering, and [`Error::DegenerateFeature`] naming
/// the offending column when a retained feature has zero variance.
pub fn project(dataset: &Dataset, features: &[Feature]) -> Result<ProjectionView, Error> {
    let mut selected: Vec<Feature> = Vec::new();
    for &f in features {
        if !selected.contains(&f) {
            selected.push(f);
        }
    }
    if selected.len() < N_COMPONENTS {
        return Err(Error::InsufficientDimensions {
            available: selected.len(),
            required: N_COMPONENTS,
        });
    }

    // Complete-case filtering: the outcome label rides along positionally,
    // so a record missing it is dropped with the rest.
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut outcomes: Vec<bool> = Vec::new();
    for record in &dataset.records {
        let Some(outcome) = record.outcome else {
            continue;
        };
        let values: Option<Vec<f64>> = selected.iter().map(|f| f.value(record)).collect();
        if let Some(values) = values {
            rows.push(values);
            outcomes.push(outcome);
        }
    }
    if rows.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut x = Matrix::zeros((rows.len(), selected.len()));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            x[[i, j]] = value;
        }
    }

    // Report degenerate columns by canonical feature name; the scaler only
    // knows column indices.
    let std = x.std_axis(Axis(0), 0.0);
    if let Some(j) = std.iter().position(|&s| s == 0.0 || !s.is_finite()) {
        return Err(Error::DegenerateFeature {
            feature: selected[j].name().to_string(),
        });
    }

    let mut scaler = StandardScaler::new();
    let scaled = scaler.fit_transform(&x)?;

    let mut pca = Pca::new().n_components(N_COMPONENTS);
    let coords = pca.fit_transform(&scaled)?;
    let ratio = pca
        .explained_variance_ratio
        .as_ref()
        .ok_or_else(|| Error::InvalidInput("PCA fit produced no variance ratios".to_string()))?;
    let explained_variance_ratio = [ratio[0], ratio[1], ratio[2]];

    let points = coords
        .outer_iter()
        .zip(outcomes)
        .map(|(row, outcome)| ProjectedPoint {
            pc1: row[0],
            pc2: row[1],
            pc3: row[2],
            outcome,
        })
        .collect();

    Ok(ProjectionView { points, explained_variance_ratio })
}
