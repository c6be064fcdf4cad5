//! Chart-facing derived views: survival counts by class, the age/outcome
//! subset, and the view-level outcome filter.

use crate::schema::Dataset;

/// One tidy row of the survival-by-class bar chart: exact count of records
/// sharing a (class, outcome) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassOutcomeCount {
    pub class: u8,
    pub outcome: bool,
    pub count: usize,
}

/// Counts records per (class, outcome) pair over all records where both
/// fields are present. The result is sparse: pairs that never co-occur
/// produce no row. Rows are ordered by ascending class, then by the order
/// each outcome was first encountered within that class.
pub fn survival_by_class(dataset: &Dataset) -> Vec<ClassOutcomeCount> {
    let mut counts: Vec<ClassOutcomeCount> = Vec::new();
    for record in &dataset.records {
        let (Some(class), Some(outcome)) = (record.class, record.outcome) else {
            continue;
        };
        match counts
            .iter_mut()
            .find(|c| c.class == class && c.outcome == outcome)
        {
            Some(c) => c.count += 1,
            None => counts.push(ClassOutcomeCount { class, outcome, count: 1 }),
        }
    }
    // Stable sort keeps outcomes in encounter order within each class.
    counts.sort_by_key(|c| c.class);
    counts
}

/// One row of the age-distribution view.
#[derive(Clone, Debug, PartialEq)]
pub struct AgeOutcome {
    pub age: f64,
    pub outcome: bool,
}

/// Retains records with both age and outcome present, in original order.
/// Binning and density estimation belong to the charting collaborator; an
/// empty result is valid.
pub fn age_outcome(dataset: &Dataset) -> Vec<AgeOutcome> {
    dataset
        .records
        .iter()
        .filter_map(|r| match (r.age, r.outcome) {
            (Some(age), Some(outcome)) => Some(AgeOutcome { age, outcome }),
            _ => None,
        })
        .collect()
}

/// Row types that carry an outcome label and can therefore be narrowed by an
/// [`OutcomeFilter`].
pub trait OutcomeLabeled {
    fn outcome(&self) -> bool;
}

impl OutcomeLabeled for ClassOutcomeCount {
    fn outcome(&self) -> bool {
        self.outcome
    }
}

impl OutcomeLabeled for AgeOutcome {
    fn outcome(&self) -> bool {
        self.outcome
    }
}

/// View-level subset selection, as driven by the dashboard's radio control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeFilter {
    All,
    Survivors,
    NonSurvivors,
}

impl OutcomeFilter {
    pub fn admits(self, outcome: bool) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::Survivors => outcome,
            OutcomeFilter::NonSurvivors => !outcome,
        }
    }

    /// Returns the matching subset in original row order. Total: never fails,
    /// an empty result is valid.
    pub fn apply<T: OutcomeLabeled + Clone>(self, rows: &[T]) -> Vec<T> {
        rows.iter()
            .filter(|r| self.admits(r.outcome()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PassengerRecord;

    fn record(class: Option<u8>, outcome: Option<bool>, age: Option<f64>) -> PassengerRecord {
        PassengerRecord {
            class,
            outcome,
            age,
            fare: None,
            sibsp: None,
            parch: None,
        }
    }

    #[test]
    fn test_survival_by_class_sparse_counts() {
        // Spec scenario: no row may appear for pairs that never co-occur.
        let ds = Dataset::new(vec![
            record(Some(1), Some(true), Some(29.0)),
            record(Some(1), Some(false), None),
            record(Some(3), Some(true), Some(4.0)),
            record(Some(3), Some(true), Some(4.0)),
        ]);
        let counts = survival_by_class(&ds);
        assert_eq!(
            counts,
            vec![
                ClassOutcomeCount { class: 1, outcome: true, count: 1 },
                ClassOutcomeCount { class: 1, outcome: false, count: 1 },
                ClassOutcomeCount { class: 3, outcome: true, count: 2 },
            ]
        );
    }

    #[test]
    fn test_aggregation_completeness() {
        let ds = Dataset::new(vec![
            record(Some(1), Some(true), None),
            record(Some(2), None, None),
            record(None, Some(false), None),
            record(Some(2), Some(false), None),
            record(Some(3), Some(false), None),
        ]);
        let total: usize = survival_by_class(&ds).iter().map(|c| c.count).sum();
        let eligible = ds
            .records
            .iter()
            .filter(|r| r.class.is_some() && r.outcome.is_some())
            .count();
        assert_eq!(total, eligible);
        assert_eq!(total, 3);
    }

    #[test]
    fn test_classes_sorted_ascending_outcome_in_encounter_order() {
        let ds = Dataset::new(vec![
            record(Some(3), Some(false), None),
            record(Some(1), Some(true), None),
            record(Some(3), Some(true), None),
            record(Some(1), Some(false), None),
        ]);
        let counts = survival_by_class(&ds);
        let order: Vec<(u8, bool)> = counts.iter().map(|c| (c.class, c.outcome)).collect();
        assert_eq!(order, vec![(1, true), (1, false), (3, false), (3, true)]);
    }

    #[test]
    fn test_age_outcome_drops_incomplete_rows() {
        let ds = Dataset::new(vec![
            record(Some(1), Some(true), Some(29.0)),
            record(Some(1), Some(false), None),
            record(Some(2), None, Some(40.0)),
        ]);
        let rows = age_outcome(&ds);
        assert_eq!(rows, vec![AgeOutcome { age: 29.0, outcome: true }]);
    }

    #[test]
    fn test_age_outcome_all_ages_missing_is_empty_not_error() {
        let ds = Dataset::new(vec![
            record(Some(1), Some(true), None),
            record(Some(2), Some(false), None),
        ]);
        assert!(age_outcome(&ds).is_empty());
    }

    #[test]
    fn test_age_outcome_idempotent() {
        // Re-filtering a dataset rebuilt from the filtered rows changes nothing.
        let ds = Dataset::new(vec![
            record(Some(1), Some(true), Some(29.0)),
            record(Some(3), Some(false), None),
            record(Some(3), Some(false), Some(61.0)),
        ]);
        let once = age_outcome(&ds);
        let rebuilt = Dataset::new(
            once.iter()
                .map(|r| record(None, Some(r.outcome), Some(r.age)))
                .collect(),
        );
        assert_eq!(age_outcome(&rebuilt), once);
    }

    #[test]
    fn test_outcome_filter_partition() {
        let rows = vec![
            AgeOutcome { age: 10.0, outcome: true },
            AgeOutcome { age: 20.0, outcome: false },
            AgeOutcome { age: 30.0, outcome: true },
        ];
        let all = OutcomeFilter::All.apply(&rows);
        let survivors = OutcomeFilter::Survivors.apply(&rows);
        let lost = OutcomeFilter::NonSurvivors.apply(&rows);

        assert_eq!(all, rows);
        assert_eq!(survivors.len() + lost.len(), all.len());
        assert!(survivors.iter().all(|r| r.outcome));
        assert!(lost.iter().all(|r| !r.outcome));
    }

    #[test]
    fn test_outcome_filter_idempotent_and_order_preserving() {
        let rows = vec![
            AgeOutcome { age: 30.0, outcome: true },
            AgeOutcome { age: 10.0, outcome: true },
        ];
        let once = OutcomeFilter::Survivors.apply(&rows);
        let twice = OutcomeFilter::Survivors.apply(&once);
        assert_eq!(once, rows);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_outcome_filter_empty_result_is_valid() {
        let rows = vec![AgeOutcome { age: 30.0, outcome: true }];
        assert!(OutcomeFilter::NonSurvivors.apply(&rows).is_empty());
    }
}
