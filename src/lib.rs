pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cache;
pub mod decomposition;
pub mod error;
pub mod preprocessing;
pub mod projection;
pub mod schema;
pub mod view;

pub use cache::DatasetCache;
pub use decomposition::Pca;
pub use error::Error;
pub use preprocessing::StandardScaler;
pub use projection::{Feature, ProjectedPoint, ProjectionView, project};
pub use schema::{Dataset, PassengerRecord, RawTable, normalize, outcome_label};
pub use view::{
    AgeOutcome, ClassOutcomeCount, OutcomeFilter, OutcomeLabeled, age_outcome, survival_by_class,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }

    #[test]
    fn raw_table_to_all_three_views() {
        let table = RawTable::new(
            vec![
                "Pclass".into(),
                "Survived".into(),
                "Age".into(),
                "Fare".into(),
                "SibSp".into(),
                "Parch".into(),
            ],
            vec![
                vec![Some(1.0), Some(1.0), Some(29.0), Some(71.3), Some(0.0), Some(0.0)],
                vec![Some(1.0), Some(0.0), None, Some(52.0), Some(1.0), Some(1.0)],
                vec![Some(3.0), Some(1.0), Some(4.0), Some(16.7), Some(1.0), Some(1.0)],
                vec![Some(3.0), Some(1.0), Some(4.0), Some(11.1), Some(0.0), Some(2.0)],
                vec![Some(2.0), Some(0.0), Some(60.0), Some(26.0), Some(0.0), Some(0.0)],
            ],
        )
        .unwrap();

        let dataset = normalize(&table).unwrap();

        let counts = survival_by_class(&dataset);
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 5);

        let ages = age_outcome(&dataset);
        assert_eq!(ages.len(), 4);

        let projected = project(&dataset, &Feature::QUANTITATIVE).unwrap();
        assert_eq!(projected.points.len(), 4);

        let survivors = OutcomeFilter::Survivors.apply(&projected.points);
        assert!(survivors.iter().all(|p| p.outcome));
    }
}
