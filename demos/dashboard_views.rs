use titanic_views::{
    normalize, outcome_label, project, survival_by_class, age_outcome, DatasetCache, Feature,
    OutcomeFilter, RawTable,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Titanic Dashboard Views ===\n");

    // A small slice of the passenger table, as an ingestion collaborator
    // would hand it over after parsing the CSV. Headers use the Spanish
    // naming variant on purpose: the normalizer resolves either convention.
    let table = RawTable::new(
        vec![
            "Clase".into(),
            "Sobrevivencia".into(),
            "Edad".into(),
            "Tarifa".into(),
            "Hermanos/Pareja".into(),
            "Padres/Hijos".into(),
        ],
        vec![
            vec![Some(1.0), Some(1.0), Some(29.0), Some(211.34), Some(0.0), Some(0.0)],
            vec![Some(1.0), Some(0.0), Some(54.0), Some(51.86), Some(0.0), Some(1.0)],
            vec![Some(2.0), Some(1.0), Some(14.0), Some(30.07), Some(1.0), Some(0.0)],
            vec![Some(2.0), Some(0.0), None, Some(13.0), Some(0.0), Some(0.0)],
            vec![Some(3.0), Some(0.0), Some(22.0), Some(7.25), Some(1.0), Some(0.0)],
            vec![Some(3.0), Some(1.0), Some(4.0), Some(16.7), Some(1.0), Some(1.0)],
            vec![Some(3.0), Some(0.0), Some(39.0), Some(31.27), Some(1.0), Some(5.0)],
        ],
    )?;

    let mut cache = DatasetCache::new();
    let dataset = cache.get_or_load("demo-slice-v1", || normalize(&table))?;
    println!("Loaded {} passenger records\n", dataset.n_records());

    println!("=== Survival by class ===");
    let counts = survival_by_class(dataset);
    for row in &counts {
        println!(
            "class {} | {:>16} | {}",
            row.class,
            outcome_label(row.outcome),
            row.count
        );
    }

    println!("\n=== Age distribution rows ===");
    let ages = age_outcome(dataset);
    println!("{} rows with a known age", ages.len());
    for row in OutcomeFilter::Survivors.apply(&ages) {
        println!("age {:>5.1} | {}", row.age, outcome_label(row.outcome));
    }

    println!("\n=== 3-D projection ===");
    let view = project(dataset, &Feature::QUANTITATIVE)?;
    let [r1, r2, r3] = view.explained_variance_ratio;
    println!(
        "explained variance: PC1 {:.1}%, PC2 {:.1}%, PC3 {:.1}%",
        r1 * 100.0,
        r2 * 100.0,
        r3 * 100.0
    );
    for point in &view.points {
        println!(
            "({:>7.3}, {:>7.3}, {:>7.3}) | {}",
            point.pc1,
            point.pc2,
            point.pc3,
            outcome_label(point.outcome)
        );
    }

    Ok(())
}
