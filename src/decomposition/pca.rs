use crate::error::Error;
use crate::{Matrix, Vector};
use ndarray::Axis;
use std::cmp::Ordering;

const MAX_POWER_ITERATIONS: usize = 300;
const CONVERGENCE_TOL: f64 = 1e-12;

/// Principal component analysis over the sample covariance matrix.
#[derive(Clone, Debug)]
pub struct Pca {
    pub components: Option<Matrix>,
    pub explained_variance: Option<Vector>,
    pub explained_variance_ratio: Option<Vector>,
    pub mean: Option<Vector>,
    n_components: Option<usize>,
}

impl Pca {
    pub fn new() -> Self {
        Self {
            components: None,
            explained_variance: None,
            explained_variance_ratio: None,
            mean: None,
            n_components: None,
        }
    }

    pub fn n_components(mut self, n_components: usize) -> Self {
        self.n_components = Some(n_components);
        self
    }

    pub fn fit(&mut self, x: &Matrix) -> Result<(), Error> {
        if x.nrows() < 2 || x.ncols() == 0 {
            return Err(Error::InvalidInput(
                "input matrix must have at least two samples and one feature".to_string(),
            ));
        }

        let n_samples = x.nrows();
        let n_features = x.ncols();
        let n_components = self.n_components.unwrap_or(n_features.min(n_samples));
        if n_components > n_features.min(n_samples) {
            return Err(Error::InvalidInput(format!(
                "n_components={} cannot be larger than min(n_samples, n_features)={}",
                n_components,
                n_features.min(n_samples)
            )));
        }

        // Center the data
        let mean = x
            .mean_axis(Axis(0))
            .ok_or_else(|| Error::InvalidInput("failed to compute column means".to_string()))?;
        let x_centered = x - &mean.view().insert_axis(Axis(0));

        let cov = x_centered.t().dot(&x_centered) / (n_samples as f64 - 1.0);
        let total_variance = cov.diag().sum();
        let (eigenvalues, eigenvectors) = eigen_decomposition(&cov);

        // Sort by eigenvalue (descending)
        let mut eigen_pairs: Vec<(f64, Vector)> = eigenvalues
            .iter()
            .zip(eigenvectors.axis_iter(Axis(1)))
            .map(|(&val, vec)| (val, vec.to_owned()))
            .collect();
        eigen_pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let explained_variance: Vector = eigen_pairs
            .iter()
            .take(n_components)
            .map(|(val, _)| val.max(0.0))
            .collect::<Vec<f64>>()
            .into();

        let mut components = Matrix::zeros((n_components, n_features));
        for (i, (_, eigenvec)) in eigen_pairs.iter().take(n_components).enumerate() {
            components.row_mut(i).assign(eigenvec);
        }

        let explained_variance_ratio = if total_variance > 0.0 {
            &explained_variance / total_variance
        } else {
            Vector::zeros(explained_variance.len())
        };

        self.components = Some(components);
        self.explained_variance = Some(explained_variance);
        self.explained_variance_ratio = Some(explained_variance_ratio);
        self.mean = Some(mean);
        Ok(())
    }

    pub fn transform(&self, x: &Matrix) -> Result<Matrix, Error> {
        let components = self
            .components
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("PCA not fitted, call fit() first".to_string()))?;
        let mean = self
            .mean
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("PCA not fitted, call fit() first".to_string()))?;
        if x.ncols() != mean.len() {
            return Err(Error::InvalidInput(format!(
                "data has {} features but PCA was fit on {}",
                x.ncols(),
                mean.len()
            )));
        }

        let x_centered = x - &mean.view().insert_axis(Axis(0));
        Ok(x_centered.dot(&components.t()))
    }

    pub fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix, Error> {
        self.fit(x)?;
        self.transform(x)
    }
}

impl Default for Pca {
    fn default() -> Self {
        Self::new()
    }
}

/// Eigen-decomposition of a symmetric matrix by power iteration with
/// deflation. The start vector is fixed, so the result is deterministic.
fn eigen_decomposition(matrix: &Matrix) -> (Vector, Matrix) {
    let n = matrix.nrows();
    let mut eigenvalues = Vector::zeros(n);
    let mut eigenvectors = Matrix::zeros((n, n));
    let mut a = matrix.clone();

    for i in 0..n {
        let mut v = Vector::ones(n) / (n as f64).sqrt();
        let mut eigenvalue = 0.0;

        for _ in 0..MAX_POWER_ITERATIONS {
            let av = a.dot(&v);
            let norm = av.dot(&av).sqrt();
            if norm < CONVERGENCE_TOL {
                // Remaining subspace carries no variance
                eigenvalue = 0.0;
                break;
            }
            v = av / norm;
            let next = v.dot(&a.dot(&v));
            if (next - eigenvalue).abs() < CONVERGENCE_TOL {
                eigenvalue = next;
                break;
            }
            eigenvalue = next;
        }

        eigenvalues[i] = eigenvalue;
        eigenvectors.column_mut(i).assign(&v);

        // Deflate the found component
        let outer = v
            .view()
            .insert_axis(Axis(1))
            .dot(&v.view().insert_axis(Axis(0)));
        a = &a - &(outer * eigenvalue);
    }

    (eigenvalues, eigenvectors)
}
