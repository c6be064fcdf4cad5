use crate::error::Error;
use crate::{Matrix, Vector};
use ndarray::Axis;

/// Rescales each column to zero mean and unit variance using statistics from
/// the fitted data only. Population standard deviation (ddof 0), so a
/// standardized column has variance exactly 1 over the rows it was fit on.
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self { mean: None, std: None }
    }

    /// Computes per-column statistics. A zero-variance column cannot be
    /// standardized; it is rejected here rather than producing NaN columns
    /// at transform time.
    pub fn fit(&mut self, data: &Matrix) -> Result<(), Error> {
        let mean = data
            .mean_axis(Axis(0))
            .ok_or_else(|| Error::InvalidInput("cannot fit scaler on an empty matrix".to_string()))?;
        let std = data.std_axis(Axis(0), 0.0);

        if let Some(i) = std.iter().position(|&s| s == 0.0 || !s.is_finite()) {
            return Err(Error::DegenerateFeature { feature: format!("column {}", i) });
        }

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix, Error> {
        let mean = self
            .mean
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("scaler not fitted, call fit() first".to_string()))?;
        let std = self
            .std
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("scaler not fitted, call fit() first".to_string()))?;
        if data.ncols() != mean.len() {
            return Err(Error::InvalidInput(format!(
                "data has {} columns but the scaler was fit on {}",
                data.ncols(),
                mean.len()
            )));
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= mean;
            row /= std;
        }
        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix, Error> {
        self.fit(data)?;
        self.transform(data)
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}
