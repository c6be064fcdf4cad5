//! Dimensionality reduction.
//!
//! `Pca` projects standardized feature matrices onto their directions of
//! maximum variance. The decomposition is fully deterministic (fixed-start
//! power iteration, no randomized approximation), so repeated runs over
//! identical input produce identical coordinates up to the sign ambiguity
//! inherent to principal components.
//!
//! # Example
//! ```rust
//! use titanic_views::Pca;
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//!     [7.0, 8.0, 9.0]
//! ];
//!
//! let mut pca = Pca::new().n_components(2);
//! let transformed = pca.fit_transform(&x).unwrap();
//! assert_eq!(transformed.shape(), &[3, 2]);
//! ```

mod pca;

pub use pca::Pca;
