//! Linear regression model data structure.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Trained linear regression model (coefficients + intercept).
///
/// Predicts a single margin per sample:
/// `margin = features · coefficients + intercept`.
///
/// The coefficient at index `i` belongs to column `i` of the feature schema
/// the model was trained against; callers are expected to feed vectors
/// produced by [`align`](crate::encode::align) so that ordering holds.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use salarycast::model::LinearModel;
///
/// let model = LinearModel::new(array![0.5, -1.0], 2.0);
/// let margin = model.predict_one(array![4.0, 1.0].view());
/// assert_eq!(margin, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Per-column coefficients, length = n_features.
    coefficients: Array1<f32>,
    /// Additive intercept term.
    intercept: f32,
}

impl LinearModel {
    /// Create a model from coefficients and an intercept.
    pub fn new(coefficients: Array1<f32>, intercept: f32) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficient for a feature index.
    #[inline]
    pub fn coefficient(&self, index: usize) -> f32 {
        self.coefficients[index]
    }

    /// The coefficient vector.
    #[inline]
    pub fn coefficients(&self) -> ArrayView1<'_, f32> {
        self.coefficients.view()
    }

    /// The intercept term.
    #[inline]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Predict the raw margin for a single feature vector.
    ///
    /// # Panics
    ///
    /// Panics if `features.len() != n_features`.
    pub fn predict_one(&self, features: ArrayView1<'_, f32>) -> f32 {
        assert_eq!(
            features.len(),
            self.n_features(),
            "feature vector length {} doesn't match model n_features {}",
            features.len(),
            self.n_features()
        );
        self.coefficients.dot(&features) + self.intercept
    }

    /// Predict raw margins for a sample-major batch `[n_samples, n_features]`.
    ///
    /// # Panics
    ///
    /// Panics if `features.ncols() != n_features`.
    pub fn predict(&self, features: ArrayView2<'_, f32>) -> Array1<f32> {
        assert_eq!(
            features.ncols(),
            self.n_features(),
            "feature matrix has {} columns but model expects {}",
            features.ncols(),
            self.n_features()
        );
        features.dot(&self.coefficients) + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn predict_one_is_dot_plus_intercept() {
        let model = LinearModel::new(array![1.0, 2.0, -0.5], 10.0);
        let margin = model.predict_one(array![3.0, 0.5, 2.0].view());
        assert_abs_diff_eq!(margin, 10.0 + 3.0 + 1.0 - 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_features_yield_intercept() {
        let model = LinearModel::new(array![0.3, 0.7], 11.5);
        assert_abs_diff_eq!(
            model.predict_one(array![0.0, 0.0].view()),
            11.5,
            epsilon = 1e-6
        );
    }

    #[test]
    fn batch_predict_matches_single() {
        let model = LinearModel::new(array![0.25, -1.0, 4.0], 1.0);
        let batch = array![[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [-1.0, 0.5, 2.0]];

        let margins = model.predict(batch.view());
        assert_eq!(margins.len(), 3);
        for (row, &margin) in batch.outer_iter().zip(margins.iter()) {
            assert_abs_diff_eq!(model.predict_one(row), margin, epsilon = 1e-6);
        }
    }

    #[test]
    fn accessors() {
        let model = LinearModel::new(array![0.1, 0.2], -3.0);
        assert_eq!(model.n_features(), 2);
        assert_eq!(model.coefficient(1), 0.2);
        assert_eq!(model.intercept(), -3.0);
    }

    #[test]
    #[should_panic(expected = "doesn't match model n_features")]
    fn predict_one_panics_on_length_mismatch() {
        let model = LinearModel::new(array![1.0, 2.0], 0.0);
        model.predict_one(array![1.0].view());
    }
}
