//! Output transformation for inference.
//!
//! The [`OutputTransform`] enum defines how raw model outputs (margins) are
//! converted to final predictions. It is persisted with the model artifact
//! so that inference doesn't need to know the training configuration.
//!
//! # Variants
//!
//! - [`Identity`](OutputTransform::Identity): no transformation, output = margin
//! - [`Expm1`](OutputTransform::Expm1): `exp(margin) - 1`, inverting a
//!   training-time `log1p` target transform

use serde::{Deserialize, Serialize};

/// Inference-time output transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTransform {
    /// No transformation; output = margin.
    #[default]
    Identity,

    /// `exp(margin) - 1`: inverse of the `log(1 + target)` transform applied
    /// to compensation targets before training. Strictly monotonic in the
    /// margin.
    Expm1,
}

impl OutputTransform {
    /// Apply the transformation to a single margin.
    ///
    /// NaN and Inf inputs propagate through without panics.
    #[inline]
    pub fn apply(&self, margin: f32) -> f32 {
        match self {
            OutputTransform::Identity => margin,
            OutputTransform::Expm1 => margin.exp_m1(),
        }
    }

    /// Apply the transformation in-place to a predictions buffer.
    #[inline]
    pub fn transform_inplace(&self, predictions: &mut [f32]) {
        match self {
            OutputTransform::Identity => {
                // No-op
            }
            OutputTransform::Expm1 => {
                for x in predictions.iter_mut() {
                    *x = x.exp_m1();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_is_noop() {
        let mut preds = vec![1.0, -2.0, 3.5, 0.0];
        let original = preds.clone();
        OutputTransform::Identity.transform_inplace(&mut preds);
        assert_eq!(preds, original);
    }

    #[test]
    fn expm1_zero_is_zero() {
        assert_abs_diff_eq!(OutputTransform::Expm1.apply(0.0), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn expm1_inverts_log1p() {
        for target in [0.0f32, 1.0, 42.0, 65_000.0, 950_000.0] {
            let margin = target.ln_1p();
            assert_abs_diff_eq!(
                OutputTransform::Expm1.apply(margin),
                target,
                epsilon = target.max(1.0) * 1e-5
            );
        }
    }

    #[test]
    fn expm1_is_monotonic() {
        let margins = [-5.0f32, -1.0, 0.0, 0.5, 1.0, 5.0, 11.0, 14.0];
        let outputs: Vec<f32> = margins
            .iter()
            .map(|&m| OutputTransform::Expm1.apply(m))
            .collect();
        for pair in outputs.windows(2) {
            assert!(pair[0] < pair[1], "expected {} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn expm1_stays_above_minus_one() {
        // exp(x) - 1 > -1 for all finite x, so transformed compensation
        // margins can never drop below -1.
        for m in [-100.0f32, -10.0, 0.0, 10.0] {
            assert!(OutputTransform::Expm1.apply(m) > -1.0);
        }
    }

    #[test]
    fn expm1_nan_propagates() {
        assert!(OutputTransform::Expm1.apply(f32::NAN).is_nan());
    }

    #[test]
    fn transform_inplace_matches_apply() {
        let margins = [0.0f32, 1.0, 11.2, -0.5];
        let mut buffer = margins.to_vec();
        OutputTransform::Expm1.transform_inplace(&mut buffer);
        for (m, out) in margins.iter().zip(&buffer) {
            assert_eq!(OutputTransform::Expm1.apply(*m), *out);
        }
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&OutputTransform::Expm1).unwrap(),
            "\"expm1\""
        );
        let parsed: OutputTransform = serde_json::from_str("\"identity\"").unwrap();
        assert_eq!(parsed, OutputTransform::Identity);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(OutputTransform::default(), OutputTransform::Identity);
    }
}
