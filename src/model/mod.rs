//! Trained model representation and inference-time output transform.

mod linear;
mod transform;

pub use linear::LinearModel;
pub use transform::OutputTransform;
