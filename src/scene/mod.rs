//! Scene postprocessing: shape defaults, normalization and the fallback scene.

pub mod defaults;
pub mod fallback;
pub mod normalize;

pub use defaults::ShapeDefaults;
pub use fallback::{fallback_answer, fallback_scene};
pub use normalize::{NormalizeError, Normalizer, DEFAULT_DURATION, DURATION_TAIL};
