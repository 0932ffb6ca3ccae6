//! Data model of the answer service.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Answer`] | Explanation text plus a normalized [`Scene`] |
//! | [`RawAnswer`] | Answer as decoded from model output, before defaulting |
//! | [`Scene`] | Ordered layers with a guaranteed duration |
//! | [`Layer`] | One drawable shape with its props and animations |
//! | [`Animation`] | Timed linear change of one property, carried through verbatim |
//! | [`ShapeKind`] | `rect`, `circle`, `text`, `line`, `arrow` |
//!
//! ## Example
//!
//! ```rust
//! use chat2vis_ai::types::{Animation, Layer, Scene, ShapeKind};
//!
//! let scene = Scene::new("demo", 2000).with_layer(
//!     Layer::new("ball", ShapeKind::Circle)
//!         .with_prop("r", 20)
//!         .with_animation(Animation::new("x", 0, 300, 0, 1500)),
//! );
//! assert_eq!(scene.layer("ball").unwrap().shape(), Some(ShapeKind::Circle));
//! ```

pub mod answer;
pub mod scene;

pub use answer::{Answer, GenerateRequest, RawAnswer};
pub use scene::{Animation, Layer, Props, RawScene, Scene, ShapeKind};
