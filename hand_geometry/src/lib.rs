//! Geometric gesture classification for tracked hand landmarks.
//!
//! The crate is split into the vector [`geometry`] kernel, the [`gesture`]
//! rules built on it, the [`batch`] distance evaluator and a flat C ABI in
//! [`ffi`].

pub mod batch;
pub mod ffi;
pub mod geometry;
pub mod gesture;
pub mod io;

pub use batch::{batch_distances, batch_distances_into, par_batch_distances};
pub use geometry::{angle, cross, distance, dot, normalize, GeometryError, Point3};
pub use gesture::{classify, Gesture, GestureError, GestureThresholds, LandmarkSet};
