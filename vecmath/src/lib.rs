//! A plain 3D vector, 3x3 matrices and index flattening.
//!
//! ```
//! # use vecmath::{Matrix3, Vector3};
//! let forward = Vector3::new(0.0, 3.0, 4.0);
//! assert_eq!(forward.magnitude(), 5.0);
//! assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
//! assert!((Vector3::X.angle(Vector3::Y).unwrap() - 90.0).abs() < 1e-4);
//!
//! let turned = Matrix3::rotation_z(90.0) * Vector3::X;
//! assert!((turned - Vector3::Y).magnitude() < 1e-6);
//! assert_eq!(format!("{}", Vector3::new(1.0, -2.0, 0.5)), "<1, -2, 0.5>");
//! ```
//!
//! [`Vector3`] is `bytemuck::Pod`, so slices of vectors can be reinterpreted
//! as `&[f32]` or dumped byte for byte.

mod error;
mod index;
mod matrix;
mod vector;

pub use crate::error::VecMathError;
pub use crate::index::{collapse_2d, collapse_3d};
pub use crate::matrix::Matrix3;
pub use crate::vector::Vector3;
