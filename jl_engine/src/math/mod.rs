//! Math helpers on top of glam: matrix transforms and bounding boxes.

mod transform;
mod aabb;

pub use transform::Transform;
pub use aabb::AABB;
