//! Chart aggregate: construction options, data points and the backend seam.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
