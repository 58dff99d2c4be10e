//! Market data aggregate: the trade tick, its value objects and the host attribute bag.

pub mod attributes;
pub mod entities;
pub mod value_objects;

pub use attributes::*;
pub use entities::*;
pub use value_objects::*;
