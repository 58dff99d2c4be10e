pub mod attributes;
pub mod wasm_api;

pub use attributes::*;
pub use wasm_api::*;
