//! Item system: types, equipment, templates, generation, drops and the shop.

pub mod drops;
pub mod equipment;
pub mod generation;
pub mod shop;
pub mod templates;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use generation::*;
pub use shop::*;
pub use types::*;
