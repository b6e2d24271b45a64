pub mod catalog;
pub mod seed;
pub mod types;

pub use catalog::Catalog;
pub use types::{ItemPath, MenuItem, MenuSection, PricedOption, SubSection};
