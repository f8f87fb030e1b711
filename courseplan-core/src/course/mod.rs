//! Course records and the catalog that holds them

mod catalog;
mod types;

pub use catalog::{Catalog, EditOutcome};
pub use types::{Course, CoursePatch, Term};
