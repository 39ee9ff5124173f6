//! Activity Directory
//! 
//! Domain model for extracurricular activities: the activity record,
//! the name-keyed catalog, the signup rules and the seed list.

mod activity;
mod catalog;
mod error;
mod seed;

pub use activity::Activity;
pub use catalog::Catalog;
pub use error::DirectoryError;
pub use seed::seed_catalog;
