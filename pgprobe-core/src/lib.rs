pub mod query;
pub mod record;

pub use query::*;
pub use record::*;
