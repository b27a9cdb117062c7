//! Memoized witness store keyed by canonical digit subsets

pub mod constants;
mod store;
mod witness;

pub use store::ExpressionTable;
pub use witness::{OpKind, Witness};
