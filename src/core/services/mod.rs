//! Business logic services
//!
//! Pure processing logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`normalizer`] - Normalize a single item
//! - [`batch`] - Normalize a sequence, dropping failures

pub mod batch;
pub mod normalizer;

pub use batch::{BatchReport, process_items};
pub use normalizer::normalize;
