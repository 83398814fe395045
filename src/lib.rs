//! Development-build prop type checking.
//!
//! Checks a mapping of named runtime values against an insertion-ordered
//! mapping of validator specs, returning the first formatted failure as a
//! message (or raising it, via the asserting form). In production mode both
//! forms are complete no-ops.

pub mod checker;
pub mod error;
pub mod mode;
pub mod spec;

// Re-export the check/assert operations and the types they traffic in
pub use checker::{
    assert_prop_types, assert_prop_types_with_mode, check_prop_types, check_prop_types_with_mode,
};
pub use error::CheckError;
pub use mode::RuntimeMode;
pub use spec::{SECRET, SpecError, TypeSpec, TypeSpecs, ValidatorFn, Verdict};
