//! FEEL Type Algebra
//!
//! This crate implements the static type system of the FEEL expression
//! language. It provides:
//!
//! - **`FType`**: the closed variant set of FEEL types, compared structurally
//! - **Graded conversion**: every admissible pair of types gets a cost grade,
//!   used both for assignment checks and overload ranking
//! - **Lattice operations**: least common supertype and greatest common
//!   subtype, with folds over slices
//! - **Runtime classification**: `is_instance` and `of_value` over the
//!   [`value::Value`] model
//! - **Builtin signatures**: the standard library function table with
//!   registration-order precedence

mod builtins;
mod classify;
mod conformance;
mod lattice;
mod members;
mod types;
pub mod value;

pub use builtins::{builtin, builtins, Builtin};
pub use conformance::Conversion;
pub use lattice::{element_type, max_sub_type, min_super_type};
pub use types::{ContextType, FType, FunctionType, ListType, NumberKind, Param, RangeType, TypeVar};
pub use value::{FunctionValue, MonthsDuration, NumberValue, RangeValue, Value};
