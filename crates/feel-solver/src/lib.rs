//! Generic Binding and Overload Resolution
//!
//! This crate layers call-site analysis over the pure type algebra in
//! `feel-types`:
//!
//! - **[`TypeBinding`]**: binds argument types against one generic function
//!   template, with a shared substitution table for named variables and
//!   position-local holes for `any` occurrences
//! - **[`CandidateSet`]**: scores the overloads registered under one name as
//!   arguments arrive and tracks the most specific winner
//!
//! Both are single-writer values scoped to one resolution attempt; the
//! templates they work over are immutable and freely shared.

mod binding;
mod candidates;
mod error;

pub use binding::TypeBinding;
pub use candidates::CandidateSet;
pub use error::{BindError, ResolveError};
