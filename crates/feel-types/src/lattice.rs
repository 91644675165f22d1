//! Join and meet over the type lattice.
//!
//! `min_super` is the least common supertype (join) and `max_sub` the
//! greatest common subtype (meet). `any` and `null` are the top and bottom
//! identities; incomparable pairs collapse to the corresponding extreme.
//! The folds over slices are what list literals and mixed expressions use
//! to settle on a single element type.

use crate::types::{ContextType, FType, FunctionType, ListType, NumberKind, Param, RangeType};
use std::sync::Arc;

impl FType {
    /// Least common supertype of `self` and `other`.
    pub fn min_super(&self, other: &FType) -> FType {
        if self == other {
            return self.clone();
        }
        match (self, other) {
            (FType::Null, t) | (t, FType::Null) => t.clone(),
            (FType::Any | FType::Var(_), _) | (_, FType::Any | FType::Var(_)) => FType::Any,

            (FType::Number(_), FType::Number(_)) => FType::NUMBER,

            // A date-time carries strictly more than a date, so the common
            // supertype is the date; likewise the time-of-day projection.
            (FType::Date, FType::DateTime) | (FType::DateTime, FType::Date) => FType::Date,
            (FType::Time, FType::DateTime) | (FType::DateTime, FType::Time) => FType::Time,

            (FType::List(a), FType::List(b)) => FType::List(Arc::new(ListType {
                element: a.element.min_super(&b.element),
            })),

            (FType::Context(a), FType::Context(b)) => {
                // Keep only the members both sides agree on.
                let members = a
                    .members
                    .iter()
                    .filter_map(|(name, ty)| {
                        b.members
                            .get(name)
                            .map(|other| (name.clone(), ty.min_super(other)))
                    })
                    .collect();
                FType::Context(Arc::new(ContextType { members }))
            }

            (FType::Range(a), FType::Range(b)) => {
                let compatible = (a.start_inclusive, a.end_inclusive)
                    == (b.start_inclusive, b.end_inclusive)
                    || (b.start_inclusive.is_none() && b.end_inclusive.is_none());
                if compatible {
                    FType::Range(Arc::new(RangeType {
                        element: a.element.min_super(&b.element),
                        start_inclusive: a.start_inclusive,
                        end_inclusive: a.end_inclusive,
                    }))
                } else {
                    FType::Any
                }
            }

            (FType::Function(a), FType::Function(b)) => {
                if a.params.len() == b.params.len() && a.variadic == b.variadic {
                    FType::Function(Arc::new(FunctionType {
                        return_type: a.return_type.min_super(&b.return_type),
                        params: joined_params(a, b, FType::min_super),
                        variadic: a.variadic,
                    }))
                } else {
                    FType::Any
                }
            }

            _ => FType::Any,
        }
    }

    /// Greatest common subtype of `self` and `other`.
    pub fn max_sub(&self, other: &FType) -> FType {
        if self == other {
            return self.clone();
        }
        match (self, other) {
            (FType::Any | FType::Var(_), t) | (t, FType::Any | FType::Var(_)) => t.clone(),
            (FType::Null, _) | (_, FType::Null) => FType::Null,

            (FType::Number(a), FType::Number(b)) => match (a, b) {
                (NumberKind::Number, k) | (k, NumberKind::Number) => FType::Number(*k),
                // `integer` and `double` share no inhabitant type.
                _ => FType::Null,
            },

            (FType::Date | FType::Time, FType::DateTime)
            | (FType::DateTime, FType::Date | FType::Time) => FType::DateTime,

            (FType::List(a), FType::List(b)) => FType::List(Arc::new(ListType {
                element: a.element.max_sub(&b.element),
            })),

            (FType::Context(a), FType::Context(b)) => {
                // The meet must satisfy both shapes: union of members, with
                // shared names meeting pointwise.
                let mut members = a.members.clone();
                for (name, ty) in &b.members {
                    match members.get_mut(name) {
                        Some(existing) => *existing = existing.max_sub(ty),
                        None => {
                            members.insert(name.clone(), ty.clone());
                        }
                    }
                }
                FType::Context(Arc::new(ContextType { members }))
            }

            (FType::Range(a), FType::Range(b)) => {
                let compatible = (a.start_inclusive, a.end_inclusive)
                    == (b.start_inclusive, b.end_inclusive)
                    || (b.start_inclusive.is_none() && b.end_inclusive.is_none());
                if compatible {
                    FType::Range(Arc::new(RangeType {
                        element: a.element.max_sub(&b.element),
                        start_inclusive: a.start_inclusive,
                        end_inclusive: a.end_inclusive,
                    }))
                } else {
                    FType::Null
                }
            }

            (FType::Function(a), FType::Function(b)) => {
                if a.params.len() == b.params.len() && a.variadic == b.variadic {
                    FType::Function(Arc::new(FunctionType {
                        return_type: a.return_type.max_sub(&b.return_type),
                        params: joined_params(a, b, FType::max_sub),
                        variadic: a.variadic,
                    }))
                } else {
                    FType::Null
                }
            }

            _ => FType::Null,
        }
    }

    /// Element type exposed by iteration: a list or range yields its
    /// element, `any` yields `any`, and every other type yields itself (a
    /// singleton).
    pub fn element_type(&self) -> FType {
        match self {
            FType::List(list) => list.element.clone(),
            FType::Range(range) => range.element.clone(),
            _ => self.clone(),
        }
    }
}

fn joined_params(
    a: &FunctionType,
    b: &FunctionType,
    join: impl Fn(&FType, &FType) -> FType,
) -> Vec<Param> {
    a.params
        .iter()
        .zip(&b.params)
        .map(|(pa, pb)| Param {
            name: if pa.name == pb.name {
                pa.name.clone()
            } else {
                None
            },
            ty: join(&pa.ty, &pb.ty),
        })
        .collect()
}

/// Fold of [`FType::min_super`] over a slice; the empty fold is `any`.
pub fn min_super_type(types: &[FType]) -> FType {
    match types {
        [] => FType::Any,
        [first, rest @ ..] => rest.iter().fold(first.clone(), |acc, t| acc.min_super(t)),
    }
}

/// Fold of [`FType::max_sub`] over a slice; the empty fold is `null`.
pub fn max_sub_type(types: &[FType]) -> FType {
    match types {
        [] => FType::Null,
        [first, rest @ ..] => rest.iter().fold(first.clone(), |acc, t| acc.max_sub(t)),
    }
}

/// Common element type of a group of iterable types: the join of the slice,
/// unwrapped to its element when it settles on a list or range.
pub fn element_type(types: &[FType]) -> FType {
    min_super_type(types).element_type()
}

#[cfg(test)]
#[path = "../tests/lattice_tests.rs"]
mod tests;
