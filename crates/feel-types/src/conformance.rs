//! Graded conversion and conformance between types.
//!
//! Compatibility is not a flat yes/no: every admissible pair of types gets a
//! [`Conversion`] grade, and the grades order candidate overloads during
//! resolution. The relation is reflexive at `Equal`, and anything that grades
//! at all is accepted by [`FType::can_convert_to`]; the stricter
//! [`FType::conforms_to`] keeps only the assignment-safe grades.

use crate::types::{FType, NumberKind};

/// How much coercion a source type needs to reach a target type.
///
/// Grades are ordered from cheapest to most expensive; the derived `Ord`
/// is what overload scoring ranks by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Conversion {
    /// Structurally the same type.
    Equal,
    /// Safe without any runtime change of representation.
    Conforms,
    /// Needs a representation change, but loses nothing.
    Converts,
    /// Allowed, but may discard information (e.g. a date gaining a
    /// synthetic midnight time).
    Lossy,
}

impl Conversion {
    /// Numeric rank used by overload scoring.
    pub fn rank(self) -> u8 {
        match self {
            Self::Equal => 0,
            Self::Conforms => 1,
            Self::Converts => 2,
            Self::Lossy => 3,
        }
    }
}

impl FType {
    /// The grade at which `self` converts to `target`, or `None` when the
    /// pair is inadmissible.
    pub fn conversion(&self, target: &FType) -> Option<Conversion> {
        use Conversion::*;

        if self == target {
            return Some(Equal);
        }
        match (self, target) {
            // Everything reaches `any`, and a type variable in target
            // position is an unconstrained slot that accepts anything.
            (_, FType::Any) | (_, FType::Var(_)) => Some(Conforms),
            // A variable in source position carries no concrete shape, so it
            // reaches nothing else.
            (FType::Var(_), _) => None,
            // `null` inhabits every type.
            (FType::Null, _) => Some(Conforms),

            (FType::Number(s), FType::Number(t)) => match (s, t) {
                (NumberKind::Integer | NumberKind::Double, NumberKind::Number) => Some(Conforms),
                (NumberKind::Integer, NumberKind::Double) => Some(Conforms),
                (NumberKind::Number, NumberKind::Double) => Some(Converts),
                // `number` and `double` never narrow to `integer`.
                _ => None,
            },

            (FType::Date, FType::DateTime) => Some(Lossy),
            (FType::DateTime, FType::Date | FType::Time) => Some(Converts),

            (FType::List(s), FType::List(t)) => {
                match s.element.conversion(&t.element)? {
                    // Covariance is cheap to state but still reshapes every
                    // element, so a conforming element grades the list as a
                    // whole conversion.
                    Equal => Some(Equal),
                    Conforms | Converts => Some(Converts),
                    Lossy => Some(Lossy),
                }
            }

            (FType::Context(s), FType::Context(t)) => {
                // Width subtyping: the source may carry extra members, but
                // every member the target requires must be present and
                // convertible. The context grades at its worst member.
                let mut worst = Equal;
                for (name, required) in &t.members {
                    let found = s.members.get(name)?;
                    worst = worst.max(found.conversion(required)?);
                }
                Some(worst)
            }

            (FType::Range(s), FType::Range(t)) => {
                let wildcard = t.start_inclusive.is_none() && t.end_inclusive.is_none();
                if !wildcard
                    && (s.start_inclusive != t.start_inclusive
                        || s.end_inclusive != t.end_inclusive)
                {
                    return None;
                }
                s.element.conversion(&t.element)
            }

            (FType::Function(s), FType::Function(t)) => {
                // Function compatibility is nominal: only structural equality
                // (handled above), the wildcard target, and the one template
                // shape whose return type is a bare variable.
                if t.is_wildcard() {
                    Some(Conforms)
                } else if s.is_wildcard() && matches!(t.return_type, FType::Var(_)) {
                    Some(Conforms)
                } else {
                    None
                }
            }

            _ => None,
        }
    }

    /// True when `self` reaches `target` at any grade.
    pub fn can_convert_to(&self, target: &FType) -> bool {
        self.conversion(target).is_some()
    }

    /// True when `self` reaches `target` without a representation change,
    /// i.e. grades at `Equal` or `Conforms`.
    pub fn conforms_to(&self, target: &FType) -> bool {
        matches!(
            self.conversion(target),
            Some(Conversion::Equal | Conversion::Conforms)
        )
    }
}

#[cfg(test)]
#[path = "../tests/conformance_tests.rs"]
mod tests;
