//! Runtime classification: does a value inhabit a type, and what is the
//! most precise type of a value.

use crate::lattice::min_super_type;
use crate::types::{FType, NumberKind};
use crate::value::{NumberValue, Value};

impl FType {
    /// True when `value` inhabits this type.
    ///
    /// Contexts use width subtyping: extra members in the value are fine,
    /// every declared member must be present and inhabit its declared type.
    /// Opaque ranges and functions are judged by the type they report.
    pub fn is_instance(&self, value: &Value) -> bool {
        match self {
            FType::Any | FType::Var(_) => true,
            FType::Null => matches!(value, Value::Null),
            FType::Boolean => matches!(value, Value::Boolean(_)),
            FType::String => matches!(value, Value::String(_)),
            FType::Number(kind) => match value {
                Value::Number(n) => match kind {
                    NumberKind::Number => true,
                    NumberKind::Integer => matches!(n, NumberValue::Integer(_)),
                    NumberKind::Double => matches!(n, NumberValue::Double(_)),
                },
                _ => false,
            },
            FType::Date => matches!(value, Value::Date(_)),
            FType::DateTime => matches!(value, Value::DateTime(_)),
            FType::Time => matches!(value, Value::Time(_)),
            FType::DayTimeDuration => matches!(value, Value::DayTimeDuration(_)),
            FType::YearMonthDuration => matches!(value, Value::YearMonthDuration(_)),
            FType::List(list) => match value {
                Value::List(items) => items.iter().all(|item| list.element.is_instance(item)),
                _ => false,
            },
            FType::Context(ctx) => match value {
                Value::Context(members) => ctx.members.iter().all(|(name, ty)| {
                    members
                        .get(name)
                        .is_some_and(|member| ty.is_instance(member))
                }),
                _ => false,
            },
            FType::Range(_) => match value {
                Value::Range(range) => range.range_type().conforms_to(self),
                _ => false,
            },
            FType::Function(_) => match value {
                Value::Function(fun) => fun.function_type().conforms_to(self),
                _ => false,
            },
        }
    }

    /// Most precise static type of a runtime value.
    ///
    /// List elements are joined with [`FType::min_super`]; the empty list
    /// classifies as the list wildcard.
    pub fn of_value(value: &Value) -> FType {
        match value {
            Value::Null => FType::Null,
            Value::Boolean(_) => FType::Boolean,
            Value::String(_) => FType::String,
            Value::Number(NumberValue::Integer(_)) => FType::INTEGER,
            Value::Number(NumberValue::Double(_)) => FType::DOUBLE,
            Value::Number(NumberValue::Decimal(_)) => FType::NUMBER,
            Value::Date(_) => FType::Date,
            Value::DateTime(_) => FType::DateTime,
            Value::Time(_) => FType::Time,
            Value::DayTimeDuration(_) => FType::DayTimeDuration,
            Value::YearMonthDuration(_) => FType::YearMonthDuration,
            Value::List(items) => {
                if items.is_empty() {
                    return FType::list_any();
                }
                let elements: Vec<FType> = items.iter().map(FType::of_value).collect();
                FType::list(min_super_type(&elements))
            }
            Value::Context(members) => FType::context(
                members
                    .iter()
                    .map(|(name, member)| (name.clone(), FType::of_value(member))),
            ),
            Value::Range(range) => range.range_type(),
            Value::Function(fun) => fun.function_type(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod tests;
