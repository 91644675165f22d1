//! Member (dot-access) tables per type.
//!
//! Path expressions resolve `value.member` against these tables. Scalars
//! expose fixed projections; lists additionally lift every member of their
//! element type pointwise, so `people.name` on a `list<context<name:string>>`
//! is a `list<string>`.

use indexmap::IndexMap;

use crate::types::{FType, FunctionType};

type Members = IndexMap<String, FType>;

fn table<const N: usize>(entries: [(&str, FType); N]) -> Members {
    entries
        .into_iter()
        .map(|(name, ty)| (name.to_owned(), ty))
        .collect()
}

impl FType {
    /// Named members reachable from a value of this type.
    pub fn members(&self) -> Members {
        match self {
            FType::String => table([
                ("trim", FType::String),
                ("strip", FType::String),
                ("length", FType::INTEGER),
                ("isEmpty", FType::Boolean),
                ("isBlank", FType::Boolean),
                ("upperCase", FType::String),
                ("lowerCase", FType::String),
            ]),
            FType::Date => table([
                ("year", FType::INTEGER),
                ("lengthOfYear", FType::INTEGER),
                ("isLeapYear", FType::Boolean),
                ("dayOfYear", FType::INTEGER),
                ("month", FType::INTEGER),
                ("dayOfMonth", FType::INTEGER),
                ("day", FType::INTEGER),
                ("weekday", FType::INTEGER),
                ("epochDay", FType::INTEGER),
                ("value", FType::INTEGER),
            ]),
            FType::Time => table([
                ("hour", FType::INTEGER),
                ("minute", FType::INTEGER),
                ("second", FType::INTEGER),
                ("time offset", FType::DayTimeDuration),
                ("timezone", FType::INTEGER),
            ]),
            FType::DateTime => table([
                ("date", FType::Date),
                ("time", FType::Time),
                ("year", FType::INTEGER),
                ("month", FType::INTEGER),
                ("day", FType::INTEGER),
                ("weekday", FType::INTEGER),
                ("hour", FType::INTEGER),
                ("minute", FType::INTEGER),
                ("second", FType::INTEGER),
                ("time offset", FType::INTEGER),
                ("timezone", FType::INTEGER),
                ("epochSecond", FType::INTEGER),
                ("value", FType::INTEGER),
            ]),
            FType::DayTimeDuration => table([
                ("days", FType::INTEGER),
                ("hours", FType::INTEGER),
                ("minutes", FType::INTEGER),
                ("seconds", FType::INTEGER),
                // total seconds
                ("value", FType::INTEGER),
            ]),
            FType::YearMonthDuration => table([
                ("years", FType::INTEGER),
                ("months", FType::INTEGER),
                // total months
                ("value", FType::INTEGER),
            ]),
            FType::List(list) => {
                let mut members = table([
                    ("size", FType::INTEGER),
                    ("isEmpty", FType::Boolean),
                    ("isNotEmpty", FType::Boolean),
                    (
                        "contains",
                        FType::function(FunctionType::new(
                            FType::Boolean,
                            [list.element.clone()],
                        )),
                    ),
                ]);
                // Pointwise lift: [{x:1}, {x:2}].x = [1, 2]
                for (name, ty) in list.element.members() {
                    members.insert(name, FType::list(ty));
                }
                members
            }
            FType::Context(ctx) => ctx.members.clone(),
            FType::Range(range) => {
                let mut members = table([
                    ("start included", FType::Boolean),
                    ("end included", FType::Boolean),
                ]);
                let unconstrained =
                    range.start_inclusive.is_none() && range.end_inclusive.is_none();
                if unconstrained || range.start_inclusive.is_some() {
                    members.insert("start".to_owned(), range.element.clone());
                }
                if unconstrained || range.end_inclusive.is_some() {
                    members.insert("end".to_owned(), range.element.clone());
                }
                members
            }
            FType::Function(fun) => {
                let mut members = table([
                    ("returnType", FType::String),
                    ("parameterTypes", FType::list(FType::String)),
                ]);
                if fun.params.iter().any(|p| p.name.is_some()) {
                    members.insert("parameterNames".to_owned(), FType::list(FType::String));
                }
                members
            }
            _ => Members::default(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/members_tests.rs"]
mod tests;
