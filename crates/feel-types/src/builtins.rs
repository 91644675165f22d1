//! Signatures of the standard library functions (DMN tables 72 through 81).
//!
//! Each entry carries one or more overloads. Registration order inside an
//! entry is significant: when overload resolution ends in a tie, the
//! earliest registered signature wins.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::types::{FType, FunctionType, TypeVar};

/// A named builtin with its overload signatures, in precedence order.
pub struct Builtin {
    pub name: &'static str,
    pub signatures: Vec<FType>,
}

fn sig(return_type: FType, params: impl IntoIterator<Item = FType>) -> FType {
    FType::function(FunctionType::new(return_type, params))
}

/// Signature whose last parameter is the variadic tail.
fn sig_vars(return_type: FType, params: impl IntoIterator<Item = FType>) -> FType {
    FType::function(FunctionType::new(return_type, params).with_variadic_tail())
}

fn sig_named(
    return_type: FType,
    params: impl IntoIterator<Item = (&'static str, FType)>,
) -> FType {
    FType::function(FunctionType::named(return_type, params))
}

fn sig_named_vars(
    return_type: FType,
    params: impl IntoIterator<Item = (&'static str, FType)>,
) -> FType {
    FType::function(FunctionType::named(return_type, params).with_variadic_tail())
}

static REGISTRY: Lazy<IndexMap<&'static str, Builtin>> = Lazy::new(|| {
    let a = || FType::Var(TypeVar::A);
    let list_a = || FType::list(a());
    let range_a = || FType::range(a());
    let entry = |name: &'static str, signatures: Vec<FType>| (name, Builtin { name, signatures });

    IndexMap::from_iter([
        // Conversion functions
        entry(
            "date",
            vec![
                sig(FType::Date, [FType::String]),
                sig(FType::Date, [FType::DateTime]),
                sig(FType::Date, [FType::INTEGER, FType::INTEGER, FType::INTEGER]),
            ],
        ),
        entry(
            "date and time",
            vec![
                sig(FType::DateTime, [FType::String]),
                sig(FType::DateTime, [FType::Date, FType::Time]),
            ],
        ),
        entry(
            "time",
            vec![
                sig(FType::Time, [FType::String]),
                sig(FType::Time, [FType::DateTime]),
                sig(FType::Time, [FType::INTEGER, FType::INTEGER, FType::INTEGER]),
                sig(
                    FType::Time,
                    [FType::INTEGER, FType::INTEGER, FType::DayTimeDuration],
                ),
            ],
        ),
        entry(
            "number",
            vec![sig(FType::NUMBER, [FType::String, FType::String, FType::String])],
        ),
        entry("string", vec![sig(FType::String, [FType::Any])]),
        entry(
            "duration",
            vec![sig(FType::DayTimeDuration, [FType::String])],
        ),
        entry(
            "years and months duration",
            vec![
                sig(FType::YearMonthDuration, [FType::String]),
                sig(FType::YearMonthDuration, [FType::Date, FType::Date]),
            ],
        ),
        // Boolean functions
        entry("not", vec![sig(FType::Boolean, [FType::Boolean])]),
        // String functions
        entry(
            "substring",
            vec![
                sig(FType::String, [FType::String, FType::INTEGER]),
                sig(FType::String, [FType::String, FType::INTEGER, FType::INTEGER]),
            ],
        ),
        entry("string length", vec![sig(FType::INTEGER, [FType::String])]),
        entry("upper case", vec![sig(FType::String, [FType::String])]),
        entry("lower case", vec![sig(FType::String, [FType::String])]),
        entry(
            "substring before",
            vec![sig(FType::String, [FType::String, FType::String])],
        ),
        entry(
            "substring after",
            vec![sig(FType::String, [FType::String, FType::String])],
        ),
        entry(
            "replace",
            vec![
                sig(FType::String, [FType::String, FType::String]),
                sig(FType::String, [FType::String, FType::String, FType::String]),
            ],
        ),
        entry(
            "contains",
            vec![sig(FType::Boolean, [FType::String, FType::String])],
        ),
        entry(
            "starts with",
            vec![sig(FType::Boolean, [FType::String, FType::String])],
        ),
        entry(
            "ends with",
            vec![sig(FType::Boolean, [FType::String, FType::String])],
        ),
        entry(
            "matches",
            vec![
                sig(FType::Boolean, [FType::String, FType::String]),
                sig(FType::Boolean, [FType::String, FType::String, FType::String]),
            ],
        ),
        entry(
            "split",
            vec![sig(FType::list(FType::String), [FType::String, FType::String])],
        ),
        // List functions
        entry(
            "list contains",
            vec![sig(FType::Boolean, [list_a(), a()])],
        ),
        entry("count", vec![sig(FType::INTEGER, [FType::list_any()])]),
        entry(
            "min",
            vec![sig(a(), [list_a()]), sig_vars(a(), [list_a()])],
        ),
        entry(
            "max",
            vec![sig(a(), [list_a()]), sig_vars(a(), [list_a()])],
        ),
        entry(
            "sum",
            vec![
                sig(FType::NUMBER, [FType::list(FType::NUMBER)]),
                sig_vars(FType::NUMBER, [FType::list(FType::NUMBER)]),
            ],
        ),
        entry(
            "mean",
            vec![
                sig(FType::NUMBER, [FType::list(FType::NUMBER)]),
                sig_vars(FType::NUMBER, [FType::list(FType::NUMBER)]),
            ],
        ),
        entry(
            "all",
            vec![
                sig(FType::Boolean, [FType::list(FType::Boolean)]),
                sig_vars(FType::Boolean, [FType::list(FType::Boolean)]),
            ],
        ),
        entry(
            "any",
            vec![
                sig(FType::Boolean, [FType::list(FType::Boolean)]),
                sig_vars(FType::Boolean, [FType::list(FType::Boolean)]),
            ],
        ),
        entry(
            "sublist",
            vec![
                sig(list_a(), [list_a(), FType::INTEGER]),
                sig(list_a(), [list_a(), FType::INTEGER, FType::INTEGER]),
            ],
        ),
        entry(
            "append",
            vec![sig_vars(list_a(), [list_a(), list_a()])],
        ),
        entry(
            "concatenate",
            vec![sig_vars(list_a(), [FType::list(list_a())])],
        ),
        entry(
            "insert before",
            vec![sig(list_a(), [list_a(), FType::INTEGER, a()])],
        ),
        entry(
            "remove",
            vec![sig(list_a(), [list_a(), FType::INTEGER])],
        ),
        entry("reverse", vec![sig(list_a(), [list_a()])]),
        entry("index of", vec![sig(FType::INTEGER, [list_a(), a()])]),
        entry(
            "union",
            vec![sig_vars(list_a(), [FType::list(list_a())])],
        ),
        entry("distinct values", vec![sig(list_a(), [list_a()])]),
        entry(
            "flatten",
            vec![sig(FType::list_any(), [FType::list_any()])],
        ),
        entry(
            "product",
            vec![
                sig(FType::NUMBER, [FType::list(FType::NUMBER)]),
                sig_vars(FType::NUMBER, [FType::list(FType::NUMBER)]),
            ],
        ),
        entry(
            "median",
            vec![
                sig(FType::NUMBER, [FType::list(FType::NUMBER)]),
                sig_vars(FType::NUMBER, [FType::list(FType::NUMBER)]),
            ],
        ),
        entry(
            "stddev",
            vec![
                sig(FType::NUMBER, [FType::list(FType::NUMBER)]),
                sig_vars(FType::NUMBER, [FType::list(FType::NUMBER)]),
            ],
        ),
        entry(
            "mode",
            vec![
                sig(FType::list(FType::NUMBER), [FType::list(FType::NUMBER)]),
                sig_vars(FType::list(FType::NUMBER), [FType::list(FType::NUMBER)]),
            ],
        ),
        // Numeric functions
        entry(
            "decimal",
            vec![sig(FType::NUMBER, [FType::NUMBER, FType::INTEGER])],
        ),
        entry("floor", vec![sig(FType::INTEGER, [FType::NUMBER])]),
        entry("ceiling", vec![sig(FType::INTEGER, [FType::NUMBER])]),
        entry(
            "abs",
            vec![
                sig(FType::NUMBER, [FType::NUMBER]),
                sig(FType::DayTimeDuration, [FType::DayTimeDuration]),
                sig(FType::YearMonthDuration, [FType::YearMonthDuration]),
            ],
        ),
        entry(
            "modulo",
            vec![sig(FType::NUMBER, [FType::NUMBER, FType::NUMBER])],
        ),
        entry("sqrt", vec![sig(FType::NUMBER, [FType::NUMBER])]),
        entry("log", vec![sig(FType::NUMBER, [FType::NUMBER])]),
        entry("exp", vec![sig(FType::NUMBER, [FType::NUMBER])]),
        entry("odd", vec![sig(FType::Boolean, [FType::NUMBER])]),
        entry("even", vec![sig(FType::Boolean, [FType::NUMBER])]),
        // Comparison
        entry(
            "is",
            vec![sig_named(FType::Boolean, [("value1", a()), ("value2", a())])],
        ),
        // Range functions
        entry(
            "before",
            vec![
                sig(FType::Boolean, [a(), a()]),
                sig(FType::Boolean, [a(), range_a()]),
                sig(FType::Boolean, [range_a(), a()]),
                sig(FType::Boolean, [range_a(), range_a()]),
            ],
        ),
        entry(
            "after",
            vec![
                sig(FType::Boolean, [a(), a()]),
                sig(FType::Boolean, [a(), range_a()]),
                sig(FType::Boolean, [range_a(), a()]),
                sig(FType::Boolean, [range_a(), range_a()]),
            ],
        ),
        entry(
            "meets",
            vec![sig(FType::Boolean, [range_a(), range_a()])],
        ),
        entry(
            "met by",
            vec![sig(FType::Boolean, [range_a(), range_a()])],
        ),
        entry(
            "overlaps",
            vec![sig(FType::Boolean, [range_a(), range_a()])],
        ),
        entry(
            "overlaps before",
            vec![sig(FType::Boolean, [range_a(), range_a()])],
        ),
        entry(
            "overlaps after",
            vec![sig(FType::Boolean, [range_a(), range_a()])],
        ),
        entry(
            "finishes",
            vec![
                sig(FType::Boolean, [a(), range_a()]),
                sig(FType::Boolean, [range_a(), range_a()]),
            ],
        ),
        entry(
            "finished by",
            vec![
                sig(FType::Boolean, [range_a(), a()]),
                sig(FType::Boolean, [range_a(), range_a()]),
            ],
        ),
        entry(
            "starts",
            vec![
                sig(FType::Boolean, [a(), range_a()]),
                sig(FType::Boolean, [range_a(), range_a()]),
            ],
        ),
        entry(
            "started by",
            vec![
                sig(FType::Boolean, [range_a(), a()]),
                sig(FType::Boolean, [range_a(), range_a()]),
            ],
        ),
        entry(
            "coincides",
            vec![
                sig(FType::Boolean, [a(), a()]),
                sig(FType::Boolean, [range_a(), range_a()]),
            ],
        ),
        // Temporal functions
        entry(
            "day of year",
            vec![
                sig(FType::INTEGER, [FType::Date]),
                sig(FType::INTEGER, [FType::DateTime]),
            ],
        ),
        entry(
            "day of week",
            vec![
                sig(FType::INTEGER, [FType::Date]),
                sig(FType::INTEGER, [FType::DateTime]),
            ],
        ),
        entry(
            "month of year",
            vec![
                sig(FType::String, [FType::Date]),
                sig(FType::String, [FType::DateTime]),
            ],
        ),
        entry(
            "week of year",
            vec![
                sig(FType::INTEGER, [FType::Date]),
                sig(FType::INTEGER, [FType::DateTime]),
            ],
        ),
        // Sort
        entry(
            "sort",
            vec![
                sig_named(list_a(), [("list", list_a())]),
                sig_named_vars(list_a(), [("list", list_a())]),
                sig_named(
                    list_a(),
                    [
                        ("list", list_a()),
                        ("precedes", sig(FType::Boolean, [a(), a()])),
                    ],
                ),
            ],
        ),
        // Context functions
        entry(
            "get value",
            vec![sig_named(
                FType::Any,
                [("context", FType::empty_context()), ("key", FType::String)],
            )],
        ),
        entry(
            "get entries",
            vec![sig_named(
                FType::list(FType::context([
                    ("key", FType::String),
                    ("value", FType::Any),
                ])),
                [("context", FType::empty_context())],
            )],
        ),
    ])
});

/// All builtins in registration order.
pub fn builtins() -> impl Iterator<Item = &'static Builtin> {
    REGISTRY.values()
}

/// Look up a builtin by its FEEL name.
pub fn builtin(name: &str) -> Option<&'static Builtin> {
    REGISTRY.get(name)
}

#[cfg(test)]
#[path = "../tests/builtins_tests.rs"]
mod tests;
