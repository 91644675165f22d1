//! Runtime values and the capability traits for opaque ones.
//!
//! Scalars and collections are plain data. Ranges and functions are opaque
//! host objects behind trait objects; each self-reports its [`FType`], and
//! classification defers to conformance between the reported type and the
//! declared one.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::types::FType;

/// Numeric payload with its representation preserved.
///
/// `Integer` and `Double` classify into the corresponding refinements;
/// `Decimal` is exact and classifies only into the `number` family type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumberValue {
    Integer(i64),
    Double(f64),
    Decimal(Decimal),
}

/// Calendar duration counted in whole months.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthsDuration {
    pub total_months: i64,
}

impl MonthsDuration {
    pub fn new(years: i64, months: i64) -> Self {
        Self {
            total_months: years * 12 + months,
        }
    }

    pub fn years(&self) -> i64 {
        self.total_months / 12
    }

    pub fn months(&self) -> i64 {
        self.total_months % 12
    }
}

/// An opaque interval value. Implementations report their precise range
/// type; the endpoints are surfaced for member access.
pub trait RangeValue: Send + Sync {
    fn range_type(&self) -> FType;
    fn start(&self) -> Option<Value>;
    fn end(&self) -> Option<Value>;
    fn start_included(&self) -> bool;
    fn end_included(&self) -> bool;
}

/// An opaque callable value reporting its signature.
pub trait FunctionValue: Send + Sync {
    fn function_type(&self) -> FType;
    fn name(&self) -> Option<&str> {
        None
    }
}

/// A FEEL runtime value.
#[derive(Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    String(String),
    Number(NumberValue),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    DayTimeDuration(TimeDelta),
    YearMonthDuration(MonthsDuration),
    List(Vec<Value>),
    Context(IndexMap<String, Value>),
    Range(Arc<dyn RangeValue>),
    Function(Arc<dyn FunctionValue>),
}

impl Value {
    pub fn integer(n: i64) -> Self {
        Self::Number(NumberValue::Integer(n))
    }

    pub fn double(n: f64) -> Self {
        Self::Number(NumberValue::Double(n))
    }

    pub fn decimal(n: Decimal) -> Self {
        Self::Number(NumberValue::Decimal(n))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => fmt::Debug::fmt(b, f),
            Self::String(s) => fmt::Debug::fmt(s, f),
            Self::Number(n) => fmt::Debug::fmt(n, f),
            Self::Date(d) => fmt::Debug::fmt(d, f),
            Self::DateTime(dt) => fmt::Debug::fmt(dt, f),
            Self::Time(t) => fmt::Debug::fmt(t, f),
            Self::DayTimeDuration(d) => fmt::Debug::fmt(d, f),
            Self::YearMonthDuration(d) => fmt::Debug::fmt(d, f),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Context(members) => f.debug_map().entries(members).finish(),
            Self::Range(range) => write!(f, "range({})", range.range_type()),
            Self::Function(fun) => write!(f, "function({})", fun.function_type()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::double(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::decimal(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Self::Time(v)
    }
}

impl From<TimeDelta> for Value {
    fn from(v: TimeDelta) -> Self {
        Self::DayTimeDuration(v)
    }
}

impl From<MonthsDuration> for Value {
    fn from(v: MonthsDuration) -> Self {
        Self::YearMonthDuration(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
