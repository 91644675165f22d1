//! The FEEL type variant set.
//!
//! `FType` is a closed, recursive sum type: scalar singletons, the numeric
//! family with its two refinements, the temporal family, and the structural
//! types (list, context, range, function). Concrete types are immutable
//! values shared via `Arc` and compared structurally; `Var` is a placeholder
//! that may only appear inside a function template before binding.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Refinements of the numeric scalar family.
///
/// `Number` is the least-specific member; `Integer` and `Double` widen into
/// it. `Number` itself never narrows back into a refinement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Number,
    Integer,
    Double,
}

/// A type variable inside a generic function template.
///
/// Display names follow the conventional single letters (`A`, `B`, ...);
/// identifiers past `Z` render as `T26`, `T27`, and so on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVar(pub u32);

impl TypeVar {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", (b'A' + self.0 as u8) as char)
        } else {
            write!(f, "T{}", self.0)
        }
    }
}

/// Homogeneous sequence type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListType {
    pub element: FType,
}

/// Structural record type with ordered, named members.
///
/// Member order is kept for deterministic display; equality ignores it
/// (`IndexMap` compares as a set of entries).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ContextType {
    pub members: IndexMap<String, FType>,
}

impl ContextType {
    /// The distinguished empty context. Zero required members also make this
    /// the unconstrained context wildcard: any context satisfies it.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Interval type over an ordered element type.
///
/// The boundary flags are tri-state: `None` leaves the boundary mode
/// unconstrained, `Some(true)`/`Some(false)` pin inclusive/exclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeType {
    pub element: FType,
    pub start_inclusive: Option<bool>,
    pub end_inclusive: Option<bool>,
}

/// One declared parameter of a function signature.
///
/// Built-in functions and function definitions carry parameter names; bare
/// type declarations do not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Option<String>,
    pub ty: FType,
}

impl Param {
    pub fn unnamed(ty: FType) -> Self {
        Self { name: None, ty }
    }

    pub fn named(name: impl Into<String>, ty: FType) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }
}

/// Callable signature.
///
/// A signature containing at least one [`TypeVar`] is a *template*; one
/// containing none is *concrete*. When `variadic` is set the last declared
/// parameter is the tail: its type must be a list, and every actual argument
/// past the fixed arity is matched against the tail's element type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionType {
    pub return_type: FType,
    pub params: Vec<Param>,
    pub variadic: bool,
}

impl FunctionType {
    pub fn new(return_type: FType, params: impl IntoIterator<Item = FType>) -> Self {
        Self {
            return_type,
            params: params.into_iter().map(Param::unnamed).collect(),
            variadic: false,
        }
    }

    pub fn named<S: Into<String>>(
        return_type: FType,
        params: impl IntoIterator<Item = (S, FType)>,
    ) -> Self {
        Self {
            return_type,
            params: params
                .into_iter()
                .map(|(name, ty)| Param::named(name, ty))
                .collect(),
            variadic: false,
        }
    }

    /// Mark the last declared parameter as the variadic tail.
    pub fn with_variadic_tail(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// The function wildcard: `function<list<any>..> -> any`, accepting any
    /// argument list. Used as the unconstrained declared type for values
    /// known only to be callable.
    pub fn any() -> Self {
        Self::new(FType::Any, [FType::list(FType::Any)]).with_variadic_tail()
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Self::any()
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Declared type matched by the actual argument at `index`.
    ///
    /// Indices past the fixed arity clamp to the last parameter; a variadic
    /// tail additionally unwraps to its element type, since that is the type
    /// each extra argument must satisfy.
    pub fn param_type(&self, index: usize) -> Option<&FType> {
        let last = self.params.len().checked_sub(1)?;
        let slot = index.min(last);
        let ty = &self.params[slot].ty;
        if slot == last && self.variadic {
            if let FType::List(list) = ty {
                return Some(&list.element);
            }
        }
        Some(ty)
    }

    /// Position of a named parameter, if this signature carries names.
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params
            .iter()
            .position(|p| p.name.as_deref() == Some(name))
    }

    /// True when any type variable occurs in the signature.
    pub fn is_template(&self) -> bool {
        self.return_type.contains_var() || self.params.iter().any(|p| p.ty.contains_var())
    }
}

/// A FEEL static type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FType {
    /// Universal supertype; everything converts to it, it converts to nothing.
    Any,
    /// Bottom-like literal type; converts to everything.
    Null,
    Boolean,
    String,
    Number(NumberKind),
    Date,
    DateTime,
    Time,
    DayTimeDuration,
    YearMonthDuration,
    List(Arc<ListType>),
    Context(Arc<ContextType>),
    Range(Arc<RangeType>),
    Function(Arc<FunctionType>),
    /// Placeholder inside a function template; never part of a concrete type.
    Var(TypeVar),
}

impl FType {
    pub const NUMBER: Self = Self::Number(NumberKind::Number);
    pub const INTEGER: Self = Self::Number(NumberKind::Integer);
    pub const DOUBLE: Self = Self::Number(NumberKind::Double);

    pub fn list(element: FType) -> Self {
        Self::List(Arc::new(ListType { element }))
    }

    /// The list wildcard `list<any>`.
    pub fn list_any() -> Self {
        Self::list(Self::Any)
    }

    pub fn context<S: Into<String>>(members: impl IntoIterator<Item = (S, FType)>) -> Self {
        Self::Context(Arc::new(ContextType {
            members: members
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        }))
    }

    pub fn empty_context() -> Self {
        Self::Context(Arc::new(ContextType::empty()))
    }

    pub fn range(element: FType) -> Self {
        Self::range_with(element, None, None)
    }

    pub fn range_with(element: FType, start_inclusive: Option<bool>, end_inclusive: Option<bool>) -> Self {
        Self::Range(Arc::new(RangeType {
            element,
            start_inclusive,
            end_inclusive,
        }))
    }

    /// The range wildcard `range<any>` with unconstrained boundaries.
    pub fn range_any() -> Self {
        Self::range(Self::Any)
    }

    pub fn function(signature: FunctionType) -> Self {
        Self::Function(Arc::new(signature))
    }

    pub fn var(id: u32) -> Self {
        Self::Var(TypeVar(id))
    }

    /// The FEEL name of the type's family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any | Self::Var(_) => "any",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number(_) => "number",
            Self::Date => "date",
            Self::DateTime => "date and time",
            Self::Time => "time",
            Self::DayTimeDuration => "day and time duration",
            Self::YearMonthDuration => "year and month duration",
            Self::List(_) => "list",
            Self::Context(_) => "context",
            Self::Range(_) => "range",
            Self::Function(_) => "function",
        }
    }

    /// True when a type variable occurs anywhere in this type.
    pub fn contains_var(&self) -> bool {
        match self {
            Self::Var(_) => true,
            Self::List(list) => list.element.contains_var(),
            Self::Range(range) => range.element.contains_var(),
            Self::Context(ctx) => ctx.members.values().any(FType::contains_var),
            Self::Function(fun) => {
                fun.return_type.contains_var() || fun.params.iter().any(|p| p.ty.contains_var())
            }
            _ => false,
        }
    }
}

impl fmt::Display for FType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(NumberKind::Integer) => f.write_str("integer"),
            Self::Number(NumberKind::Double) => f.write_str("double"),
            Self::Var(var) => write!(f, "{var}"),
            Self::List(list) => write!(f, "list<{}>", list.element),
            Self::Context(ctx) => {
                f.write_str("context<")?;
                for (i, (name, ty)) in ctx.members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{name}:{ty}")?;
                }
                f.write_str(">")
            }
            Self::Range(range) => {
                f.write_str("range")?;
                if let Some(start) = range.start_inclusive {
                    f.write_str(if start { "[" } else { "(" })?;
                }
                if let Some(end) = range.end_inclusive {
                    f.write_str(if end { "]" } else { ")" })?;
                }
                write!(f, "<{}>", range.element)
            }
            Self::Function(fun) => {
                f.write_str("function<")?;
                for (i, param) in fun.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if let Some(name) = &param.name {
                        write!(f, "{name}:")?;
                    }
                    write!(f, "{}", param.ty)?;
                    if fun.variadic && i + 1 == fun.params.len() {
                        f.write_str("..")?;
                    }
                }
                write!(f, ">->{}", fun.return_type)
            }
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
