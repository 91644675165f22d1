use super::*;

#[test]
fn test_scalar_names() {
    assert_eq!(FType::Any.name(), "any");
    assert_eq!(FType::Null.name(), "null");
    assert_eq!(FType::Boolean.name(), "boolean");
    assert_eq!(FType::NUMBER.name(), "number");
    assert_eq!(FType::INTEGER.name(), "number");
    assert_eq!(FType::DateTime.name(), "date and time");
    assert_eq!(FType::DayTimeDuration.name(), "day and time duration");
    assert_eq!(FType::YearMonthDuration.name(), "year and month duration");
}

#[test]
fn test_display_forms() {
    assert_eq!(FType::list(FType::String).to_string(), "list<string>");
    assert_eq!(
        FType::context([("a", FType::String)]).to_string(),
        "context<a:string>"
    );
    assert_eq!(FType::range(FType::NUMBER).to_string(), "range<number>");
    assert_eq!(
        FType::range_with(FType::NUMBER, Some(true), None).to_string(),
        "range[<number>"
    );
    assert_eq!(
        FType::range_with(FType::NUMBER, Some(false), Some(true)).to_string(),
        "range(]<number>"
    );
    assert_eq!(
        FType::function(FunctionType::named(
            FType::NUMBER,
            [("a", FType::NUMBER)]
        ))
        .to_string(),
        "function<a:number>->number"
    );
    assert_eq!(
        FType::function(FunctionType::new(FType::String, [FType::String, FType::INTEGER]))
            .to_string(),
        "function<string,integer>->string"
    );
}

#[test]
fn test_variadic_display_marks_tail() {
    let sig = FunctionType::new(FType::Var(TypeVar::A), [FType::list(FType::Var(TypeVar::A))])
        .with_variadic_tail();
    assert_eq!(FType::function(sig).to_string(), "function<list<A>..>->A");
}

#[test]
fn test_type_var_display() {
    assert_eq!(TypeVar(0).to_string(), "A");
    assert_eq!(TypeVar(25).to_string(), "Z");
    assert_eq!(TypeVar(26).to_string(), "T26");
}

#[test]
fn test_context_equality_ignores_member_order() {
    let ab = FType::context([("a", FType::String), ("b", FType::NUMBER)]);
    let ba = FType::context([("b", FType::NUMBER), ("a", FType::String)]);
    assert_eq!(ab, ba);
}

#[test]
fn test_empty_context_is_default_wildcard() {
    assert_eq!(
        FType::empty_context(),
        FType::context(Vec::<(String, FType)>::new())
    );
}

#[test]
fn test_function_equality_is_structural() {
    let a = FType::function(FunctionType::new(FType::String, [FType::NUMBER]));
    let b = FType::function(FunctionType::new(FType::String, [FType::NUMBER]));
    assert_eq!(a, b);
    let variadic = FType::function(
        FunctionType::new(FType::String, [FType::list(FType::NUMBER)]).with_variadic_tail(),
    );
    let plain = FType::function(FunctionType::new(FType::String, [FType::list(FType::NUMBER)]));
    assert_ne!(variadic, plain);
}

#[test]
fn test_param_type_clamps_and_unwraps_variadic_tail() {
    let sig = FunctionType::new(
        FType::list(FType::Var(TypeVar::A)),
        [FType::Var(TypeVar::A), FType::list(FType::Var(TypeVar::A))],
    )
    .with_variadic_tail();
    assert_eq!(sig.param_type(0), Some(&FType::Var(TypeVar::A)));
    // Exact tail index sees the whole list, overflow sees the element.
    assert_eq!(sig.param_type(1), Some(&FType::Var(TypeVar::A)));
    assert_eq!(sig.param_type(99), Some(&FType::Var(TypeVar::A)));

    let fixed = FunctionType::new(FType::String, [FType::String, FType::INTEGER]);
    assert_eq!(fixed.param_type(5), Some(&FType::INTEGER));
}

#[test]
fn test_contains_var() {
    assert!(FType::Var(TypeVar::A).contains_var());
    assert!(FType::list(FType::Var(TypeVar::B)).contains_var());
    assert!(FType::range(FType::Var(TypeVar::A)).contains_var());
    assert!(FType::context([("k", FType::Var(TypeVar::A))]).contains_var());
    assert!(!FType::list(FType::String).contains_var());

    let sig = FunctionType::new(FType::Boolean, [FType::Var(TypeVar::A)]);
    assert!(sig.is_template());
    let concrete = FunctionType::new(FType::Boolean, [FType::String]);
    assert!(!concrete.is_template());
}

#[test]
fn test_function_wildcard_shape() {
    let any = FunctionType::any();
    assert!(any.is_wildcard());
    assert!(any.variadic);
    assert_eq!(any.return_type, FType::Any);
    assert_eq!(any.params.len(), 1);
    assert_eq!(any.params[0].ty, FType::list_any());
}
