use super::*;
use crate::types::{FType, TypeVar};

#[test]
fn test_lookup_by_name() {
    assert!(builtin("substring").is_some());
    assert!(builtin("years and months duration").is_some());
    assert!(builtin("no such function").is_none());
}

#[test]
fn test_every_builtin_has_function_signatures() {
    for entry in builtins() {
        assert!(!entry.signatures.is_empty(), "{}", entry.name);
        for signature in &entry.signatures {
            assert!(
                matches!(signature, FType::Function(_)),
                "{}: {signature}",
                entry.name
            );
        }
    }
}

#[test]
fn test_overload_counts() {
    assert_eq!(builtin("date").map(|b| b.signatures.len()), Some(3));
    assert_eq!(builtin("time").map(|b| b.signatures.len()), Some(4));
    assert_eq!(builtin("before").map(|b| b.signatures.len()), Some(4));
    assert_eq!(builtin("not").map(|b| b.signatures.len()), Some(1));
    assert_eq!(builtin("sort").map(|b| b.signatures.len()), Some(3));
}

#[test]
fn test_min_is_the_generic_pick_shape() {
    let min = builtin("min").unwrap();
    let FType::Function(first) = &min.signatures[0] else {
        panic!("min has a function signature");
    };
    assert_eq!(first.return_type, FType::Var(TypeVar::A));
    assert_eq!(first.params[0].ty, FType::list(FType::Var(TypeVar::A)));
    assert!(!first.variadic);

    let FType::Function(second) = &min.signatures[1] else {
        panic!("min has a variadic signature");
    };
    assert!(second.variadic);
}

#[test]
fn test_only_extremum_family_returns_a_bare_variable() {
    for entry in builtins() {
        for signature in &entry.signatures {
            let FType::Function(fun) = signature else {
                continue;
            };
            if matches!(fun.return_type, FType::Var(_)) {
                assert!(
                    entry.name == "min" || entry.name == "max",
                    "{} returns a bare variable",
                    entry.name
                );
            }
        }
    }
}

#[test]
fn test_named_parameter_signatures() {
    let sort = builtin("sort").unwrap();
    let FType::Function(with_precedes) = &sort.signatures[2] else {
        panic!("sort has a precedes overload");
    };
    assert_eq!(with_precedes.param_index("list"), Some(0));
    assert_eq!(with_precedes.param_index("precedes"), Some(1));

    let get_value = builtin("get value").unwrap();
    let FType::Function(sig) = &get_value.signatures[0] else {
        panic!("get value has a signature");
    };
    assert_eq!(sig.param_index("context"), Some(0));
    assert_eq!(sig.param_index("key"), Some(1));
    assert_eq!(sig.params[0].ty, FType::empty_context());
}

#[test]
fn test_registration_order_is_stable() {
    let names: Vec<&str> = builtins().map(|b| b.name).collect();
    let date = names.iter().position(|n| *n == "date").unwrap();
    let not = names.iter().position(|n| *n == "not").unwrap();
    let get_entries = names.iter().position(|n| *n == "get entries").unwrap();
    assert!(date < not);
    assert!(not < get_entries);
    assert_eq!(names.last(), Some(&"get entries"));
}
