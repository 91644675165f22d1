use super::*;
use crate::types::FunctionType;

#[test]
fn test_join_identities() {
    assert_eq!(FType::Null.min_super(&FType::String), FType::String);
    assert_eq!(FType::String.min_super(&FType::Null), FType::String);
    assert_eq!(FType::Any.min_super(&FType::String), FType::Any);
    assert_eq!(FType::String.min_super(&FType::String), FType::String);
}

#[test]
fn test_meet_identities() {
    assert_eq!(FType::Any.max_sub(&FType::String), FType::String);
    assert_eq!(FType::String.max_sub(&FType::Any), FType::String);
    assert_eq!(FType::Null.max_sub(&FType::String), FType::Null);
    assert_eq!(FType::String.max_sub(&FType::String), FType::String);
}

#[test]
fn test_numeric_join_and_meet() {
    assert_eq!(FType::INTEGER.min_super(&FType::DOUBLE), FType::NUMBER);
    assert_eq!(FType::INTEGER.min_super(&FType::NUMBER), FType::NUMBER);
    assert_eq!(FType::NUMBER.max_sub(&FType::INTEGER), FType::INTEGER);
    assert_eq!(FType::NUMBER.max_sub(&FType::DOUBLE), FType::DOUBLE);
    // The refinements share no inhabitant.
    assert_eq!(FType::INTEGER.max_sub(&FType::DOUBLE), FType::Null);
}

#[test]
fn test_unrelated_scalars_collapse_to_extremes() {
    assert_eq!(FType::String.min_super(&FType::NUMBER), FType::Any);
    assert_eq!(FType::String.max_sub(&FType::NUMBER), FType::Null);
    assert_eq!(FType::Boolean.min_super(&FType::Date), FType::Any);
}

#[test]
fn test_temporal_join_meets_projection() {
    // The date-time carries strictly more information than either view.
    assert_eq!(FType::Date.min_super(&FType::DateTime), FType::Date);
    assert_eq!(FType::DateTime.min_super(&FType::Date), FType::Date);
    assert_eq!(FType::Time.min_super(&FType::DateTime), FType::Time);
    assert_eq!(FType::Date.max_sub(&FType::DateTime), FType::DateTime);
    assert_eq!(FType::Time.max_sub(&FType::DateTime), FType::DateTime);
    assert_eq!(FType::Date.min_super(&FType::Time), FType::Any);
}

#[test]
fn test_list_joins_pointwise() {
    let integers = FType::list(FType::INTEGER);
    let doubles = FType::list(FType::DOUBLE);
    assert_eq!(integers.min_super(&doubles), FType::list(FType::NUMBER));
    assert_eq!(integers.max_sub(&doubles), FType::list(FType::Null));
    assert_eq!(
        integers.min_super(&FType::list_any()),
        FType::list_any()
    );
}

#[test]
fn test_context_join_intersects_members() {
    let ab = FType::context([("a", FType::INTEGER), ("b", FType::String)]);
    let ac = FType::context([("a", FType::DOUBLE), ("c", FType::Boolean)]);
    assert_eq!(ab.min_super(&ac), FType::context([("a", FType::NUMBER)]));

    let disjoint = FType::context([("x", FType::String)]);
    assert_eq!(ab.min_super(&disjoint), FType::empty_context());
}

#[test]
fn test_context_meet_unions_members() {
    let ab = FType::context([("a", FType::NUMBER), ("b", FType::String)]);
    let ac = FType::context([("a", FType::INTEGER), ("c", FType::Boolean)]);
    assert_eq!(
        ab.max_sub(&ac),
        FType::context([
            ("a", FType::INTEGER),
            ("b", FType::String),
            ("c", FType::Boolean),
        ])
    );
}

#[test]
fn test_range_join_respects_boundaries() {
    let closed_ints = FType::range_with(FType::INTEGER, Some(true), Some(true));
    let closed_doubles = FType::range_with(FType::DOUBLE, Some(true), Some(true));
    assert_eq!(
        closed_ints.min_super(&closed_doubles),
        FType::range_with(FType::NUMBER, Some(true), Some(true))
    );

    let open = FType::range_with(FType::INTEGER, Some(false), Some(false));
    assert_eq!(closed_ints.min_super(&open), FType::Any);
    assert_eq!(closed_ints.max_sub(&open), FType::Null);

    // An unconstrained right operand keeps the left's boundary modes.
    assert_eq!(
        closed_ints.min_super(&FType::range(FType::NUMBER)),
        FType::range_with(FType::NUMBER, Some(true), Some(true))
    );
}

#[test]
fn test_function_join_requires_matching_shape() {
    let f = FType::function(FunctionType::new(FType::INTEGER, [FType::INTEGER]));
    let g = FType::function(FunctionType::new(FType::DOUBLE, [FType::DOUBLE]));
    assert_eq!(
        f.min_super(&g),
        FType::function(FunctionType::new(FType::NUMBER, [FType::NUMBER]))
    );

    let binary = FType::function(FunctionType::new(FType::INTEGER, [FType::INTEGER, FType::INTEGER]));
    assert_eq!(f.min_super(&binary), FType::Any);
    assert_eq!(f.max_sub(&binary), FType::Null);
}

#[test]
fn test_fold_over_slices() {
    assert_eq!(min_super_type(&[]), FType::Any);
    assert_eq!(max_sub_type(&[]), FType::Null);
    assert_eq!(
        min_super_type(&[FType::INTEGER, FType::DOUBLE, FType::Null]),
        FType::NUMBER
    );
    assert_eq!(
        min_super_type(&[FType::String, FType::NUMBER]),
        FType::Any
    );
    assert_eq!(
        max_sub_type(&[FType::Any, FType::NUMBER, FType::INTEGER]),
        FType::INTEGER
    );
}

#[test]
fn test_element_type() {
    assert_eq!(FType::list(FType::String).element_type(), FType::String);
    assert_eq!(FType::range(FType::INTEGER).element_type(), FType::INTEGER);
    assert_eq!(FType::String.element_type(), FType::String);
    assert_eq!(FType::Any.element_type(), FType::Any);
}

#[test]
fn test_element_type_folds_over_a_slice() {
    assert_eq!(
        element_type(&[FType::list(FType::INTEGER), FType::list(FType::DOUBLE)]),
        FType::NUMBER
    );
    assert_eq!(
        element_type(&[
            FType::range(FType::INTEGER),
            FType::range(FType::NUMBER),
        ]),
        FType::NUMBER
    );
    // Mixing shapes collapses the join to the top type.
    assert_eq!(
        element_type(&[FType::list(FType::String), FType::String]),
        FType::Any
    );
    assert_eq!(element_type(&[]), FType::Any);
}
