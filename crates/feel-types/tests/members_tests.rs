use super::*;
use crate::types::{FType, FunctionType};

#[test]
fn test_scalars_without_members() {
    assert!(FType::Any.members().is_empty());
    assert!(FType::Null.members().is_empty());
    assert!(FType::Boolean.members().is_empty());
    assert!(FType::NUMBER.members().is_empty());
}

#[test]
fn test_string_members() {
    let members = FType::String.members();
    assert_eq!(members.get("length"), Some(&FType::INTEGER));
    assert_eq!(members.get("upperCase"), Some(&FType::String));
    assert_eq!(members.get("isBlank"), Some(&FType::Boolean));
}

#[test]
fn test_date_members() {
    let members = FType::Date.members();
    assert_eq!(members.get("year"), Some(&FType::INTEGER));
    assert_eq!(members.get("isLeapYear"), Some(&FType::Boolean));
    assert_eq!(members.get("weekday"), Some(&FType::INTEGER));
    assert_eq!(members.get("epochDay"), Some(&FType::INTEGER));
}

#[test]
fn test_time_members() {
    let members = FType::Time.members();
    assert_eq!(members.get("hour"), Some(&FType::INTEGER));
    assert_eq!(members.get("time offset"), Some(&FType::DayTimeDuration));
    assert_eq!(members.get("timezone"), Some(&FType::INTEGER));
}

#[test]
fn test_date_time_members_project_views() {
    let members = FType::DateTime.members();
    assert_eq!(members.get("date"), Some(&FType::Date));
    assert_eq!(members.get("time"), Some(&FType::Time));
    assert_eq!(members.get("epochSecond"), Some(&FType::INTEGER));
}

#[test]
fn test_duration_members() {
    let day = FType::DayTimeDuration.members();
    assert_eq!(day.get("days"), Some(&FType::INTEGER));
    assert_eq!(day.get("seconds"), Some(&FType::INTEGER));

    let month = FType::YearMonthDuration.members();
    assert_eq!(month.get("years"), Some(&FType::INTEGER));
    assert_eq!(month.get("months"), Some(&FType::INTEGER));
}

#[test]
fn test_list_members_lift_element_members() {
    let people = FType::list(FType::context([
        ("name", FType::String),
        ("age", FType::INTEGER),
    ]));
    let members = people.members();
    assert_eq!(members.get("size"), Some(&FType::INTEGER));
    assert_eq!(members.get("isEmpty"), Some(&FType::Boolean));
    assert_eq!(
        members.get("contains"),
        Some(&FType::function(FunctionType::new(
            FType::Boolean,
            [people.element_type()]
        )))
    );
    // [{name:"a"}, {name:"b"}].name is a list of names.
    assert_eq!(members.get("name"), Some(&FType::list(FType::String)));
    assert_eq!(members.get("age"), Some(&FType::list(FType::INTEGER)));
}

#[test]
fn test_context_members_are_its_own() {
    let ctx = FType::context([("a", FType::String), ("b", FType::NUMBER)]);
    let members = ctx.members();
    assert_eq!(members.get("a"), Some(&FType::String));
    assert_eq!(members.get("b"), Some(&FType::NUMBER));
    assert!(FType::empty_context().members().is_empty());
}

#[test]
fn test_range_members_follow_boundary_modes() {
    let unconstrained = FType::range(FType::NUMBER).members();
    assert_eq!(unconstrained.get("start included"), Some(&FType::Boolean));
    assert_eq!(unconstrained.get("start"), Some(&FType::NUMBER));
    assert_eq!(unconstrained.get("end"), Some(&FType::NUMBER));

    let start_only = FType::range_with(FType::NUMBER, Some(true), None).members();
    assert_eq!(start_only.get("start"), Some(&FType::NUMBER));
    assert_eq!(start_only.get("end"), None);

    let end_only = FType::range_with(FType::NUMBER, None, Some(false)).members();
    assert_eq!(end_only.get("start"), None);
    assert_eq!(end_only.get("end"), Some(&FType::NUMBER));
}

#[test]
fn test_function_members() {
    let unnamed = FType::function(FunctionType::new(FType::String, [FType::NUMBER]));
    let members = unnamed.members();
    assert_eq!(members.get("returnType"), Some(&FType::String));
    assert_eq!(
        members.get("parameterTypes"),
        Some(&FType::list(FType::String))
    );
    assert_eq!(members.get("parameterNames"), None);

    let named = FType::function(FunctionType::named(FType::String, [("n", FType::NUMBER)]));
    assert_eq!(
        named.members().get("parameterNames"),
        Some(&FType::list(FType::String))
    );
}
