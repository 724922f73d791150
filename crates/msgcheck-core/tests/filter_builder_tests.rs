#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::Duration;
use msgcheck_core::filter::PropertyFilter;
use msgcheck_core::{
    build, build_metadata, ConverterSettings, DynamicValue, ErrorKind, FilterOperation,
    FilterSettings, FilterSpec, MessageConverter, MetadataFilter, PredicateNode, ValueFilter,
    WireMessage, WireValue,
};

fn leaf<'a>(node: Option<&'a PredicateNode>) -> &'a msgcheck_core::Predicate {
    node.and_then(PredicateNode::as_leaf).expect("leaf predicate")
}

#[test]
fn test_well_formed_pairings_build() {
    let spec = FilterSpec::new()
        .with("string", ValueFilter::simple(FilterOperation::NotEqual, "abc"))
        .with("int", ValueFilter::simple(FilterOperation::NotMore, "10"))
        .with("date", ValueFilter::simple(FilterOperation::Less, "2020-01-01"))
        .with("time", ValueFilter::simple(FilterOperation::NotLess, "10:15"))
        .with("string2", ValueFilter::simple(FilterOperation::NotLike, "a+"))
        .with("string3", ValueFilter::simple(FilterOperation::Wildcard, "a*"))
        .with("enumInt", ValueFilter::set(FilterOperation::NotIn, ["1", "-1"]))
        .with("bool", ValueFilter::null(FilterOperation::NotEmpty))
        .with("long", ValueFilter::null(FilterOperation::Equal));
    let tree = build(&spec, &FilterSettings::default()).unwrap();

    assert_eq!(tree.len(), 9);
    assert_eq!(leaf(tree.get("string")).condition(), "!=abc");
    assert_eq!(leaf(tree.get("int")).condition(), "<=10");
    assert_eq!(leaf(tree.get("string2")).condition(), "NOT_LIKE a+");
    assert_eq!(leaf(tree.get("enumInt")).condition(), "NOT_IN [1, -1]");
    assert_eq!(leaf(tree.get("bool")).condition(), "NOT_EMPTY");
    assert_eq!(leaf(tree.get("long")).condition(), "is null");
}

#[test]
fn test_field_order_is_preserved() {
    let spec = FilterSpec::new()
        .with("z", ValueFilter::simple(FilterOperation::Equal, "1"))
        .with("a", ValueFilter::simple(FilterOperation::Equal, "2"))
        .with("m", ValueFilter::simple(FilterOperation::Equal, "3"));
    let tree = build(&spec, &FilterSettings::default()).unwrap();
    let names: Vec<&str> = tree.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn test_shape_mismatches_fail_at_build() {
    let cases = vec![
        (
            ValueFilter::simple(FilterOperation::In, "A"),
            "Operator IN cannot be used with single value operand: 'A'",
        ),
        (
            ValueFilter::simple(FilterOperation::Empty, "A"),
            "Operator EMPTY cannot be used with single value operand: 'A'",
        ),
        (
            ValueFilter::set(FilterOperation::Equal, ["A", "B"]),
            "Operator EQUAL cannot be used with value set operand: ['A', 'B']",
        ),
        (
            ValueFilter::null(FilterOperation::Like),
            "Operator LIKE cannot be used with null operand: null",
        ),
        (
            ValueFilter::Message {
                operation: FilterOperation::NotEqual,
                filter: FilterSpec::new(),
            },
            "Operator NOT_EQUAL cannot be used with message operand: {}",
        ),
    ];

    for (filter, expected) in cases {
        let spec = FilterSpec::new().with("field", filter);
        let err = build(&spec, &FilterSettings::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FilterShape);
        assert_eq!(err.code(), "ERR_FILTER_SHAPE");
        assert_eq!(err.message(), expected);
        assert_eq!(err.path_string(), "field");
    }
}

#[test]
fn test_operand_parse_failures_fail_at_build() {
    for (op, operand) in [
        (FilterOperation::More, "10,1"),
        (FilterOperation::Less, "2007-12-03T10-15:30"),
        (FilterOperation::Like, "(unclosed"),
        (FilterOperation::EqDecimalPrecision, "ten"),
        (FilterOperation::EqTimePrecision, "soon"),
    ] {
        let spec = FilterSpec::new().with(
            "outer",
            ValueFilter::message(FilterSpec::new().with("inner", ValueFilter::simple(op, operand))),
        );
        let err = build(&spec, &FilterSettings::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueParse, "{} {}", op, operand);
        assert_eq!(err.path_string(), "outer.inner");
    }
}

#[test]
fn test_precision_settings_flow_into_predicates() {
    let settings = FilterSettings::new()
        .with_decimal_precision("5E-3")
        .unwrap()
        .with_time_precision(Duration::seconds(5));
    let spec = FilterSpec::new()
        .with("decimal", ValueFilter::simple(FilterOperation::EqDecimalPrecision, "10.0"))
        .with("time", ValueFilter::simple(FilterOperation::EqTimePrecision, "10:15:30"));
    let tree = build(&spec, &settings).unwrap();

    let decimal = leaf(tree.get("decimal"));
    assert_eq!(decimal.condition(), "10.0 ± 0.005");
    assert!(decimal.validate(Some(&DynamicValue::from("10.005"))).unwrap());
    assert!(!decimal.validate(Some(&DynamicValue::from("10.006"))).unwrap());

    let time = leaf(tree.get("time"));
    assert!(time.validate(Some(&DynamicValue::from("10:15:35"))).unwrap());
    assert!(!time.validate(Some(&DynamicValue::from("10:15:36"))).unwrap());
}

#[test]
fn test_invalid_decimal_precision_setting() {
    let err = FilterSettings::new().with_decimal_precision("abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueParse);
}

#[test]
fn test_empty_filter_against_null_marker_follows_setting() {
    let schema = common::dictionary();
    let wire = WireMessage::new("Root").with_field("string", WireValue::Null);
    let dynamic = MessageConverter::new(ConverterSettings {
        use_null_marker: true,
        ..Default::default()
    })
    .convert(&wire, Some(&schema))
    .unwrap();
    let spec = FilterSpec::new().with("string", ValueFilter::null(FilterOperation::Empty));

    let lenient = build(&spec, &FilterSettings::new().with_null_value_as_empty(true)).unwrap();
    assert!(leaf(lenient.get("string"))
        .validate(dynamic.field("string"))
        .unwrap());

    let strict = build(&spec, &FilterSettings::default()).unwrap();
    assert!(!leaf(strict.get("string"))
        .validate(dynamic.field("string"))
        .unwrap());
}

#[test]
fn test_list_and_message_filters_mirror_message_shape() {
    let schema = common::dictionary();
    let wire = common::root_with_list(vec![common::nested("a"), common::nested("bcd")]);
    let dynamic = MessageConverter::default().convert(&wire, Some(&schema)).unwrap();

    let element = |op, value: &str| {
        ValueFilter::message(FilterSpec::new().with("field", ValueFilter::simple(op, value)))
    };
    let spec = FilterSpec::new().with(
        "complexList",
        ValueFilter::message(FilterSpec::new().with(
            "list",
            ValueFilter::list(vec![
                element(FilterOperation::Equal, "a"),
                element(FilterOperation::Wildcard, "b??"),
            ]),
        )),
    );
    let tree = build(&spec, &FilterSettings::default()).unwrap();
    assert_eq!(tree.predicate_count(), 2);

    let list_nodes = tree
        .get("complexList")
        .and_then(PredicateNode::as_message)
        .and_then(|t| t.get("list"))
        .and_then(PredicateNode::as_list)
        .unwrap();
    let actual_list = dynamic
        .field("complexList")
        .and_then(DynamicValue::as_message)
        .and_then(|m| m.field("list"))
        .and_then(DynamicValue::as_list)
        .unwrap();

    for (node, actual) in list_nodes.iter().zip(actual_list) {
        let predicate = leaf(node.as_message().unwrap().get("field"));
        let actual_field = actual.as_message().unwrap().field("field");
        assert!(predicate.validate(actual_field).unwrap(), "{}", predicate.condition());
    }
}

#[test]
fn test_metadata_filters_compile_per_property() {
    let filter = MetadataFilter::new()
        .with("session", FilterOperation::Like, "s[0-9]+")
        .with("seq", FilterOperation::More, "100");
    let predicates = build_metadata(&filter, &FilterSettings::default()).unwrap();

    let names: Vec<&str> = predicates.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["session", "seq"]);
    assert!(predicates["session"]
        .validate(Some(&DynamicValue::from("s42")))
        .unwrap());
    assert!(!predicates["seq"]
        .validate(Some(&DynamicValue::from("99")))
        .unwrap());

    let (_, first) = filter.iter().next().unwrap();
    assert_eq!(
        first,
        &PropertyFilter {
            operation: FilterOperation::Like,
            value: "s[0-9]+".to_string(),
        }
    );
}

#[test]
fn test_metadata_in_operator_needs_set() {
    let filter = MetadataFilter::new().with("session", FilterOperation::In, "s1");
    let err = build_metadata(&filter, &FilterSettings::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FilterShape);
    assert_eq!(err.path_string(), "session");
    assert_eq!(
        err.message(),
        "Operator IN cannot be used with single value operand: 's1'"
    );
}

#[test]
fn test_shape_error_names_nested_operand() {
    let spec = FilterSpec::new().with(
        "complex",
        ValueFilter::List {
            operation: FilterOperation::NotEqual,
            items: vec![
                ValueFilter::simple(FilterOperation::Equal, "x"),
                ValueFilter::message(
                    FilterSpec::new().with("n", ValueFilter::set(FilterOperation::In, ["A"])),
                ),
            ],
        },
    );
    let err = build(&spec, &FilterSettings::default()).unwrap_err();
    assert_eq!(
        err.message_with_path(),
        "Message path: complex, cause: Operator NOT_EQUAL cannot be used with list operand: ['x', {n: ['A']}]"
    );
}
