use msgcheck_core::{
    FieldStructure, MessageStructure, SchemaDictionary, TargetType, WireMessage, WireValue,
};

/// Test dictionary shared by the converter and filter tests
///
/// `Root` carries one field per target type, an enum with aliases and two
/// levels of nested messages (`complex`, `complexList.list`).
#[allow(dead_code)]
pub fn dictionary() -> SchemaDictionary {
    SchemaDictionary::new("dictionary")
        .with_message(
            MessageStructure::new("Root")
                .with_field(FieldStructure::simple("string", TargetType::String))
                .with_field(FieldStructure::simple("bool", TargetType::Boolean))
                .with_field(FieldStructure::simple("byte", TargetType::Byte))
                .with_field(FieldStructure::simple("short", TargetType::Short))
                .with_field(FieldStructure::simple("int", TargetType::Integer))
                .with_field(FieldStructure::simple("long", TargetType::Long))
                .with_field(FieldStructure::simple("float", TargetType::Float))
                .with_field(FieldStructure::simple("double", TargetType::Double))
                .with_field(FieldStructure::simple("decimal", TargetType::BigDecimal))
                .with_field(FieldStructure::simple("char", TargetType::Character))
                .with_field(FieldStructure::simple("date", TargetType::LocalDate))
                .with_field(FieldStructure::simple("time", TargetType::LocalTime))
                .with_field(FieldStructure::simple("dateTime", TargetType::LocalDateTime))
                .with_field(
                    FieldStructure::simple("enumInt", TargetType::Integer)
                        .with_enum_alias("ONE", "1")
                        .with_enum_alias("MINUS_ONE", "-1"),
                )
                .with_field(FieldStructure::simple("stringList", TargetType::String).collection())
                .with_field(
                    FieldStructure::simple("decimalList", TargetType::BigDecimal).collection(),
                )
                .with_field(FieldStructure::complex("complex", "Nested"))
                .with_field(FieldStructure::complex("complexList", "ListHolder")),
        )
        .with_message(
            MessageStructure::new("ListHolder")
                .with_field(FieldStructure::complex("list", "Nested").collection()),
        )
        .with_message(
            MessageStructure::new("Nested")
                .with_field(FieldStructure::simple("field", TargetType::String))
                .with_field(
                    FieldStructure::simple("enumInt", TargetType::Integer)
                        .with_enum_alias("ONE", "1")
                        .with_enum_alias("MINUS_ONE", "-1"),
                ),
        )
}

/// The same dictionary, loaded from the JSON fixture
#[allow(dead_code)]
pub fn dictionary_from_fixture() -> SchemaDictionary {
    serde_json::from_str(include_str!("../fixtures/dictionary.json"))
        .expect("dictionary fixture should deserialize")
}

/// `Nested` wire message with a single `field`
#[allow(dead_code)]
pub fn nested(field: &str) -> WireMessage {
    WireMessage::new("Nested").with_field("field", field)
}

/// `Root` with `complexList.list` holding the given nested messages
#[allow(dead_code)]
pub fn root_with_list(items: Vec<WireMessage>) -> WireMessage {
    let list = WireValue::List(items.into_iter().map(WireValue::Message).collect());
    WireMessage::new("Root").with_field(
        "complexList",
        WireMessage::new("ListHolder").with_field("list", list),
    )
}
