#![allow(unused_crate_dependencies)]
//! Behavior of derived implementations.

use enhance_enum::{EnhanceEnum, FieldResolution, FieldValue, NameAsValue, VariantMeta, catalog, catalog_group};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, PartialEq, EnhanceEnum)]
#[enhance(value_field = "code", desc_field = "label")]
enum Color {
	#[enhance(rename = "RED", code = 1, label = "红色")]
	Red,
	#[enhance(rename = "GREEN", code = 2, label = "绿色")]
	Green,
}

#[derive(Debug, PartialEq, EnhanceEnum)]
enum Status {
	New,
	Active,
	Closed,
}

#[test]
fn color_scenario() {
	assert_eq!(Color::Red.value(), "1");
	assert_eq!(Color::Red.desc(), "红色");
	assert_eq!(Color::resolve("2"), Some(&Color::Green));
	assert_eq!(Color::resolve("GREEN"), Some(&Color::Green));
	assert!(!Color::is_member("99"));
	assert_eq!(Color::Red.value_as_int(), 1);
	assert_eq!(Color::Green.value_as_byte(), 2);
	assert_eq!(Color::Red.group(), None);
}

#[test]
fn status_scenario() {
	assert_eq!(Status::Active.value(), "1");
	assert_eq!(Status::Active.desc(), "Active");
	assert_eq!(Status::Closed.ordinal(), 2);
	assert_eq!(Status::resolve("0"), Some(&Status::New));
	assert_eq!(Status::resolve("Closed"), Some(&Status::Closed));
}

#[rstest]
#[case(Status::New)]
#[case(Status::Active)]
#[case(Status::Closed)]
fn unconfigured_type_uses_ordinal_and_name(#[case] status: Status) {
	assert_eq!(status.value(), status.ordinal().to_string());
	assert_eq!(status.desc(), status.name());
	assert_eq!(status.value_as_int(), status.ordinal() as i32);
}

#[test]
fn derived_config_matches_attributes() {
	assert_eq!(
		Color::FIELDS,
		FieldResolution::DEFAULT.value_field("code").desc_field("label")
	);
	assert_eq!(Status::FIELDS, FieldResolution::DEFAULT);
	assert_eq!(Color::VARIANTS, &[Color::Red, Color::Green]);
	assert_eq!(Color::Green.field("label"), Some(FieldValue::text("绿色")));
	assert_eq!(Color::Green.field("value"), None);
}

#[derive(Debug, PartialEq, EnhanceEnum)]
#[enhance(value_field = "code", name_as_value = "lowercase")]
enum Lowered {
	#[enhance(code = 10)]
	InStock,
	#[enhance(code = 20)]
	SoldOut,
}

#[derive(Debug, PartialEq, EnhanceEnum)]
#[enhance(name_as_value = "uppercase", skip_registry)]
enum Raised {
	InStock,
}

#[derive(Debug, PartialEq, EnhanceEnum)]
#[enhance(name_as_value = "as_is")]
enum Kept {
	InStock,
}

#[derive(Debug, PartialEq, EnhanceEnum)]
#[enhance(name_as_value = "default", skip_registry)]
enum Aliased {
	#[enhance(value = "ignored")]
	InStock,
}

#[test]
fn name_as_value_modes() {
	assert_eq!(Lowered::FIELDS.name_as_value, NameAsValue::Lowercase);
	assert_eq!(Lowered::InStock.value(), "instock");
	assert_eq!(Lowered::SoldOut.value(), "soldout");
	assert_eq!(Lowered::resolve("soldout"), Some(&Lowered::SoldOut));
	assert_eq!(Lowered::resolve("20"), None);
	assert_eq!(Lowered::InStock.value_as_int(), i32::MIN);

	assert_eq!(Raised::InStock.value(), "INSTOCK");
	assert_eq!(Kept::InStock.value(), "InStock");

	assert_eq!(Aliased::FIELDS.name_as_value, NameAsValue::AsIs);
	assert_eq!(Aliased::InStock.value(), "InStock");
}

#[derive(Debug, PartialEq, EnhanceEnum)]
enum Priority {
	#[enhance(value = "lo", desc = "Low priority", group = "routine")]
	Low,
	#[enhance(value = "  ", group = "routine")]
	Normal,
	#[enhance(value = "hi", desc = "null", group = "urgent")]
	High,
	#[enhance(value = 'x', group = "")]
	Blocker,
}

#[test]
fn default_field_names_and_empty_values() {
	assert_eq!(Priority::Low.value(), "lo");
	assert_eq!(Priority::Normal.value(), "1");
	assert_eq!(Priority::Blocker.value(), "x");

	assert_eq!(Priority::Low.desc(), "Low priority");
	assert_eq!(Priority::High.desc(), "High");

	assert_eq!(Priority::Low.group().as_deref(), Some("routine"));
	assert_eq!(Priority::High.group().as_deref(), Some("urgent"));
	assert_eq!(Priority::Blocker.group(), None);
}

#[derive(Debug, PartialEq, EnhanceEnum)]
#[enhance(skip_registry)]
enum Spacing {
	#[enhance(value = "\u{A0}", desc = "\u{2003}")]
	NoBreak,
}

#[test]
fn no_break_space_is_content() {
	assert_eq!(Spacing::NoBreak.value(), "\u{A0}");
	assert_eq!(Spacing::NoBreak.desc(), "NoBreak");
	assert_eq!(Spacing::resolve("\u{A0}"), Some(&Spacing::NoBreak));
}

#[derive(Debug, PartialEq, EnhanceEnum)]
#[enhance(value_field = "code", group_field = "kind", desc_field = "label")]
enum Measure {
	#[enhance(code = -1, kind = "signed", label = "below zero")]
	Negative,
	#[enhance(code = 0, kind = "signed")]
	Zero,
	#[enhance(code = 300, active = true)]
	Large,
}

#[test]
fn integer_fields_and_sentinels() {
	assert_eq!(Measure::Negative.value(), "-1");
	assert_eq!(Measure::Negative.value_as_int(), -1);
	assert_eq!(Measure::Negative.value_as_byte(), -1);
	assert_eq!(Measure::Zero.value(), "0");
	assert_eq!(Measure::Large.value_as_int(), 300);
	assert_eq!(Measure::Large.value_as_byte(), i8::MIN);
	assert_eq!(Measure::Large.field("active"), Some(FieldValue::Bool(true)));
	assert_eq!(Measure::resolve("-1"), Some(&Measure::Negative));
}

/// Two variants share a value; lookup by value returns the first declared.
#[derive(Debug, PartialEq, EnhanceEnum)]
enum Duplicated {
	#[enhance(value = "same")]
	First,
	#[enhance(value = "same")]
	Second,
}

#[test]
fn shared_value_resolves_to_first_declared() {
	assert_eq!(Duplicated::resolve("same"), Some(&Duplicated::First));
	assert_eq!(Duplicated::resolve("Second"), Some(&Duplicated::Second));
}

/// A variant name shadows another variant's value.
#[derive(Debug, PartialEq, EnhanceEnum)]
enum Shadowed {
	#[enhance(value = "B")]
	A,
	B,
}

#[test]
fn name_match_beats_value_match() {
	assert_eq!(Shadowed::resolve("B"), Some(&Shadowed::B));
	assert_eq!(Shadowed::resolve("1"), Some(&Shadowed::B));
}

#[derive(Debug, PartialEq, EnhanceEnum)]
enum Nothing {}

#[test]
fn empty_enum() {
	assert!(Nothing::VARIANTS.is_empty());
	assert_eq!(Nothing::resolve("0"), None);
	assert!(catalog::<Nothing>().is_empty());
}

#[test]
fn empty_and_unknown_tokens() {
	assert_eq!(Color::resolve(""), None);
	assert_eq!(Color::resolve("nonexistent-token"), None);
	assert_eq!(Color::resolve("red"), None);
	assert_eq!(Color::resolve(" 1"), None);
}

#[test]
fn catalog_serializes_for_display() {
	let entries = catalog::<Color>();
	assert_eq!(
		entries,
		vec![
			VariantMeta {
				name: "RED",
				ordinal: 0,
				value: "1".into(),
				desc: "红色".into(),
				group: None,
			},
			VariantMeta {
				name: "GREEN",
				ordinal: 1,
				value: "2".into(),
				desc: "绿色".into(),
				group: None,
			},
		]
	);

	let json = serde_json::to_value(&entries).unwrap();
	assert_eq!(
		json,
		serde_json::json!([
			{ "name": "RED", "ordinal": 0, "value": "1", "desc": "红色" },
			{ "name": "GREEN", "ordinal": 1, "value": "2", "desc": "绿色" },
		])
	);
}

#[test]
fn catalog_by_group() {
	let routine: Vec<_> = catalog_group::<Priority>("routine")
		.into_iter()
		.map(|m| m.name)
		.collect();
	assert_eq!(routine, ["Low", "Normal"]);
	assert!(catalog_group::<Priority>("missing").is_empty());

	let urgent = catalog_group::<Priority>("urgent");
	assert_eq!(urgent.len(), 1);
	assert_eq!(urgent[0], Priority::High.meta());
}

#[derive(Debug, PartialEq, EnhanceEnum)]
enum Answer {
	Undefined,
	#[enhance(rename = "null")]
	Nil,
}

#[test]
fn placeholder_names_stay_resolvable() {
	assert_eq!(Answer::resolve("Undefined"), Some(&Answer::Undefined));
	assert_eq!(Answer::resolve("null"), Some(&Answer::Nil));
	assert_eq!(Answer::Nil.desc(), "null");
}
