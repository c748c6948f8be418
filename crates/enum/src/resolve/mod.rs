//! Metadata derivation and reverse lookup.
//!
//! These are the default bodies of the [`EnhanceEnum`] methods. They stay
//! public so an implementor that overrides a method can still fall back to
//! the stock behavior.
//!
//! # Value resolution order
//!
//! 1. The variant name, when [`FieldResolution::name_as_value`] is enabled
//! 2. The value field from the accessor table, when present and non-empty
//! 3. The ordinal, as a decimal string
//!
//! Descriptions try the description field, then the name. Groups try the
//! group field and otherwise stay absent.
//!
//! [`FieldResolution::name_as_value`]: crate::FieldResolution::name_as_value

use std::any::type_name;

use crate::EnhanceEnum;
use crate::check;


/// Reads `field` and keeps it only when its rendering is non-empty.
fn read_field<T: EnhanceEnum>(variant: &T, field: &str) -> Option<String> {
	let value = variant.field(field)?;
	let text = value.render();
	check::is_not_empty(&text).then(|| text.into_owned())
}

pub fn default_value<T: EnhanceEnum>(variant: &T) -> String {
	let fields = T::FIELDS;
	if let Some(named) = fields.name_as_value.apply(variant.name()) {
		return named;
	}
	if let Some(value) = read_field(variant, fields.value_field) {
		return value;
	}
	tracing::trace!(
		domain = "enum",
		ty = type_name::<T>(),
		variant = variant.name(),
		field = fields.value_field,
		"value field absent; falling back to ordinal",
	);
	variant.ordinal().to_string()
}

pub fn default_desc<T: EnhanceEnum>(variant: &T) -> String {
	let field = T::FIELDS.desc_field;
	read_field(variant, field).unwrap_or_else(|| {
		tracing::trace!(
			domain = "enum",
			ty = type_name::<T>(),
			variant = variant.name(),
			field,
			"desc field absent; falling back to name",
		);
		variant.name().to_owned()
	})
}

pub fn default_group<T: EnhanceEnum>(variant: &T) -> Option<String> {
	read_field(variant, T::FIELDS.group_field)
}

pub fn parse_i32_or_min(value: &str) -> i32 {
	value.parse().unwrap_or(i32::MIN)
}

pub fn parse_i8_or_min(value: &str) -> i8 {
	value.parse().unwrap_or(i8::MIN)
}

/// Looks `token` up by name, then by computed value.
///
/// Names are matched exactly and win outright. Otherwise every variant's
/// [`value`](EnhanceEnum::value) is computed in declaration order and the
/// first exact match is returned, so when two variants share a value the
/// earlier one shadows the later. An empty token matches nothing.
pub fn resolve<T: EnhanceEnum>(token: &str) -> Option<&'static T> {
	if token.is_empty() {
		return None;
	}
	let variants = T::VARIANTS;
	variants
		.iter()
		.find(|v| v.name() == token)
		.or_else(|| variants.iter().find(|v| v.value() == token))
}
