//! Per-type field resolution configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnumError;

/// How a variant's name stands in for its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameAsValue {
	/// Values come from the value field, then the ordinal.
	#[default]
	Disabled,
	/// The name is the value, unchanged.
	AsIs,
	/// The lowercased name is the value.
	Lowercase,
	/// The uppercased name is the value.
	Uppercase,
}

impl NameAsValue {
	/// Applies the mode to `name`, or returns `None` when disabled.
	pub fn apply(self, name: &str) -> Option<String> {
		match self {
			Self::Disabled => None,
			Self::AsIs => Some(name.to_owned()),
			Self::Lowercase => Some(name.to_lowercase()),
			Self::Uppercase => Some(name.to_uppercase()),
		}
	}

	/// Parses a mode keyword. `"default"` is accepted as an alias of `as_is`.
	pub const fn parse(s: &str) -> Option<Self> {
		if bytes_eq(s, "disabled") {
			Some(Self::Disabled)
		} else if bytes_eq(s, "as_is") || bytes_eq(s, "default") {
			Some(Self::AsIs)
		} else if bytes_eq(s, "lowercase") {
			Some(Self::Lowercase)
		} else if bytes_eq(s, "uppercase") {
			Some(Self::Uppercase)
		} else {
			None
		}
	}

	/// Const-context [`parse`](Self::parse) used by the derive. Unknown
	/// keywords fail constant evaluation.
	#[doc(hidden)]
	pub const fn from_attr(s: &str) -> Self {
		match Self::parse(s) {
			Some(mode) => mode,
			None => panic!("name_as_value must be \"disabled\", \"as_is\", \"lowercase\" or \"uppercase\""),
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Disabled => "disabled",
			Self::AsIs => "as_is",
			Self::Lowercase => "lowercase",
			Self::Uppercase => "uppercase",
		}
	}
}

impl FromStr for NameAsValue {
	type Err = EnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| {
			EnumError::InvalidArgument(format!("unknown name_as_value mode: {s}"))
		})
	}
}

const fn bytes_eq(a: &str, b: &str) -> bool {
	let (a, b) = (a.as_bytes(), b.as_bytes());
	if a.len() != b.len() {
		return false;
	}
	let mut i = 0;
	while i < a.len() {
		if a[i] != b[i] {
			return false;
		}
		i += 1;
	}
	true
}

impl std::fmt::Display for NameAsValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which accessor-table entries supply a type's value, description and group.
///
/// Attached to a type through [`EnhanceEnum::FIELDS`]. Built in const
/// context by chaining the setters onto [`FieldResolution::DEFAULT`]:
///
/// ```
/// use enhance_enum::{FieldResolution, NameAsValue};
///
/// const FIELDS: FieldResolution = FieldResolution::DEFAULT
/// 	.value_field("code")
/// 	.desc_field("label");
/// assert_eq!(FIELDS.value_field, "code");
/// assert_eq!(FIELDS.group_field, "group");
/// assert_eq!(FIELDS.name_as_value, NameAsValue::Disabled);
/// ```
///
/// [`EnhanceEnum::FIELDS`]: crate::EnhanceEnum::FIELDS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldResolution {
	pub value_field: &'static str,
	/// Takes precedence over `value_field` unless disabled.
	pub name_as_value: NameAsValue,
	pub desc_field: &'static str,
	pub group_field: &'static str,
}

impl FieldResolution {
	pub const DEFAULT: Self = Self {
		value_field: "value",
		name_as_value: NameAsValue::Disabled,
		desc_field: "desc",
		group_field: "group",
	};

	pub const fn value_field(mut self, field: &'static str) -> Self {
		self.value_field = field;
		self
	}

	pub const fn name_as_value(mut self, mode: NameAsValue) -> Self {
		self.name_as_value = mode;
		self
	}

	pub const fn desc_field(mut self, field: &'static str) -> Self {
		self.desc_field = field;
		self
	}

	pub const fn group_field(mut self, field: &'static str) -> Self {
		self.group_field = field;
		self
	}
}

impl Default for FieldResolution {
	fn default() -> Self {
		Self::DEFAULT
	}
}
