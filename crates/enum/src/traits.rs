use crate::catalog::VariantMeta;
use crate::config::FieldResolution;
use crate::field::FieldValue;
use crate::resolve;

/// Value, description and group resolution for a closed enum type.
///
/// Implementors describe their variants ([`VARIANTS`](Self::VARIANTS),
/// [`ordinal`](Self::ordinal), [`name`](Self::name)) and expose an accessor
/// table through [`field`](Self::field). The remaining methods derive
/// metadata from those, never failing:
///
/// - [`value`](Self::value): the name when [`FieldResolution::name_as_value`]
///   is enabled, else the value field, else the ordinal.
/// - [`desc`](Self::desc): the description field, else the name.
/// - [`group`](Self::group): the group field, else `None`.
///
/// Any of them may be overridden; [`resolve`](Self::resolve) goes through
/// the overridden [`value`](Self::value).
///
/// Usually derived:
///
/// ```
/// use enhance_enum::EnhanceEnum;
///
/// #[derive(Debug, PartialEq, EnhanceEnum)]
/// #[enhance(value_field = "code", desc_field = "label")]
/// enum Color {
/// 	#[enhance(rename = "RED", code = 1, label = "红色")]
/// 	Red,
/// 	#[enhance(rename = "GREEN", code = 2, label = "绿色")]
/// 	Green,
/// }
///
/// assert_eq!(Color::Red.value(), "1");
/// assert_eq!(Color::Red.desc(), "红色");
/// assert_eq!(Color::resolve("2"), Some(&Color::Green));
/// assert_eq!(Color::resolve("GREEN"), Some(&Color::Green));
/// assert!(!Color::is_member("99"));
/// ```
pub trait EnhanceEnum: Sized + 'static {
	/// Field names consulted by the derived metadata.
	const FIELDS: FieldResolution = FieldResolution::DEFAULT;

	/// Every variant, in declaration order.
	const VARIANTS: &'static [Self];

	/// Zero-based declaration position.
	fn ordinal(&self) -> usize;

	/// Declared name, unique within the type.
	fn name(&self) -> &'static str;

	/// Reads the accessor-table entry called `field`.
	///
	/// Unknown names, entries this variant does not carry and entries of an
	/// unusable type all return `None`.
	fn field(&self, field: &str) -> Option<FieldValue> {
		let _ = field;
		None
	}

	fn value(&self) -> String {
		resolve::default_value(self)
	}

	/// [`value`](Self::value) as an `i32`, or `i32::MIN` if it does not parse.
	fn value_as_int(&self) -> i32 {
		resolve::parse_i32_or_min(&self.value())
	}

	/// [`value`](Self::value) as an `i8`, or `i8::MIN` if it does not parse.
	fn value_as_byte(&self) -> i8 {
		resolve::parse_i8_or_min(&self.value())
	}

	fn desc(&self) -> String {
		resolve::default_desc(self)
	}

	fn group(&self) -> Option<String> {
		resolve::default_group(self)
	}

	/// Snapshot of this variant's resolved metadata.
	fn meta(&self) -> VariantMeta {
		VariantMeta::of(self)
	}

	/// Finds the variant named `token`, else the first whose value is `token`.
	fn resolve(token: &str) -> Option<&'static Self> {
		resolve::resolve(token)
	}

	fn is_member(token: &str) -> bool {
		Self::resolve(token).is_some()
	}
}
