//! Values yielded by a type's accessor table.

use std::borrow::Cow;
use std::fmt;

/// A field value read through [`EnhanceEnum::field`].
///
/// Rendered to text with [`Display`](fmt::Display) before the emptiness
/// rule is applied, so `Int(0)` yields `"0"` and `Text("")` counts as absent.
///
/// [`EnhanceEnum::field`]: crate::EnhanceEnum::field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
	Text(Cow<'static, str>),
	Int(i64),
	UInt(u64),
	Bool(bool),
	Char(char),
}

impl FieldValue {
	pub const fn text(s: &'static str) -> Self {
		Self::Text(Cow::Borrowed(s))
	}

	/// Renders the value without allocating for borrowed text.
	pub fn render(&self) -> Cow<'_, str> {
		match self {
			Self::Text(s) => Cow::Borrowed(s.as_ref()),
			other => Cow::Owned(other.to_string()),
		}
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(s) => f.write_str(s),
			Self::Int(n) => write!(f, "{n}"),
			Self::UInt(n) => write!(f, "{n}"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Char(c) => write!(f, "{c}"),
		}
	}
}

impl From<&'static str> for FieldValue {
	fn from(s: &'static str) -> Self {
		Self::text(s)
	}
}

impl From<String> for FieldValue {
	fn from(s: String) -> Self {
		Self::Text(Cow::Owned(s))
	}
}

impl From<bool> for FieldValue {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<char> for FieldValue {
	fn from(c: char) -> Self {
		Self::Char(c)
	}
}

macro_rules! impl_from_int {
	($variant:ident: $($ty:ty),*) => {
		$(
			impl From<$ty> for FieldValue {
				fn from(n: $ty) -> Self {
					Self::$variant(n.into())
				}
			}
		)*
	};
}

impl_from_int!(Int: i8, i16, i32, i64);
impl_from_int!(UInt: u8, u16, u32, u64);
