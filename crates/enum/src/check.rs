//! Emptiness predicates and precondition checks.
//!
//! The emptiness rule is stricter than [`str::is_empty`]: surrounding
//! control characters and whitespace are trimmed, zero-width spaces
//! (U+200B) and ideographic spaces (U+3000) are removed, and what remains
//! counts as empty when it is blank or spells `null` / `undefined` in any
//! letter case. Field values pass through this rule, so a field holding
//! `"null"` behaves exactly like a missing field.
//!
//! "Blank" uses the narrower whitespace set of [`is_separator_space`]: the
//! no-break spaces U+00A0, U+2007 and U+202F and the next-line control
//! U+0085 are content, not blank.
//!
//! The `require*` helpers return [`EnumError::InvalidArgument`] by default.
//! Each has a `_with` twin that takes the error constructor as a parameter.

use crate::error::{EnumError, Result};

/// Characters stripped from anywhere in the string before the blank test.
const INVISIBLE: [char; 2] = ['\u{200B}', '\u{3000}'];

/// Returns true if `s` is empty under the rule described in the module docs.
pub fn is_empty(s: &str) -> bool {
	let trimmed = s.trim_matches(|c: char| c <= ' ');
	if !trimmed.contains(INVISIBLE) {
		return is_blank_or_placeholder(trimmed);
	}
	let visible: String = trimmed.chars().filter(|c| !INVISIBLE.contains(c)).collect();
	is_blank_or_placeholder(&visible)
}

fn is_blank_or_placeholder(s: &str) -> bool {
	s.chars().all(is_separator_space)
		|| s.eq_ignore_ascii_case("null")
		|| s.eq_ignore_ascii_case("undefined")
}

/// Whitespace for the blank test: ASCII whitespace, the information
/// separators U+001C to U+001F, and Unicode space, line and paragraph
/// separators other than the no-break spaces.
pub fn is_separator_space(c: char) -> bool {
	match c {
		'\t' | '\n' | '\u{B}' | '\u{C}' | '\r' | '\u{1C}'..='\u{1F}' => true,
		'\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
		c => c.is_whitespace(),
	}
}

#[inline]
pub fn is_not_empty(s: &str) -> bool {
	!is_empty(s)
}

/// Returns true if every entry is empty. An empty slice counts as empty.
pub fn are_empty(values: &[&str]) -> bool {
	values.iter().all(|s| is_empty(s))
}

/// Returns true if no entry is empty. An empty slice is never "not empty".
pub fn are_not_empty(values: &[&str]) -> bool {
	!values.is_empty() && values.iter().all(|s| is_not_empty(s))
}

/// Returns `value` unless it is absent or empty, in which case `default`.
pub fn value_or<'a>(default: &'a str, value: Option<&'a str>) -> &'a str {
	match value {
		Some(v) if is_not_empty(v) => v,
		_ => default,
	}
}

/// Like [`value_or`], computing the default only when it is needed.
pub fn value_or_else<'a, F>(default: F, value: Option<&'a str>) -> std::borrow::Cow<'a, str>
where
	F: FnOnce() -> String,
{
	match value {
		Some(v) if is_not_empty(v) => std::borrow::Cow::Borrowed(v),
		_ => std::borrow::Cow::Owned(default()),
	}
}

pub fn require(cond: bool, msg: impl Into<String>) -> Result<()> {
	require_with(cond, msg, EnumError::InvalidArgument)
}

/// Fails with `make_err(msg)` unless `cond` holds.
pub fn require_with<E, F>(cond: bool, msg: impl Into<String>, make_err: F) -> Result<(), E>
where
	F: FnOnce(String) -> E,
{
	if cond { Ok(()) } else { Err(make_err(msg.into())) }
}

pub fn require_not_empty<'a>(s: &'a str, msg: impl Into<String>) -> Result<&'a str> {
	require_not_empty_with(s, msg, EnumError::InvalidArgument)
}

pub fn require_not_empty_with<'a, E, F>(
	s: &'a str,
	msg: impl Into<String>,
	make_err: F,
) -> Result<&'a str, E>
where
	F: FnOnce(String) -> E,
{
	require_with(is_not_empty(s), msg, make_err).map(|()| s)
}

pub fn require_some<T>(value: Option<T>, msg: impl Into<String>) -> Result<T> {
	require_some_with(value, msg, EnumError::InvalidArgument)
}

pub fn require_some_with<T, E, F>(value: Option<T>, msg: impl Into<String>, make_err: F) -> Result<T, E>
where
	F: FnOnce(String) -> E,
{
	value.ok_or_else(|| make_err(msg.into()))
}
