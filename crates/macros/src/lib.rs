//! Procedural macros for enhance-enum.
//!
//! Provides `#[derive(EnhanceEnum)]`, which turns a fieldless enum and its
//! `#[enhance(...)]` attributes into an accessor table, a variant list, a
//! field resolution constant and a link-time registry entry.

use proc_macro::TokenStream;

/// EnhanceEnum derive implementation.
mod enhance;

/// Derives `enhance_enum::EnhanceEnum`.
///
/// ```ignore
/// #[derive(EnhanceEnum)]
/// #[enhance(value_field = "code", desc_field = "label")]
/// pub enum Color {
///     #[enhance(rename = "RED", code = 1, label = "红色")]
///     Red,
///     #[enhance(rename = "GREEN", code = 2, label = "绿色")]
///     Green,
/// }
/// ```
///
/// # Type attributes
///
/// * `value_field = "..."`, `desc_field = "..."`, `group_field = "..."`
/// * `name_as_value = "disabled" | "as_is" | "lowercase" | "uppercase"`
/// * `skip_registry` - do not submit a `TypeDef` to the registry
///
/// # Variant attributes
///
/// * `rename = "..."` - declared name, defaults to the identifier
/// * `key = literal` - accessor-table entry (string, integer, bool or char)
#[proc_macro_derive(EnhanceEnum, attributes(enhance))]
pub fn derive_enhance_enum(input: TokenStream) -> TokenStream {
	enhance::derive_enhance_enum(input)
}
