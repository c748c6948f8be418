#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Value, description and group resolution for closed enum types.
//!
//! Types implementing [`EnhanceEnum`] supply an accessor table (normally
//! through `#[derive(EnhanceEnum)]`) and get, per variant:
//!
//! - a canonical [`value`](EnhanceEnum::value) string for storage and wire
//!   formats,
//! - a human-readable [`desc`](EnhanceEnum::desc),
//! - an optional [`group`](EnhanceEnum::group) tag,
//!
//! plus reverse lookup from a token back to a variant by name or value.
//!
//! # Modules
//!
//! - [`config`] - [`FieldResolution`]: which fields feed value/desc/group
//! - [`resolve`] - the default resolution and lookup algorithms
//! - [`registry`] - link-time type registry for lookup by type name
//! - [`catalog`] - serialisable per-variant metadata snapshots
//! - [`check`] - emptiness predicates and precondition checks

extern crate self as enhance_enum;

pub mod catalog;
pub mod check;
pub mod config;
pub mod error;
pub mod field;
pub mod registry;
pub mod resolve;
mod traits;

pub use catalog::{VariantMeta, catalog, catalog_group};
pub use config::{FieldResolution, NameAsValue};
/// Derives [`EnhanceEnum`] for a fieldless enum.
///
/// Type attributes (all optional):
///
/// - `value_field = "name"` - accessor consulted for the value (default `value`)
/// - `desc_field = "name"` - accessor consulted for the description (default `desc`)
/// - `group_field = "name"` - accessor consulted for the group (default `group`)
/// - `name_as_value = "disabled" | "as_is" | "lowercase" | "uppercase"`
/// - `skip_registry` - do not submit the type to [`registry`]
///
/// Variant attributes:
///
/// - `rename = "NAME"` - declared name (defaults to the identifier)
/// - any other `key = literal` - an accessor-table entry; strings,
///   integers, booleans and chars are accepted
///
/// ```
/// use enhance_enum::EnhanceEnum;
///
/// #[derive(EnhanceEnum)]
/// enum Status {
/// 	New,
/// 	Active,
/// 	Closed,
/// }
///
/// assert_eq!(Status::Active.value(), "1");
/// assert_eq!(Status::Active.desc(), "Active");
/// ```
pub use enhance_macros::EnhanceEnum;
pub use error::{EnumError, Result};
pub use field::FieldValue;
pub use registry::{TypeDef, resolve_by_type_name};
pub use traits::EnhanceEnum;

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}

/// Registers a hand-written [`EnhanceEnum`] implementation for lookup by name.
#[macro_export]
macro_rules! register_enum {
	($ty:ident) => {
		$crate::__private::inventory::submit! {
			$crate::registry::TypeDef::enumeration::<$ty>(
				::core::stringify!($ty),
				::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
			)
		}
	};
}

/// Registers a type that is not an enum.
///
/// Lookups against it fail with [`EnumError::InvalidArgument`].
#[macro_export]
macro_rules! register_opaque {
	($ty:ident) => {
		$crate::__private::inventory::submit! {
			$crate::registry::TypeDef::opaque(
				::core::stringify!($ty),
				::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
			)
		}
	};
}
