//! Link-time registry of named types.
//!
//! `#[derive(EnhanceEnum)]` submits a [`TypeDef`] for every derived type
//! unless `#[enhance(skip_registry)]` is given. Hand-written implementations
//! register through [`register_enum!`](crate::register_enum), and types that
//! are not enums can be made known with
//! [`register_opaque!`](crate::register_opaque) so that lookups against them
//! fail with [`EnumError::InvalidArgument`] instead of "unknown type".
//!
//! Types are looked up by full path (`module_path!()` plus the type name),
//! or by bare type name when exactly one registered type carries it.

use std::fmt;

use crate::catalog::{VariantMeta, catalog};
use crate::error::{EnumError, Result};
use crate::{EnhanceEnum, check};


/// A registered type.
pub struct TypeDef {
	/// Bare type name, e.g. `"Color"`.
	pub name: &'static str,
	/// Full path, e.g. `"my_crate::paint::Color"`.
	pub path: &'static str,
	pub shape: TypeShape,
}

/// What the registry knows about a type's structure.
#[derive(Clone, Copy)]
pub enum TypeShape {
	Enum(EnumShape),
	/// Registered under a name, but not a closed enum.
	Opaque,
}

/// Type-erased entry points into an [`EnhanceEnum`] implementation.
#[derive(Clone, Copy)]
pub struct EnumShape {
	variants: fn() -> Vec<VariantMeta>,
	resolve: fn(&str) -> Option<VariantMeta>,
}

fn resolve_erased<T: EnhanceEnum>(token: &str) -> Option<VariantMeta> {
	T::resolve(token).map(VariantMeta::of)
}

impl TypeDef {
	pub const fn enumeration<T: EnhanceEnum>(name: &'static str, path: &'static str) -> Self {
		Self {
			name,
			path,
			shape: TypeShape::Enum(EnumShape {
				variants: catalog::<T>,
				resolve: resolve_erased::<T>,
			}),
		}
	}

	pub const fn opaque(name: &'static str, path: &'static str) -> Self {
		Self {
			name,
			path,
			shape: TypeShape::Opaque,
		}
	}

	pub fn is_enum(&self) -> bool {
		matches!(self.shape, TypeShape::Enum(_))
	}

	fn enum_shape(&self) -> Result<EnumShape> {
		match self.shape {
			TypeShape::Enum(shape) => Ok(shape),
			TypeShape::Opaque => Err(EnumError::InvalidArgument(format!(
				"{} is not an enum type",
				self.path
			))),
		}
	}

	/// Metadata for every variant, in declaration order.
	pub fn variants(&self) -> Result<Vec<VariantMeta>> {
		Ok((self.enum_shape()?.variants)())
	}

	/// Finds a variant by name, then by value.
	///
	/// # Errors
	///
	/// Returns [`EnumError::InvalidArgument`] if this type is not an enum.
	/// A token that matches nothing is `Ok(None)`, not an error.
	pub fn resolve(&self, token: &str) -> Result<Option<VariantMeta>> {
		let shape = self.enum_shape()?;
		if token.is_empty() {
			return Ok(None);
		}
		Ok((shape.resolve)(token))
	}

	/// Returns true if `token` names a variant. Errors count as `false`.
	pub fn is_member(&self, token: &str) -> bool {
		matches!(self.resolve(token), Ok(Some(_)))
	}
}

impl fmt::Debug for TypeDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDef")
			.field("name", &self.name)
			.field("path", &self.path)
			.field("enum", &self.is_enum())
			.finish()
	}
}

inventory::collect!(TypeDef);

/// Every registered type, in no particular order.
pub fn all() -> impl Iterator<Item = &'static TypeDef> {
	inventory::iter::<TypeDef>.into_iter()
}

/// Looks a type up by full path, then by unique bare name.
pub fn find(type_name: &str) -> Result<&'static TypeDef> {
	if let Some(def) = all().find(|def| def.path == type_name) {
		return Ok(def);
	}

	let mut candidates: Vec<&'static TypeDef> = all().filter(|def| def.name == type_name).collect();
	match candidates.len() {
		0 => Err(EnumError::UnknownType(type_name.to_owned())),
		1 => Ok(candidates.remove(0)),
		_ => {
			let mut paths: Vec<&'static str> = candidates.iter().map(|def| def.path).collect();
			paths.sort_unstable();
			tracing::warn!(
				domain = "enum",
				name = type_name,
				candidates = ?paths,
				"ambiguous type name; use the full path",
			);
			Err(EnumError::AmbiguousType {
				name: type_name.to_owned(),
				candidates: paths,
			})
		}
	}
}

/// Finds the type called `type_name`, then the variant matching `token`.
///
/// Every failure (empty or unknown type name, ambiguous short name, a type
/// that is not an enum) is logged at debug level and reported as `None`,
/// the same as a token that matches no variant.
pub fn resolve_by_type_name(type_name: &str, token: &str) -> Option<VariantMeta> {
	let lookup = check::require_not_empty(type_name, "type name is empty")
		.and_then(find)
		.and_then(|def| def.resolve(token));
	match lookup {
		Ok(found) => found,
		Err(err) => {
			tracing::debug!(domain = "enum", type_name, token, error = %err, "type lookup failed");
			None
		}
	}
}
