//! Resolved metadata snapshots.

use serde::Serialize;

use crate::EnhanceEnum;

/// A variant's identity and resolved metadata, detached from its type.
///
/// Recomputed on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VariantMeta {
	pub name: &'static str,
	pub ordinal: usize,
	pub value: String,
	pub desc: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub group: Option<String>,
}

impl VariantMeta {
	pub fn of<T: EnhanceEnum>(variant: &T) -> Self {
		Self {
			name: variant.name(),
			ordinal: variant.ordinal(),
			value: variant.value(),
			desc: variant.desc(),
			group: variant.group(),
		}
	}
}

/// Metadata for every variant of `T`, in declaration order.
pub fn catalog<T: EnhanceEnum>() -> Vec<VariantMeta> {
	T::VARIANTS.iter().map(VariantMeta::of).collect()
}

/// Like [`catalog`], limited to variants whose group is `group`.
pub fn catalog_group<T: EnhanceEnum>(group: &str) -> Vec<VariantMeta> {
	T::VARIANTS
		.iter()
		.filter(|v| v.group().as_deref() == Some(group))
		.map(VariantMeta::of)
		.collect()
}
