use thiserror::Error;

/// Errors raised by precondition checks and type-erased lookups.
///
/// Metadata derivation never produces one of these; only misuse of the
/// lookup API does (asking an opaque type for its variants, naming a type
/// the registry does not know).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
	/// A precondition was violated.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// No registered type matches the requested name.
	#[error("unknown type: {0}")]
	UnknownType(String),
	/// More than one registered type shares the requested short name.
	#[error("ambiguous type name: {name} (candidates: {candidates:?})")]
	AmbiguousType {
		name: String,
		candidates: Vec<&'static str>,
	},
}

pub type Result<T, E = EnumError> = std::result::Result<T, E>;
