/*!
# HTMLSan: Errors
*/

use std::{
	collections::TryReserveError,
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Removal Collection.
///
/// This identifies which of the bounded collections overflowed.
pub enum Collection {
	/// # Nodes Marked for Removal.
	Nodes,

	/// # Attributes Marked for Removal.
	Attributes,

	/// # Templates Queued for Recursion.
	Templates,
}

impl Collection {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Nodes => "nodes",
			Self::Attributes => "attributes",
			Self::Templates => "templates",
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Sanitization Error.
///
/// Note that disallowed tags, attributes, and values are _not_ errors; they
/// simply get removed. These are the show-stoppers.
pub enum SanitizeError {
	/// # Allocation Failure.
	AllocationFailure,

	/// # Collection Capacity Exceeded.
	CapacityExceeded(Collection),

	/// # Unparseable Document.
	Parse,
}

impl AsRef<str> for SanitizeError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for SanitizeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CapacityExceeded(c) => write!(f, "Too many {} to remove.", c.as_str()),
			_ => f.write_str(self.as_str()),
		}
	}
}

impl Error for SanitizeError {}

impl From<TryReserveError> for SanitizeError {
	#[inline]
	fn from(_src: TryReserveError) -> Self { Self::AllocationFailure }
}

impl From<indexmap::TryReserveError> for SanitizeError {
	#[inline]
	fn from(_src: indexmap::TryReserveError) -> Self { Self::AllocationFailure }
}

impl SanitizeError {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::AllocationFailure => "Unable to allocate memory.",
			Self::CapacityExceeded(_) => "Removal capacity exceeded.",
			Self::Parse => "Unable to parse the document.",
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			SanitizeError::CapacityExceeded(Collection::Attributes).to_string(),
			"Too many attributes to remove.",
		);
		assert_eq!(SanitizeError::Parse.to_string(), SanitizeError::Parse.as_str());
	}
}
