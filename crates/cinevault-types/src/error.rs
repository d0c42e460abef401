//! Shared error type used across all Cinevault crates.

pub type CvResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	DbError,
	Unknown,

	/// A key argument was empty or whitespace-only
	InvalidKey,

	/// A stored raw value could not be parsed as the requested type.
	/// Surfaced as-is: a malformed persisted value is a data-integrity
	/// problem, not an absence signal.
	TypeCoercion { key: Box<str>, value: Box<str>, expected: &'static str },

	/// Setting registry misuse (duplicate or unknown definition)
	ConfigError(String),

	/// The execution environment lacks a required media capability
	/// (e.g. no encoder for the requested output format)
	CapabilityUnavailable(Box<str>),

	// externals
	Io(std::io::Error),
	#[cfg(feature = "media")]
	Image(image::error::ImageError),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

#[cfg(feature = "media")]
impl From<image::error::ImageError> for Error {
	fn from(err: image::error::ImageError) -> Self {
		Self::Image(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::Unknown => write!(f, "unknown error"),
			Error::InvalidKey => write!(f, "config key is empty or whitespace-only"),
			Error::TypeCoercion { key, value, expected } => {
				write!(f, "config value '{}' for key '{}' is not a valid {}", value, key, expected)
			}
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::CapabilityUnavailable(what) => write!(f, "capability unavailable: {}", what),
			Error::Io(err) => write!(f, "io error: {}", err),
			#[cfg(feature = "media")]
			Error::Image(err) => write!(f, "image error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
