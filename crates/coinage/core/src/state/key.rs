//! Namespaced resource identifiers.

use core::fmt;
use std::str::FromStr;

use crate::error::{CoinageError, ErrorSeverity};

/// Namespaced identifier in `namespace:path` form.
///
/// Keys the currency registry tables and names the item references handed to
/// the external item registry. Namespaces distinguish currencies defined by
/// different sources; crossing one during conversion requires an explicit
/// exchange rate on the unit.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Creates an identifier from namespace and path parts.
    ///
    /// # Errors
    ///
    /// Returns an error when either part is empty or carries characters
    /// outside the allowed set (`a-z0-9_-.`, plus `/` in paths).
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, ResourceIdError> {
        let namespace = namespace.into();
        let path = path.into();

        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(ResourceIdError::InvalidNamespace(namespace));
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(ResourceIdError::InvalidPath(path));
        }

        Ok(Self { namespace, path })
    }

    /// Parses `namespace:path`, applying `default_namespace` to bare paths.
    ///
    /// Definition documents may key records by bare paths; those take the
    /// namespace of the document they came from.
    pub fn parse_in(default_namespace: &str, raw: &str) -> Result<Self, ResourceIdError> {
        match raw.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(default_namespace, raw),
        }
    }

    /// Returns the namespace part.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the path part.
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for ResourceId {
    type Err = ResourceIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = raw
            .split_once(':')
            .ok_or_else(|| ResourceIdError::MissingNamespace(raw.to_owned()))?;

        Self::new(namespace, path)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

// Identifiers serialize as their `namespace:path` string form so they can
// key JSON maps.
#[cfg(feature = "serde")]
impl serde::Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors produced when parsing a [`ResourceId`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceIdError {
    /// Identifier had no `:` separator and no default namespace applies.
    #[error("identifier '{0}' is missing a namespace")]
    MissingNamespace(String),

    /// Namespace is empty or contains characters outside `a-z0-9_-.`.
    #[error("invalid namespace '{0}'")]
    InvalidNamespace(String),

    /// Path is empty or contains characters outside `a-z0-9_-./`.
    #[error("invalid path '{0}'")]
    InvalidPath(String),
}

impl CoinageError for ResourceIdError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingNamespace(_) => "ID_MISSING_NAMESPACE",
            Self::InvalidNamespace(_) => "ID_INVALID_NAMESPACE",
            Self::InvalidPath(_) => "ID_INVALID_PATH",
        }
    }
}
