//! Build targets and their addresses.
//!
//! A target is addressed as `path/to/dir:name`. The fixture only needs a
//! stable, filesystem-safe id to namespace per-target directories, which
//! is derived from the address.

use std::fmt;

use thiserror::Error;

/// Errors returned when parsing a target address.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    #[error("empty target address")]
    Empty,
    #[error("target address `{0}` has an empty name")]
    EmptyName(String),
    #[error("target address `{0}` contains more than one `:`")]
    TooManyColons(String),
    #[error("target name `{0}` must not contain a path separator")]
    SeparatorInName(String),
    #[error("target address `{0}` has an empty, `.` or `..` component")]
    BadComponent(String),
}

fn is_bad_component(c: &str) -> bool {
    c.is_empty() || c == "." || c == ".."
}

/// Location of a target: the directory it is declared in plus its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    spec_path: String,
    target_name: String,
}

impl Address {
    /// Build an address from its parts. The name must be a single path
    /// component and the spec path must not step outside the build root, so
    /// the derived id always stays a single directory name.
    pub fn new(
        spec_path: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Result<Self, AddressError> {
        let spec_path = spec_path.into();
        let target_name = target_name.into();
        let shown = format!("{}:{}", spec_path, target_name);
        if target_name.is_empty() {
            return Err(AddressError::EmptyName(shown));
        }
        if target_name.contains(['/', '\\']) {
            return Err(AddressError::SeparatorInName(target_name));
        }
        if is_bad_component(&target_name)
            || (!spec_path.is_empty() && spec_path.split('/').any(is_bad_component))
            || spec_path.contains('\\')
        {
            return Err(AddressError::BadComponent(shown));
        }
        Ok(Address {
            spec_path,
            target_name,
        })
    }

    /// Parse `dir:name`, `:name` or `dir` (name defaults to the last path
    /// component). Leading `//` and trailing `/` on the directory are dropped.
    pub fn parse(spec: &str) -> Result<Self, AddressError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(AddressError::Empty);
        }
        let (path, name) = match spec.split_once(':') {
            Some((_, rest)) if rest.contains(':') => {
                return Err(AddressError::TooManyColons(spec.to_string()))
            }
            Some((path, name)) => (path, name.to_string()),
            None => {
                let path = spec.trim_end_matches('/');
                let name = path.rsplit('/').next().unwrap_or_default().to_string();
                (path, name)
            }
        };
        if name.is_empty() {
            return Err(AddressError::EmptyName(spec.to_string()));
        }
        let spec_path = path.trim_start_matches("//").trim_end_matches('/');
        Address::new(spec_path, name)
    }

    pub fn spec_path(&self) -> &str {
        &self.spec_path
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// The address flattened into a single path component: `a/b:c` becomes
    /// `a.b.c`, and a root-level `:c` is just `c`.
    pub fn path_safe_spec(&self) -> String {
        if self.spec_path.is_empty() {
            self.target_name.clone()
        } else {
            format!("{}.{}", self.spec_path.replace('/', "."), self.target_name)
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.spec_path, self.target_name)
    }
}

/// A unit of build work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target {
    address: Address,
}

impl Target {
    pub fn new(address: Address) -> Self {
        Target { address }
    }

    pub fn from_spec(spec: &str) -> Result<Self, AddressError> {
        Address::parse(spec).map(Target::new)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Stable identifier, safe to use as a single directory name.
    pub fn id(&self) -> String {
        self.address.path_safe_spec()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.address.fmt(f)
    }
}
