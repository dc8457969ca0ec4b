//! Build-product registry.
//!
//! Tasks publish what they produce under a product name; later tasks (and
//! tests standing in for earlier tasks) look the product up by the same
//! name. Each name holds exactly one typed store.

pub mod classpath;
pub mod registry;

pub use classpath::{ClasspathEntry, ClasspathProducts};
pub use registry::{ProductData, ProductError, ProductKind, ProductName, Products};
