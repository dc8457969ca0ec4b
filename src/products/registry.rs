use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::products::classpath::ClasspathProducts;

/// Name a product is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductName(&'static str);

impl ProductName {
    pub const COMPILE_CLASSPATH: ProductName = ProductName("compile_classpath");
    pub const RUNTIME_CLASSPATH: ProductName = ProductName("runtime_classpath");

    pub const fn new(name: &'static str) -> Self {
        ProductName(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Which kind of store a product slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Classpath,
    Opaque,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKind::Classpath => write!(f, "classpath"),
            ProductKind::Opaque => write!(f, "opaque"),
        }
    }
}

/// A typed product store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductData {
    Classpath(ClasspathProducts),
    /// Free-form payload for products the fixtures do not interpret.
    Opaque(String),
}

impl ProductData {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductData::Classpath(_) => ProductKind::Classpath,
            ProductData::Opaque(_) => ProductKind::Opaque,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProductError {
    #[error("product `{name}` holds {found} data, expected {expected}")]
    TypeMismatch {
        name: ProductName,
        expected: ProductKind,
        found: ProductKind,
    },
}

/// Registry of product stores, one per product name.
#[derive(Debug, Default, Clone)]
pub struct Products {
    data: HashMap<ProductName, ProductData>,
}

impl Products {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classpath store registered under `name`, created empty on first
    /// access.
    pub fn classpath(&mut self, name: ProductName) -> Result<&mut ClasspathProducts, ProductError> {
        let slot = self.data.entry(name).or_insert_with(|| {
            tracing::trace!("registering empty classpath product `{}`", name);
            ProductData::Classpath(ClasspathProducts::new())
        });
        match slot {
            ProductData::Classpath(cp) => Ok(cp),
            other => Err(ProductError::TypeMismatch {
                name,
                expected: ProductKind::Classpath,
                found: other.kind(),
            }),
        }
    }

    /// Read-only lookup; never creates a slot.
    pub fn get(&self, name: ProductName) -> Option<&ProductData> {
        self.data.get(&name)
    }

    pub fn get_classpath(&self, name: ProductName) -> Option<&ClasspathProducts> {
        match self.data.get(&name) {
            Some(ProductData::Classpath(cp)) => Some(cp),
            _ => None,
        }
    }

    pub fn is_registered(&self, name: ProductName) -> bool {
        self.data.contains_key(&name)
    }

    /// Publish `data` under `name`, returning whatever was there before.
    pub fn insert(&mut self, name: ProductName, data: ProductData) -> Option<ProductData> {
        tracing::trace!("publishing {} product `{}`", data.kind(), name);
        self.data.insert(name, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Target;

    #[test]
    fn classpath_is_created_lazily_and_shared() {
        let mut products = Products::new();
        assert!(!products.is_registered(ProductName::COMPILE_CLASSPATH));
        let t = Target::from_spec(":t").unwrap();
        products
            .classpath(ProductName::COMPILE_CLASSPATH)
            .unwrap()
            .add_for_target(&t, [("default", "/a")]);
        let again = products.classpath(ProductName::COMPILE_CLASSPATH).unwrap();
        assert_eq!(again.len_for_target(&t), 1);
        assert!(products.get_classpath(ProductName::RUNTIME_CLASSPATH).is_none());
    }

    #[test]
    fn wrong_kind_is_reported() {
        let mut products = Products::new();
        let name = ProductName::new("jars");
        products.insert(name, ProductData::Opaque("blob".into()));
        let err = products.classpath(name).unwrap_err();
        assert_eq!(
            err,
            ProductError::TypeMismatch {
                name,
                expected: ProductKind::Classpath,
                found: ProductKind::Opaque,
            }
        );
        assert_eq!(err.to_string(), "product `jars` holds opaque data, expected classpath");
    }
}
