use crate::products::Products;
use crate::target::Target;

/// State for one simulated build run: the targets in play and the products
/// published so far. Owned by the test, borrowed by the fixtures.
#[derive(Debug, Default)]
pub struct Context {
    products: Products,
    targets: Vec<Target>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets(targets: Vec<Target>) -> Self {
        Context {
            products: Products::new(),
            targets,
        }
    }

    pub fn products(&self) -> &Products {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut Products {
        &mut self.products
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Add `target` unless it is already part of the context.
    pub fn add_target(&mut self, target: Target) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }
}
