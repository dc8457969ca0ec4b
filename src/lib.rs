pub mod config;
pub mod context;
pub mod fixture;
pub mod fs_op;
pub mod logging;
pub mod products;
pub mod target;

pub use crate::context::Context;
pub use crate::fixture::{FixtureError, TaskTestFixture};
pub use crate::products::{ClasspathEntry, ClasspathProducts, ProductName, Products};
pub use crate::target::{Address, Target};
