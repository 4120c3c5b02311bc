// ==========================================
// Medicine Import - repository layer
// ==========================================
// Responsibility: document store access, hides the database details
// Constraint: parameterised statements only
// ==========================================

pub mod error;
pub mod product_repo;
pub mod product_repo_impl;

pub use error::{RepositoryError, RepositoryResult};
pub use product_repo::ProductRepository;
pub use product_repo_impl::SqliteProductRepository;
