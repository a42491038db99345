//! Building blocks shared by every domain module: the repository port, its
//! error type and page arithmetic.

pub mod errors;
pub mod pagination;
pub mod ports;

pub use errors::RepositoryError;
pub use pagination::Pagination;
pub use ports::{Entity, Repository};
