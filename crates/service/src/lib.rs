//! Service layer for the comment store.
//! - `comments::repository` is the store client seam handlers depend on.
//! - SeaORM and in-memory implementations live side by side.

pub mod errors;
pub mod comments;
#[cfg(test)]
pub mod test_support;
