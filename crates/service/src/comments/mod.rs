//! Comments module: domain, repository (store client) and service.
//!
//! Handlers receive a `CommentService` built around an injected repository.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::Comment;
pub use repository::CommentRepository;
pub use service::CommentService;
