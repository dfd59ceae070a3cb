//! Customers and contractors: one record shape, scoped by `UserKind`.

pub mod domain;
pub mod repository;
pub mod rules;
pub mod service;

pub use domain::{NewUser, User, UserInput};
pub use repository::{SeaOrmUserRepository, UserRepository};
pub use service::UserService;
