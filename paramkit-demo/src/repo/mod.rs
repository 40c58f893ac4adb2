pub mod users;

pub use users::{RepoError, User, UserFilters, UserRepo};
