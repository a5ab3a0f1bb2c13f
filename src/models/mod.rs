//! Domain models

pub mod user;

pub use user::{AddHours, CreateUser, UpdateUser, User};
