//! # user-service
//!
//! REST service exposing CRUD operations over User records: list, get,
//! create, full update, partial worked-hours update, and single or bulk
//! delete. Persistence sits behind the [`store::UserStore`] trait; the
//! bundled [`store::MemoryStore`] keeps records in process memory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone(), MemoryStore::new());
//!     let app = routes(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod server;
pub mod state;
pub mod store;

/// Commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::handlers::routes;
    pub use crate::health::{health, readiness};
    pub use crate::models::User;
    pub use crate::observability::init_tracing;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::{MemoryStore, UserStore};
}
