//! User storage abstraction
//!
//! The [`UserStore`] trait is the single collaborator of the handler
//! layer: find-all, find-by-id, create, save, delete, delete-all. It uses
//! RPITIT (Return Position Impl Trait In Traits) for ergonomic async
//! methods without `async_trait`.
//!
//! The bundled [`MemoryStore`] keeps records in process memory; swapping
//! in a persistent backend only requires another trait implementation.

mod error;
mod memory;

pub use error::{StoreError, StoreErrorKind, StoreOperation, StoreResult};
pub use memory::MemoryStore;

use std::future::Future;

use crate::models::User;

/// Persistence abstraction for [`User`] records
///
/// Implementations must assign ids on [`create`](UserStore::create) and
/// return records from [`find_all`](UserStore::find_all) in ascending id
/// order. Each method is a single atomic round trip; no operation spans
/// multiple calls.
pub trait UserStore: Send + Sync + 'static {
    /// List every user in ascending id order
    fn find_all(&self) -> impl Future<Output = StoreResult<Vec<User>>> + Send;

    /// Find a user by id
    ///
    /// Returns `Ok(None)` if no user with that id exists.
    fn find_by_id(&self, id: u64) -> impl Future<Output = StoreResult<Option<User>>> + Send;

    /// Create a new user with the given (already validated) name
    ///
    /// The store assigns the id and initializes `hours_worked` to 0.
    fn create(&self, name: String) -> impl Future<Output = StoreResult<User>> + Send;

    /// Save an existing user record (upsert by id)
    fn save(&self, user: User) -> impl Future<Output = StoreResult<User>> + Send;

    /// Delete a user by id, returning the removed record
    ///
    /// Returns `Ok(None)` if no user with that id exists.
    fn delete(&self, id: u64) -> impl Future<Output = StoreResult<Option<User>>> + Send;

    /// Delete every user and reset id assignment
    fn delete_all(&self) -> impl Future<Output = StoreResult<()>> + Send;
}
