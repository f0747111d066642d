//! Storage service for the IQSF data service.
//!
//! The store is the only owner of entity state. Callers construct one
//! explicitly and hand it to the API layer, so tests get isolated instances.
//!
//! # Example
//!
//! ```
//! use iqsf_model::Region;
//! use iqsf_store::{MemoryStore, Storage};
//!
//! # async fn example() -> Result<(), iqsf_store::StoreError> {
//! let store = MemoryStore::seeded();
//! let europe = store.countries_by_region(Region::Europe).await?;
//! assert_eq!(europe.len(), 3);
//! # Ok(())
//! # }
//! ```

mod error;
mod hash;
mod memory;
mod seed;
mod traits;
mod verification;

pub use error::StoreError;
pub use hash::{password_digest, verify_password};
pub use memory::MemoryStore;
pub use seed::sample_countries;
pub use traits::Storage;
pub use verification::verification_id;
