//! Service layer: the in-memory stores behind the cars and brands resources.
//! - `storage::record_store` holds one ordered collection per resource.
//! - `cars_service` / `brands_service` apply defaults and validation on top.
//! - `seed` replaces both collections with the sample dataset.

pub mod errors;
pub mod storage;
pub mod deleted;
pub mod cars_service;
pub mod brands_service;
pub mod seed;

pub use brands_service::BrandsService;
pub use cars_service::CarsService;
pub use deleted::Deleted;
pub use errors::ServiceError;
pub use seed::SeedService;
