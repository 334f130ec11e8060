//! Records, request payloads and their validation rules.
//! - `car` / `brand` hold the resource types and their create/update payloads.
//! - `validation` provides the `Validate` trait and field-level violations.
//! - `record` describes what a store needs to know about a resource.

pub mod errors;
pub mod validation;
pub mod identifier;
pub mod record;
pub mod car;
pub mod brand;

pub use brand::{Brand, CreateBrandDto, UpdateBrandDto};
pub use car::{Car, CreateCarDto, UpdateCarDto};
pub use record::{Patch, Record};
pub use validation::{FieldViolation, Validate, Violations};
