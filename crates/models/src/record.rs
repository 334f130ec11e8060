use serde::Serialize;
use uuid::Uuid;

use crate::validation::Validate;

/// A resource that lives in a store, addressed by an immutable id.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Singular display name, e.g. `Car`.
    const KIND: &'static str;
    /// Collection name, e.g. `cars`.
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// Partial update payload: each `None` field leaves the record untouched.
pub trait Patch<R: Record>: Validate {
    /// Id carried in the payload body, if the payload schema has one.
    fn claimed_id(&self) -> Option<&str> {
        None
    }

    /// Overwrite the present fields on `record`. Never touches the id.
    fn apply_to(self, record: &mut R);
}
