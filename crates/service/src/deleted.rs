use serde::Serialize;

use models::Record;

/// Confirmation returned by a delete: a message plus the removed record.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Deleted<R> {
    pub message: String,
    pub deleted: R,
}

impl<R: Record> Deleted<R> {
    pub fn of(record: R) -> Self {
        Self {
            message: format!("{} with id {} deleted successfully", R::KIND, record.id()),
            deleted: record,
        }
    }
}
