use std::sync::Arc;

use models::identifier::parse_uuid;
use models::{Patch, Record};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Generic in-memory ordered record store.
///
/// Keeps records in insertion order inside a `Vec` behind one `RwLock`.
/// Lookups are linear scans on id. Every mutation runs under a single write
/// guard, so concurrent requests are serialised and a rejected update leaves
/// the collection untouched.
#[derive(Clone)]
pub struct RecordStore<R> {
    inner: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub(crate) fn with_records(records: Vec<R>) -> Self {
        Self { inner: Arc::new(RwLock::new(records)) }
    }

    /// All records in order. An empty collection is reported as `NotFound`.
    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        let records = self.inner.read().await;
        if records.is_empty() {
            return Err(ServiceError::empty_collection(R::COLLECTION));
        }
        Ok(records.clone())
    }

    pub async fn get(&self, id: Uuid) -> Result<R, ServiceError> {
        let records = self.inner.read().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))
    }

    /// Append a record at the end of the collection.
    pub async fn insert(&self, record: R) -> R {
        let mut records = self.inner.write().await;
        records.push(record.clone());
        record
    }

    /// Validate `patch`, then merge its present fields onto the record in place.
    ///
    /// Order of failures: payload violations, unknown id, body id differing
    /// from `id`.
    pub async fn update<P>(&self, id: Uuid, patch: P) -> Result<R, ServiceError>
    where
        P: Patch<R>,
    {
        patch.validate()?;
        let mut records = self.inner.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
        if let Some(claimed) = patch.claimed_id() {
            if parse_uuid(claimed) != Some(id) {
                return Err(ServiceError::id_mismatch(id, claimed));
            }
        }
        patch.apply_to(record);
        Ok(record.clone())
    }

    /// Remove a record and hand back its last state.
    pub async fn remove(&self, id: Uuid) -> Result<R, ServiceError> {
        let mut records = self.inner.write().await;
        let pos = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
        Ok(records.remove(pos))
    }

    /// Swap the whole collection; returns the new size.
    pub async fn replace_all(&self, replacement: Vec<R>) -> usize {
        let mut records = self.inner.write().await;
        *records = replacement;
        records.len()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Brand, Car, UpdateBrandDto, UpdateCarDto};

    #[tokio::test]
    async fn list_of_empty_store_is_not_found() {
        let store = RecordStore::<Car>::new();
        match store.list().await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "No cars found"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn insert_keeps_order_and_get_finds() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let a = store.insert(Brand::new("Toyota")).await;
        let b = store.insert(Brand::new("Honda")).await;
        assert_eq!(store.list().await?, vec![a.clone(), b.clone()]);
        assert_eq!(store.get(b.id).await?, b);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_reports_kind_and_id() {
        let store = RecordStore::<Brand>::new();
        let id = Uuid::new_v4();
        let err = store.get(id).await.unwrap_err();
        assert!(matches!(&err, ServiceError::NotFound(msg) if *msg == format!("Brand with id {id} not found")));
    }

    #[tokio::test]
    async fn update_in_place_keeps_position() -> anyhow::Result<()> {
        let store = RecordStore::with_records(vec![
            Car::new("Toyota", "Corolla", 2020),
            Car::new("Ford", "Mustang", 2021),
            Car::new("Chevrolet", "Camaro", 2022),
        ]);
        let target = store.list().await?[1].clone();
        let patch = UpdateCarDto { model: Some("Bronco".into()), ..Default::default() };
        let updated = store.update(target.id, patch).await?;
        assert_eq!(updated.model, "Bronco");
        assert_eq!(updated.id, target.id);
        assert_eq!(store.list().await?[1], updated);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_matching_body_id_is_allowed() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let car = store.insert(Car::new("Toyota", "Corolla", 2020)).await;
        let patch = UpdateCarDto { id: Some(car.id.to_string()), year: Some(2001), ..Default::default() };
        assert_eq!(store.update(car.id, patch).await?.year, 2001);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_other_body_id_mutates_nothing() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let car = store.insert(Car::new("Toyota", "Corolla", 2020)).await;
        let patch = UpdateCarDto {
            id: Some(Uuid::new_v4().to_string()),
            brand: Some("Ford".into()),
            ..Default::default()
        };
        let err = store.update(car.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(msg) if msg.starts_with("id mismatch")));
        assert_eq!(store.get(car.id).await?, car);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_patch_is_rejected_before_lookup() {
        let store = RecordStore::<Brand>::new();
        let err = store
            .update(Uuid::new_v4(), UpdateBrandDto { name: Some(String::new()) })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
    }

    #[tokio::test]
    async fn remove_returns_record_and_unknown_leaves_store_alone() -> anyhow::Result<()> {
        let store = RecordStore::new();
        let kept = store.insert(Brand::new("Jeep")).await;
        let gone = store.insert(Brand::new("Tesla")).await;

        assert!(store.remove(Uuid::new_v4()).await.is_err());
        assert_eq!(store.len().await, 2);

        assert_eq!(store.remove(gone.id).await?, gone);
        assert_eq!(store.list().await?, vec![kept]);
        Ok(())
    }

    #[tokio::test]
    async fn replace_all_discards_previous_records() -> anyhow::Result<()> {
        let store = RecordStore::new();
        store.insert(Brand::new("Old")).await;
        let fresh = vec![Brand::new("A"), Brand::new("B")];
        assert_eq!(store.replace_all(fresh.clone()).await, 2);
        assert_eq!(store.list().await?, fresh);
        assert_eq!(store.replace_all(Vec::new()).await, 0);
        assert!(store.is_empty().await);
        Ok(())
    }
}
