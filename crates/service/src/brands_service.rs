use async_trait::async_trait;
use models::{Brand, CreateBrandDto, UpdateBrandDto, Validate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::deleted::Deleted;
use crate::errors::ServiceError;
use crate::seed::SeedTarget;
use crate::storage::RecordStore;

#[derive(Clone, Default)]
pub struct BrandsService {
    store: RecordStore<Brand>,
}

impl BrandsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_all(&self) -> Result<Vec<Brand>, ServiceError> {
        self.store.list().await
    }

    pub async fn find_one_by_id(&self, id: Uuid) -> Result<Brand, ServiceError> {
        self.store.get(id).await.inspect_err(|_| debug!(%id, "brand lookup miss"))
    }

    pub async fn create(&self, input: CreateBrandDto) -> Result<Brand, ServiceError> {
        input.validate()?;
        let brand = self.store.insert(input.into_brand(Uuid::new_v4())).await;
        info!(id = %brand.id, name = %brand.name, "created brand");
        Ok(brand)
    }

    pub async fn update(&self, id: Uuid, input: UpdateBrandDto) -> Result<Brand, ServiceError> {
        let brand = self.store.update(id, input).await?;
        info!(id = %brand.id, "updated brand");
        Ok(brand)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Deleted<Brand>, ServiceError> {
        let brand = self.store.remove(id).await?;
        info!(%id, "deleted brand");
        Ok(Deleted::of(brand))
    }

    pub async fn fill_with_seed_data(&self, brands: Vec<Brand>) -> usize {
        self.store.replace_all(brands).await
    }
}

#[async_trait]
impl SeedTarget for BrandsService {
    type Record = Brand;

    async fn load_seed(&self, records: Vec<Brand>) -> usize {
        self.fill_with_seed_data(records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn crud_round() -> anyhow::Result<()> {
        let svc = BrandsService::new();
        let brand = svc.create(CreateBrandDto { name: "Kia".into() }).await?;
        assert_eq!(svc.find_all().await?, vec![brand.clone()]);

        let renamed = svc
            .update(brand.id, UpdateBrandDto { name: Some("Hyundai".into()) })
            .await?;
        assert_eq!(renamed, Brand { id: brand.id, name: "Hyundai".into() });

        let deleted = svc.delete(brand.id).await?;
        assert_eq!(deleted.deleted, renamed);
        match svc.find_all().await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "No brands found"),
            other => panic!("unexpected: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn update_with_empty_name_fails_without_mutation() -> anyhow::Result<()> {
        let svc = BrandsService::new();
        let brand = svc.create(CreateBrandDto { name: "Kia".into() }).await?;
        let res = svc.update(brand.id, UpdateBrandDto { name: Some(String::new()) }).await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
        assert_eq!(svc.find_one_by_id(brand.id).await?, brand);
        Ok(())
    }

    #[tokio::test]
    async fn create_with_empty_name_fails() {
        let svc = BrandsService::new();
        assert!(svc.create(CreateBrandDto { name: String::new() }).await.is_err());
    }
}
