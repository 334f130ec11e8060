//! Sample dataset loader.
//!
//! Replaces (never appends to) the cars and brands collections with the
//! records from [`data`]. Every run mints fresh ids.

pub mod data;

use std::sync::Arc;

use async_trait::async_trait;
use models::Record;
use tracing::info;

use crate::brands_service::BrandsService;
use crate::cars_service::CarsService;

pub const SEED_CONFIRMATION: &str = "Seed executed successfully";

/// A store whose whole collection can be swapped for a seed dataset.
#[async_trait]
pub trait SeedTarget: Send + Sync {
    type Record: Record;

    /// Replace every record; returns how many are now stored.
    async fn load_seed(&self, records: Vec<Self::Record>) -> usize;
}

#[derive(Clone)]
pub struct SeedService {
    cars: Arc<CarsService>,
    brands: Arc<BrandsService>,
}

impl SeedService {
    pub fn new(cars: Arc<CarsService>, brands: Arc<BrandsService>) -> Self {
        Self { cars, brands }
    }

    pub async fn run_seed(&self) -> &'static str {
        let cars = load(self.cars.as_ref(), data::cars_seed()).await;
        let brands = load(self.brands.as_ref(), data::brands_seed()).await;
        info!(cars, brands, "seed executed");
        SEED_CONFIRMATION
    }
}

async fn load<T: SeedTarget + ?Sized>(target: &T, records: Vec<T::Record>) -> usize {
    let collection = <T::Record as Record>::COLLECTION;
    let count = target.load_seed(records).await;
    info!(collection, count, "seed collection replaced");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{CreateBrandDto, CreateCarDto};

    fn services() -> (Arc<CarsService>, Arc<BrandsService>, SeedService) {
        let cars = Arc::new(CarsService::new());
        let brands = Arc::new(BrandsService::new());
        let seed = SeedService::new(cars.clone(), brands.clone());
        (cars, brands, seed)
    }

    #[tokio::test]
    async fn seed_fills_both_stores_in_order() -> anyhow::Result<()> {
        let (cars, brands, seed) = services();
        assert_eq!(seed.run_seed().await, "Seed executed successfully");

        let listed: Vec<(String, String, i32)> = cars
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.brand, c.model, c.year))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("Toyota".to_string(), "Corolla".to_string(), 2020),
                ("Ford".to_string(), "Mustang".to_string(), 2021),
                ("Chevrolet".to_string(), "Camaro".to_string(), 2022),
            ]
        );
        assert_eq!(brands.find_all().await?.len(), data::brands_seed().len());
        Ok(())
    }

    #[tokio::test]
    async fn reseeding_replaces_instead_of_appending() -> anyhow::Result<()> {
        let (cars, brands, seed) = services();
        cars.create(CreateCarDto { brand: "Honda".into(), model: "Civic".into(), year: None })
            .await?;
        brands.create(CreateBrandDto { name: "Kia".into() }).await?;

        seed.run_seed().await;
        let first_ids: Vec<_> = cars.find_all().await?.into_iter().map(|c| c.id).collect();
        seed.run_seed().await;
        let second = cars.find_all().await?;

        assert_eq!(second.len(), 3);
        assert!(second.iter().all(|c| c.brand != "Honda"));
        assert!(second.iter().all(|c| !first_ids.contains(&c.id)));
        assert!(brands.find_all().await?.iter().all(|b| b.name != "Kia"));
        Ok(())
    }

    #[tokio::test]
    async fn seeded_records_are_addressable() -> anyhow::Result<()> {
        let (cars, _brands, seed) = services();
        seed.run_seed().await;
        let first = cars.find_all().await?.remove(0);
        assert_eq!(cars.find_one_by_id(first.id).await?, first);
        Ok(())
    }
}
