use async_trait::async_trait;
use models::car::current_year;
use models::{Car, CreateCarDto, UpdateCarDto, Validate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::deleted::Deleted;
use crate::errors::ServiceError;
use crate::seed::SeedTarget;
use crate::storage::RecordStore;

/// Cars resource: an ordered in-memory collection plus create defaults.
#[derive(Clone, Default)]
pub struct CarsService {
    store: RecordStore<Car>,
}

impl CarsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, ServiceError> {
        self.store.list().await
    }

    pub async fn find_one_by_id(&self, id: Uuid) -> Result<Car, ServiceError> {
        self.store.get(id).await.inspect_err(|_| debug!(%id, "car lookup miss"))
    }

    /// Generate an id, default `year` to the current year, append.
    pub async fn create(&self, input: CreateCarDto) -> Result<Car, ServiceError> {
        input.validate()?;
        let car = input.into_car(Uuid::new_v4(), current_year());
        let car = self.store.insert(car).await;
        info!(id = %car.id, brand = %car.brand, model = %car.model, year = car.year, "created car");
        Ok(car)
    }

    pub async fn update(&self, id: Uuid, input: UpdateCarDto) -> Result<Car, ServiceError> {
        let car = self.store.update(id, input).await?;
        info!(id = %car.id, "updated car");
        Ok(car)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Deleted<Car>, ServiceError> {
        let car = self.store.remove(id).await?;
        info!(%id, "deleted car");
        Ok(Deleted::of(car))
    }

    pub async fn fill_with_seed_data(&self, cars: Vec<Car>) -> usize {
        self.store.replace_all(cars).await
    }
}

#[async_trait]
impl SeedTarget for CarsService {
    type Record = Car;

    async fn load_seed(&self, records: Vec<Car>) -> usize {
        self.fill_with_seed_data(records).await
    }
}
