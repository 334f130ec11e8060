use std::sync::Arc;

use service::{BrandsService, CarsService, SeedService};

#[derive(Clone)]
pub struct ServerState {
    pub cars: Arc<CarsService>,
    pub brands: Arc<BrandsService>,
    pub seed: Arc<SeedService>,
}

impl ServerState {
    /// Empty stores, with the seed loader wired to both.
    pub fn new() -> Self {
        let cars = Arc::new(CarsService::new());
        let brands = Arc::new(BrandsService::new());
        let seed = Arc::new(SeedService::new(Arc::clone(&cars), Arc::clone(&brands)));
        Self { cars, brands, seed }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
