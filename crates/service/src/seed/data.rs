use models::{Brand, Car};

pub fn cars_seed() -> Vec<Car> {
    vec![
        Car::new("Toyota", "Corolla", 2020),
        Car::new("Ford", "Mustang", 2021),
        Car::new("Chevrolet", "Camaro", 2022),
    ]
}

pub fn brands_seed() -> Vec<Brand> {
    ["Toyota", "Honda", "Jeep", "Tesla", "Ford"]
        .into_iter()
        .map(Brand::new)
        .collect()
}
