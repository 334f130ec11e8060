use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identifier::parse_uuid;
use crate::record::{Patch, Record};
use crate::validation::{in_range, min_length, not_empty, Validate, Violations};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2025;
pub const MIN_MODEL_LEN: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Car {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl Car {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self { id: Uuid::new_v4(), brand: brand.into(), model: model.into(), year }
    }
}

impl Record for Car {
    const KIND: &'static str = "Car";
    const COLLECTION: &'static str = "cars";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Year used when a create payload omits one.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CreateCarDto {
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
}

impl CreateCarDto {
    pub fn into_car(self, id: Uuid, default_year: i32) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            year: self.year.unwrap_or(default_year),
        }
    }
}

impl Validate for CreateCarDto {
    fn violations(&self) -> Violations {
        let mut out = Violations::new();
        not_empty(&mut out, "brand", &self.brand);
        min_length(&mut out, "model", &self.model, MIN_MODEL_LEN);
        if let Some(year) = self.year {
            in_range(&mut out, "year", year, MIN_YEAR, MAX_YEAR);
        }
        out
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UpdateCarDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Validate for UpdateCarDto {
    fn violations(&self) -> Violations {
        let mut out = Violations::new();
        if let Some(id) = &self.id {
            if parse_uuid(id).is_none() {
                out.push("id", "id must be a UUID");
            }
        }
        if let Some(brand) = &self.brand {
            not_empty(&mut out, "brand", brand);
        }
        if let Some(model) = &self.model {
            min_length(&mut out, "model", model, MIN_MODEL_LEN);
        }
        if let Some(year) = self.year {
            in_range(&mut out, "year", year, MIN_YEAR, MAX_YEAR);
        }
        out
    }
}

impl Patch<Car> for UpdateCarDto {
    fn claimed_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn apply_to(self, car: &mut Car) {
        if let Some(brand) = self.brand {
            car.brand = brand;
        }
        if let Some(model) = self.model {
            car.model = model;
        }
        if let Some(year) = self.year {
            car.year = year;
        }
    }
}
