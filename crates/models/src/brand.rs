use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{Patch, Record};
use crate::validation::{min_length, Validate, Violations};

pub const MIN_NAME_LEN: usize = 1;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into() }
    }
}

impl Record for Brand {
    const KIND: &'static str = "Brand";
    const COLLECTION: &'static str = "brands";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CreateBrandDto {
    pub name: String,
}

impl CreateBrandDto {
    pub fn into_brand(self, id: Uuid) -> Brand {
        Brand { id, name: self.name }
    }
}

impl Validate for CreateBrandDto {
    fn violations(&self) -> Violations {
        let mut out = Violations::new();
        min_length(&mut out, "name", &self.name, MIN_NAME_LEN);
        out
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UpdateBrandDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for UpdateBrandDto {
    fn violations(&self) -> Violations {
        let mut out = Violations::new();
        if let Some(name) = &self.name {
            min_length(&mut out, "name", name, MIN_NAME_LEN);
        }
        out
    }
}

impl Patch<Brand> for UpdateBrandDto {
    fn apply_to(self, brand: &mut Brand) {
        if let Some(name) = self.name {
            brand.name = name;
        }
    }
}
