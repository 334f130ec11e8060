use axum::{extract::State, http::StatusCode, Json};
use models::{Brand, CreateBrandDto, UpdateBrandDto};
use service::Deleted;

use crate::errors::JsonApiError;
use crate::extract::{UuidV4, ValidatedJson};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/brands", tag = "brands",
    responses(
        (status = 200, description = "All brands in insertion order", body = [crate::openapi::BrandDoc]),
        (status = 404, description = "No brands found")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Brand>>, JsonApiError> {
    Ok(Json(state.brands.find_all().await?))
}

#[utoipa::path(
    get, path = "/brands/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id (UUID v4)")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BrandDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    UuidV4(id): UuidV4,
) -> Result<Json<Brand>, JsonApiError> {
    Ok(Json(state.brands.find_one_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/brands", tag = "brands",
    request_body = crate::openapi::CreateBrandDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BrandDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<CreateBrandDto>,
) -> Result<(StatusCode, Json<Brand>), JsonApiError> {
    let brand = state.brands.create(input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

#[utoipa::path(
    patch, path = "/brands/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id (UUID v4)")),
    request_body = crate::openapi::UpdateBrandDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BrandDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    UuidV4(id): UuidV4,
    ValidatedJson(input): ValidatedJson<UpdateBrandDto>,
) -> Result<Json<Brand>, JsonApiError> {
    Ok(Json(state.brands.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/brands/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand id (UUID v4)")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeletedBrandDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    UuidV4(id): UuidV4,
) -> Result<Json<Deleted<Brand>>, JsonApiError> {
    Ok(Json(state.brands.delete(id).await?))
}
