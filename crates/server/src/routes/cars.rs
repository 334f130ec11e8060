use axum::{extract::State, http::StatusCode, Json};
use models::{Car, CreateCarDto, UpdateCarDto};
use service::Deleted;

use crate::errors::JsonApiError;
use crate::extract::{UuidV4, ValidatedJson};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/cars", tag = "cars",
    responses(
        (status = 200, description = "All cars in insertion order", body = [crate::openapi::CarDoc]),
        (status = 404, description = "No cars found")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Car>>, JsonApiError> {
    Ok(Json(state.cars.find_all().await?))
}

#[utoipa::path(
    get, path = "/cars/{id}", tag = "cars",
    params(("id" = Uuid, Path, description = "Car id (UUID v4)")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    UuidV4(id): UuidV4,
) -> Result<Json<Car>, JsonApiError> {
    Ok(Json(state.cars.find_one_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/cars", tag = "cars",
    request_body = crate::openapi::CreateCarDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<CreateCarDto>,
) -> Result<(StatusCode, Json<Car>), JsonApiError> {
    let car = state.cars.create(input).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

#[utoipa::path(
    patch, path = "/cars/{id}", tag = "cars",
    params(("id" = Uuid, Path, description = "Car id (UUID v4)")),
    request_body = crate::openapi::UpdateCarDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CarDoc),
        (status = 400, description = "Validation Error or id mismatch"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    UuidV4(id): UuidV4,
    ValidatedJson(input): ValidatedJson<UpdateCarDto>,
) -> Result<Json<Car>, JsonApiError> {
    Ok(Json(state.cars.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/cars/{id}", tag = "cars",
    params(("id" = Uuid, Path, description = "Car id (UUID v4)")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeletedCarDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    UuidV4(id): UuidV4,
) -> Result<Json<Deleted<Car>>, JsonApiError> {
    Ok(Json(state.cars.delete(id).await?))
}
