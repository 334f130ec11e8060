use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CarDoc { pub id: Uuid, pub brand: String, pub model: String, pub year: i32 }

/// `year` defaults to the current year when omitted. Unknown fields are rejected.
#[derive(ToSchema)]
pub struct CreateCarDoc {
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
}

/// Every field optional; `id`, when sent, must equal the path id.
#[derive(ToSchema)]
pub struct UpdateCarDoc {
    pub id: Option<Uuid>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[derive(ToSchema)]
pub struct DeletedCarDoc { pub message: String, pub deleted: CarDoc }

#[derive(ToSchema)]
pub struct BrandDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct CreateBrandDoc { pub name: String }

#[derive(ToSchema)]
pub struct UpdateBrandDoc { pub name: Option<String> }

#[derive(ToSchema)]
pub struct DeletedBrandDoc { pub message: String, pub deleted: BrandDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::seed::run_seed,
        crate::routes::cars::list,
        crate::routes::cars::get,
        crate::routes::cars::create,
        crate::routes::cars::update,
        crate::routes::cars::delete,
        crate::routes::brands::list,
        crate::routes::brands::get,
        crate::routes::brands::create,
        crate::routes::brands::update,
        crate::routes::brands::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CarDoc,
            CreateCarDoc,
            UpdateCarDoc,
            DeletedCarDoc,
            BrandDoc,
            CreateBrandDoc,
            UpdateBrandDoc,
            DeletedBrandDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars"),
        (name = "brands"),
        (name = "seed")
    )
)]
pub struct ApiDoc;
