use actix_web::{HttpResponse, Responder, post, web};
use log::error;
use serde_json::json;

use crate::dto::grid::GridRequest;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::grid;

/// Grid refresh endpoint invoked by the browser-side table widget.
#[post("/v1/customers/query")]
pub async fn api_v1_customers_query(
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<GridRequest>,
) -> impl Responder {
    match grid::query_customers(repo.get_ref(), &request) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(e) => {
            error!("Failed to query customers: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
