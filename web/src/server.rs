//! # Server Wrapper
//!
//! Binds request parameters with the style codec and forwards typed values to
//! a [`PetstoreApi`] implementation. Binding failures become `400` responses
//! carrying an [`Error`] body.

use crate::models::{Error, FindPetsParams, NewPet};
use crate::openapi::{decode_request, document};
use actix_web::http::StatusCode;
use actix_web::{error, web, HttpRequest, HttpResponse, ResponseError};
use derive_more::{Display, From};
use oapi_runtime::{
    decode, FromParam, ParameterLocation, ParameterValue, QueryPairs, RawParameter, RuntimeError,
    RuntimeResult, Target,
};

/// Operations of the petstore API, one method per `operationId`.
pub trait PetstoreApi: Send + Sync + 'static {
    /// `GET /pets`
    fn find_pets(&self, params: FindPetsParams) -> HttpResponse;
    /// `POST /pets`
    fn add_pet(&self, body: NewPet) -> HttpResponse;
    /// `DELETE /pets/{id}`
    fn delete_pet(&self, id: i64) -> HttpResponse;
    /// `GET /pets/{id}`
    fn find_pet_by_id(&self, id: i64) -> HttpResponse;
}

/// A binding failure rendered as an HTTP response.
#[derive(Debug, Display, From)]
#[display("{_0}")]
pub struct ApiError(pub RuntimeError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        if self.0.is_client_fault() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(Error::new(i32::from(status.as_u16()), self.0.to_string()))
    }
}

fn scalar<T: FromParam>(name: &str, value: Option<ParameterValue>) -> RuntimeResult<Option<T>> {
    value.map(|v| v.into_scalar(name)).transpose()
}

fn required<T: FromParam>(name: &str, value: Option<ParameterValue>) -> RuntimeResult<T> {
    scalar(name, value)?.ok_or_else(|| RuntimeError::MissingParameter {
        name: name.to_string(),
    })
}

/// Binds the query of `findPets`.
pub fn bind_find_pets(query: &QueryPairs) -> RuntimeResult<FindPetsParams> {
    let tags = decode(
        &decode_request("/pets", "get", "tags", ParameterLocation::Query, Target::Array),
        RawParameter::Query(query),
    )?
    .map(|v| v.into_array("tags"))
    .transpose()?;

    let limit = decode(
        &decode_request("/pets", "get", "limit", ParameterLocation::Query, Target::Scalar),
        RawParameter::Query(query),
    )?;

    Ok(FindPetsParams {
        tags,
        limit: scalar("limit", limit)?,
    })
}

/// Binds the `{id}` path segment.
pub fn bind_pet_id(raw: Option<&str>) -> RuntimeResult<i64> {
    let value = decode(
        &decode_request("/pets/{id}", "get", "id", ParameterLocation::Path, Target::Scalar),
        RawParameter::Value(raw),
    )?;
    required("id", value)
}

async fn find_pets<S: PetstoreApi>(
    api: web::Data<S>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let params = bind_find_pets(&QueryPairs::parse(req.query_string()))?;
    Ok(api.find_pets(params))
}

async fn add_pet<S: PetstoreApi>(api: web::Data<S>, body: web::Json<NewPet>) -> HttpResponse {
    api.add_pet(body.into_inner())
}

async fn delete_pet<S: PetstoreApi>(
    api: web::Data<S>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = bind_pet_id(req.match_info().get("id"))?;
    Ok(api.delete_pet(id))
}

async fn find_pet_by_id<S: PetstoreApi>(
    api: web::Data<S>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = bind_pet_id(req.match_info().get("id"))?;
    Ok(api.find_pet_by_id(id))
}

async fn openapi_document() -> HttpResponse {
    match document() {
        Ok(doc) => HttpResponse::Ok().json(doc),
        Err(e) => {
            log::error!("embedded OpenAPI document is invalid: {}", e);
            HttpResponse::InternalServerError().json(Error::new(500, e.to_string()))
        }
    }
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = Error::new(400, err.to_string());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Registers the petstore routes for `S` and `GET /openapi.json`.
///
/// The implementation itself is expected as `web::Data<S>` app data.
pub fn configure<S: PetstoreApi>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/pets", web::get().to(find_pets::<S>))
        .route("/pets", web::post().to(add_pet::<S>))
        .route("/pets/{id}", web::get().to(find_pet_by_id::<S>))
        .route("/pets/{id}", web::delete().to(delete_pet::<S>))
        .route("/openapi.json", web::get().to(openapi_document));
}
