//! # Petstore Client
//!
//! Operation bindings over [`oapi_runtime::Client`]: one request builder and
//! one ordered rule table per operation.

use crate::models::{Error, FindPetsParams, NewPet, Pet};
use oapi_runtime::{
    Client, DecodedResponse, EncodeRequest, Method, ParameterLocation, ParameterValue,
    RequestBuilder, RequestExecutor, ResponseRule, RuntimeResult, StatusMatcher,
};

/// Responses of `findPets`.
#[derive(Debug, Clone, PartialEq)]
pub enum FindPetsResponse {
    /// 200, pet list.
    Ok(Vec<Pet>),
    /// Any other status.
    Default(Error),
}

/// Responses of `addPet`.
#[derive(Debug, Clone, PartialEq)]
pub enum AddPetResponse {
    /// 200, the stored pet.
    Ok(Pet),
    /// 201, the stored pet.
    Created(Pet),
    /// Any other status.
    Default(Error),
}

/// Responses of `deletePet`.
#[derive(Debug, Clone, PartialEq)]
pub enum DeletePetResponse {
    /// 204, pet deleted.
    NoContent,
    /// Any other status.
    Default(Error),
}

/// Responses of `findPetById`.
#[derive(Debug, Clone, PartialEq)]
pub enum FindPetByIdResponse {
    /// 200, the pet.
    Ok(Pet),
    /// Any other status.
    Default(Error),
}

/// `GET /pets`
pub fn find_pets_request(params: &FindPetsParams) -> RuntimeResult<RequestBuilder> {
    RequestBuilder::new(Method::Get, "/pets")
        .optional_param(params.tags.as_deref().map(|tags| {
            EncodeRequest::new("tags", ParameterValue::array(tags), ParameterLocation::Query)
        }))?
        .optional_param(params.limit.map(|limit| {
            EncodeRequest::new("limit", ParameterValue::scalar(&limit), ParameterLocation::Query)
        }))
}

/// `POST /pets`
pub fn add_pet_request(body: &NewPet) -> RuntimeResult<RequestBuilder> {
    RequestBuilder::new(Method::Post, "/pets").json_body(body)
}

/// `POST /pets` with a caller-encoded body.
pub fn add_pet_with_body_request(content_type: &str, body: Vec<u8>) -> RequestBuilder {
    RequestBuilder::new(Method::Post, "/pets").raw_body(content_type, body)
}

/// `DELETE /pets/{id}`
pub fn delete_pet_request(id: i64) -> RuntimeResult<RequestBuilder> {
    RequestBuilder::new(Method::Delete, "/pets/{id}").param(&EncodeRequest::new(
        "id",
        ParameterValue::scalar(&id),
        ParameterLocation::Path,
    ))
}

/// `GET /pets/{id}`
pub fn find_pet_by_id_request(id: i64) -> RuntimeResult<RequestBuilder> {
    RequestBuilder::new(Method::Get, "/pets/{id}").param(&EncodeRequest::new(
        "id",
        ParameterValue::scalar(&id),
        ParameterLocation::Path,
    ))
}

/// Rule table of `findPets`.
pub fn find_pets_rules() -> Vec<ResponseRule<FindPetsResponse>> {
    vec![
        ResponseRule::json("200/json", StatusMatcher::Exact(200), "json", FindPetsResponse::Ok),
        ResponseRule::json("default/json", StatusMatcher::Default, "json", FindPetsResponse::Default),
    ]
}

/// Rule table of `addPet`.
pub fn add_pet_rules() -> Vec<ResponseRule<AddPetResponse>> {
    vec![
        ResponseRule::json("200/json", StatusMatcher::Exact(200), "json", AddPetResponse::Ok),
        ResponseRule::json("201/json", StatusMatcher::Exact(201), "json", AddPetResponse::Created),
        ResponseRule::json("default/json", StatusMatcher::Default, "json", AddPetResponse::Default),
    ]
}

/// Rule table of `deletePet`.
pub fn delete_pet_rules() -> Vec<ResponseRule<DeletePetResponse>> {
    vec![
        ResponseRule::empty("204", StatusMatcher::Exact(204), || DeletePetResponse::NoContent),
        ResponseRule::json("default/json", StatusMatcher::Default, "json", DeletePetResponse::Default),
    ]
}

/// Rule table of `findPetById`.
pub fn find_pet_by_id_rules() -> Vec<ResponseRule<FindPetByIdResponse>> {
    vec![
        ResponseRule::json("200/json", StatusMatcher::Exact(200), "json", FindPetByIdResponse::Ok),
        ResponseRule::json("default/json", StatusMatcher::Default, "json", FindPetByIdResponse::Default),
    ]
}

/// Typed petstore client.
#[derive(Debug)]
pub struct PetstoreClient<E> {
    inner: Client<E>,
}

impl<E: RequestExecutor> PetstoreClient<E> {
    /// Wraps a configured runtime client.
    pub fn new(inner: Client<E>) -> Self {
        Self { inner }
    }

    /// The underlying runtime client.
    pub fn inner(&self) -> &Client<E> {
        &self.inner
    }

    /// Returns all pets, optionally filtered by tags and limited in count.
    pub fn find_pets(&self, params: &FindPetsParams) -> RuntimeResult<DecodedResponse<FindPetsResponse>> {
        self.inner.send(find_pets_request(params)?, &find_pets_rules())
    }

    /// Creates a new pet.
    pub fn add_pet(&self, body: &NewPet) -> RuntimeResult<DecodedResponse<AddPetResponse>> {
        self.inner.send(add_pet_request(body)?, &add_pet_rules())
    }

    /// Creates a new pet from an already encoded body.
    pub fn add_pet_with_body(
        &self,
        content_type: &str,
        body: Vec<u8>,
    ) -> RuntimeResult<DecodedResponse<AddPetResponse>> {
        self.inner
            .send(add_pet_with_body_request(content_type, body), &add_pet_rules())
    }

    /// Deletes a pet by id.
    pub fn delete_pet(&self, id: i64) -> RuntimeResult<DecodedResponse<DeletePetResponse>> {
        self.inner.send(delete_pet_request(id)?, &delete_pet_rules())
    }

    /// Returns a pet by id.
    pub fn find_pet_by_id(&self, id: i64) -> RuntimeResult<DecodedResponse<FindPetByIdResponse>> {
        self.inner.send(find_pet_by_id_request(id)?, &find_pet_by_id_rules())
    }
}
