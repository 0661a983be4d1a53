//! In-memory [`PetstoreApi`] implementation.

use crate::models::{Error, FindPetsParams, NewPet, Pet};
use crate::server::PetstoreApi;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

const FIRST_ID: i64 = 1000;

#[derive(Debug)]
struct State {
    pets: BTreeMap<i64, Pet>,
    next_id: i64,
}

/// Pets kept in a map guarded by a mutex. Ids are assigned sequentially.
#[derive(Debug)]
pub struct PetStore {
    state: Mutex<State>,
}

impl Default for PetStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends an [`Error`] body whose code mirrors the status.
pub fn petstore_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(Error::new(i32::from(status.as_u16()), message))
}

impl PetStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                pets: BTreeMap::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pets in id order, filtered by any of `tags` and cut at `limit`.
    pub fn list(&self, params: &FindPetsParams) -> Vec<Pet> {
        let limit = params
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(0));
        self.lock()
            .pets
            .values()
            .filter(|pet| match &params.tags {
                Some(tags) => pet.tag.as_ref().is_some_and(|tag| tags.contains(tag)),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Stores a pet under the next id.
    pub fn insert(&self, pet: NewPet) -> Pet {
        let mut state = self.lock();
        let pet = pet.with_id(state.next_id);
        state.next_id += 1;
        state.pets.insert(pet.id, pet.clone());
        pet
    }

    /// Looks a pet up.
    pub fn get(&self, id: i64) -> Option<Pet> {
        self.lock().pets.get(&id).cloned()
    }

    /// Removes a pet; `false` if there was none.
    pub fn remove(&self, id: i64) -> bool {
        self.lock().pets.remove(&id).is_some()
    }
}

impl PetstoreApi for PetStore {
    fn find_pets(&self, params: FindPetsParams) -> HttpResponse {
        HttpResponse::Ok().json(self.list(&params))
    }

    fn add_pet(&self, body: NewPet) -> HttpResponse {
        let pet = self.insert(body);
        log::debug!("stored pet {}", pet.id);
        HttpResponse::Created().json(pet)
    }

    fn delete_pet(&self, id: i64) -> HttpResponse {
        if self.remove(id) {
            HttpResponse::NoContent().finish()
        } else {
            petstore_error(
                StatusCode::NOT_FOUND,
                format!("Could not find pet with ID {}", id),
            )
        }
    }

    fn find_pet_by_id(&self, id: i64) -> HttpResponse {
        match self.get(id) {
            Some(pet) => HttpResponse::Ok().json(pet),
            None => petstore_error(
                StatusCode::NOT_FOUND,
                format!("Could not find pet with ID {}", id),
            ),
        }
    }
}
