//! Schema types of the petstore API.

use serde::{Deserialize, Serialize};

/// A pet as stored, `NewPet` plus its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique id of the pet.
    pub id: i64,
    /// Name of the pet.
    pub name: String,
    /// Type of the pet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Request body of `addPet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    /// Name of the pet.
    pub name: String,
    /// Type of the pet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl NewPet {
    /// Promotes the request body to a stored pet.
    pub fn with_id(self, id: i64) -> Pet {
        Pet {
            id,
            name: self.name,
            tag: self.tag,
        }
    }
}

/// Error payload of every `default` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    /// Error code.
    pub code: i32,
    /// Error message.
    pub message: String,
}

impl Error {
    /// Creates an error payload.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Query parameters of `findPets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindPetsParams {
    /// Tags to filter by.
    pub tags: Option<Vec<String>>,
    /// Maximum number of results to return.
    pub limit: Option<i32>,
}
