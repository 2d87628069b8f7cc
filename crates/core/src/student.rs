//! The student record
//!
//! A [`Student`] is stored in world state as compact JSON under its `id`.
//! Field order on the wire is `id, name, surname, age, program`.
//!
//! Records written by the first deployment of the contract used Spanish
//! field names. Those are still accepted on decode so existing state stays
//! readable after an upgrade:
//!
//! | Field | Legacy name |
//! |-------|-------------|
//! | `name` | `nombre` |
//! | `surname` | `apellido` |
//! | `age` | `edad` |
//! | `program` | `carrera` |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A student record.
///
/// The `id` doubles as the world-state key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, also the storage key
    pub id: String,
    /// First name
    #[serde(alias = "nombre")]
    pub name: String,
    /// Surname
    #[serde(alias = "apellido")]
    pub surname: String,
    /// Age in years
    #[serde(alias = "edad")]
    pub age: i64,
    /// Program or major
    #[serde(alias = "carrera")]
    pub program: String,
}

impl Student {
    /// Create a new student record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        age: i64,
        program: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            age,
            program: program.into(),
        }
    }

    /// The two records written by ledger initialization, in write order
    pub fn seed_records() -> [Student; 2] {
        [
            Student::new("1", "Juan", "Pérez", 21, "Ingeniería"),
            Student::new("2", "Ana", "García", 22, "Medicina"),
        ]
    }

    /// Encode as the bytes stored in world state
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Decode from world-state bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }
}
