use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// A student record as stored in the `students` collection.
///
/// `id` maps to the store-assigned `_id`. It is `None` only before the first
/// insert and is never written by this service. Kept as raw `Bson` so records
/// whose `_id` is not an ObjectId still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    pub name: String,
    pub email: String,
    pub course: String,
    pub gpa: f64,
}

/// Fields accepted for a new record. Carries no identifier: the store assigns it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: String,
    pub gpa: f64,
}

impl Student {
    /// Client-facing form of `_id`: hex for ObjectIds, the raw text for
    /// strings, the extended-JSON rendering for anything else.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

impl From<NewStudent> for Student {
    fn from(new: NewStudent) -> Self {
        Self {
            id: None,
            name: new.name,
            email: new.email,
            course: new.course,
            gpa: new.gpa,
        }
    }
}
