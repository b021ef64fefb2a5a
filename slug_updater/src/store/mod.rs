use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};

use crate::{Error, FieldPath};

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// The part of a matched record needed to pick an update target.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SlugMatch {
    #[serde(rename = "_id")]
    pub id: Bson,
}

impl SlugMatch {
    /// Compares the record id against a plain string the way a user would
    /// type it: string ids verbatim, object ids as hex.
    pub fn has_id(&self, id: &str) -> bool {
        match &self.id {
            Bson::String(s) => s == id,
            Bson::ObjectId(oid) => oid.to_hex() == id,
            other => other.to_string() == id,
        }
    }
}

/// Counts reported by the store for a single-record update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteResult {
    pub matched: u64,
    pub modified: u64,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Records whose `filter.slug` or top-level `slug` equals `slug`, in store order.
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<SlugMatch>, Error>;

    /// Sets the value at `path` on the record with `_id == id`.
    async fn set_field(&self, id: &Bson, path: &FieldPath, value: &str)
        -> Result<WriteResult, Error>;

    async fn find_by_id(&self, id: &Bson) -> Result<Option<Document>, Error>;
}

pub fn slug_filter(slug: &str) -> Document {
    doc! {
        "$or": [
            { "filter.slug": slug },
            { "slug": slug },
        ]
    }
}

pub fn set_document(path: &FieldPath, value: &str) -> Document {
    let key = path.dotted();
    doc! { "$set": { key: value } }
}

/// Human readable id, without the quotes `Bson`'s display puts around strings.
pub fn display_id(id: &Bson) -> String {
    match id {
        Bson::String(s) => s.clone(),
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}
