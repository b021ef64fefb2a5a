use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use tokio::sync::Mutex;

use super::{RecordStore, SlugMatch, WriteResult};
use crate::{Error, FieldPath};

/// Records held in insertion order, which doubles as the result order of
/// slug queries.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Document>>,
    updates: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = Document>) -> Self {
        Self {
            records: Mutex::new(records.into_iter().collect()),
            updates: Mutex::new(0),
        }
    }

    pub async fn get(&self, id: &Bson) -> Option<Document> {
        self.records
            .lock()
            .await
            .iter()
            .find(|record| record.get("_id") == Some(id))
            .cloned()
    }

    /// How many times `set_field` has been called.
    pub async fn update_count(&self) -> usize {
        *self.updates.lock().await
    }
}

fn slug_matches(record: &Document, slug: &str) -> bool {
    let nested = record
        .get_document("filter")
        .ok()
        .and_then(|filter| filter.get_str("slug").ok());
    let top_level = record.get_str("slug").ok();

    nested == Some(slug) || top_level == Some(slug)
}

fn set_path(record: &mut Document, path: &FieldPath, value: &str) -> Result<bool, Error> {
    let conflict = |segment: &str| Error::PathConflict {
        path: path.dotted(),
        segment: segment.to_string(),
    };

    let mut current = record;
    for segment in path.parents() {
        if !current.contains_key(segment) {
            current.insert(segment.clone(), Document::new());
        }

        current = match current.get_mut(segment) {
            Some(Bson::Document(inner)) => inner,
            _ => return Err(conflict(segment)),
        };
    }

    let value = Bson::String(value.to_string());
    if current.get(path.leaf()) == Some(&value) {
        return Ok(false);
    }

    current.insert(path.leaf(), value);
    Ok(true)
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<SlugMatch>, Error> {
        self.records
            .lock()
            .await
            .iter()
            .filter(|record| slug_matches(record, slug))
            .map(|record| {
                record
                    .get("_id")
                    .cloned()
                    .map(|id| SlugMatch { id })
                    .ok_or(Error::MissingId)
            })
            .collect()
    }

    async fn set_field(
        &self,
        id: &Bson,
        path: &FieldPath,
        value: &str,
    ) -> Result<WriteResult, Error> {
        *self.updates.lock().await += 1;

        let mut records = self.records.lock().await;
        let Some(record) = records.iter_mut().find(|record| record.get("_id") == Some(id)) else {
            return Ok(WriteResult::default());
        };

        let modified = set_path(record, path, value)?;

        Ok(WriteResult {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn find_by_id(&self, id: &Bson) -> Result<Option<Document>, Error> {
        Ok(self.get(id).await)
    }
}
