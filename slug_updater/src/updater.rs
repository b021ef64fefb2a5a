use crate::{
    store::{display_id, RecordStore, SlugMatch},
    Applied, Error, Field, Outcome, Resolution, PREFERRED_RECORD_ID,
};

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateRequest {
    pub slug: String,
    pub value: String,
    pub field: Field,
    /// Restricts the target to the slug match with this `_id`.
    pub record_id: Option<String>,
}

/// Picks the record to update among the slug matches.
///
/// An explicit id must be among the matches. Otherwise a single match is
/// taken as is, and among several the preferred record wins over the first
/// one in store order.
pub fn select_target<'a>(
    matches: &'a [SlugMatch],
    record_id: Option<&str>,
) -> Option<(&'a SlugMatch, Resolution)> {
    if let Some(id) = record_id {
        return matches
            .iter()
            .find(|m| m.has_id(id))
            .map(|m| (m, Resolution::Explicit));
    }

    match matches {
        [] => None,
        [only] => Some((only, Resolution::Only)),
        [first, ..] => match matches.iter().find(|m| m.has_id(PREFERRED_RECORD_ID)) {
            Some(preferred) => Some((preferred, Resolution::Preferred)),
            None => Some((first, Resolution::FirstOfMany)),
        },
    }
}

/// Runs the lookup, update and verification steps against a store.
pub struct Updater<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> Updater<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip_all, fields(slug = %request.slug, path = %request.field.path()))]
    pub async fn run(&self, request: &UpdateRequest) -> Result<Outcome, Error> {
        let matches = self.store.find_by_slug(&request.slug).await?;
        tracing::debug!(count = matches.len(), "slug query returned");

        let Some((target, resolution)) = select_target(&matches, request.record_id.as_deref())
        else {
            return Ok(Outcome::NotFound {
                slug: request.slug.clone(),
                id: request.record_id.clone(),
            });
        };

        let target_id = display_id(&target.id);
        if resolution == Resolution::FirstOfMany {
            tracing::warn!(
                matches = matches.len(),
                id = %target_id,
                "several documents share this slug, updating the first one returned"
            );
        }

        tracing::info!(id = %target_id, ?resolution, "selected document");
        let on_record = |source: Error| Error::OnRecord {
            id: target_id.clone(),
            source: Box::new(source),
        };

        let path = request.field.path();
        let write = self
            .store
            .set_field(&target.id, &path, &request.value)
            .await
            .map_err(on_record)?;
        tracing::debug!(matched = write.matched, modified = write.modified, "update applied");

        let record = self
            .store
            .find_by_id(&target.id)
            .await
            .map_err(on_record)?
            .ok_or_else(|| Error::RecordVanished(target_id.clone()))?;

        Ok(Outcome::Applied(Applied {
            slug: request.slug.clone(),
            matches: matches.len(),
            target_id,
            resolution,
            label: request.field.label(),
            value: request.value.clone(),
            modified: write.modified > 0,
            current: path.lookup_str(&record).map(|s| s.to_string()),
            path,
        }))
    }
}
