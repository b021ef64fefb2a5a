use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::FindOptions,
    Client, Collection,
};
use tracing::instrument;

use super::{set_document, slug_filter, RecordStore, SlugMatch, WriteResult};
use crate::{Config, Error, FieldPath};

#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    records: Collection<Document>,
}

impl MongoStore {
    /// Opens a client and pings the server, so a returned store is known to
    /// be reachable.
    #[instrument(
        name = "MongoStore::connect",
        skip(config),
        fields(database = %config.database, collection = %config.collection)
    )]
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        let client = Client::with_uri_str(&config.mongo_uri)
            .await
            .map_err(Error::Connect)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(Error::Connect)?;

        tracing::info!("connected to mongo");

        let records = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Ok(Self { client, records })
    }

    /// Releases the client's connection pool. Must be awaited before the
    /// runtime goes away.
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!("mongo client shut down");
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<SlugMatch>, Error> {
        let options = FindOptions::builder().projection(doc! { "_id": 1 }).build();

        let cursor = self
            .records
            .clone_with_type::<SlugMatch>()
            .find(slug_filter(slug), options)
            .await
            .map_err(Error::Query)?;

        cursor.try_collect::<Vec<_>>().await.map_err(Error::Query)
    }

    async fn set_field(
        &self,
        id: &Bson,
        path: &FieldPath,
        value: &str,
    ) -> Result<WriteResult, Error> {
        let result = self
            .records
            .update_one(doc! { "_id": id.clone() }, set_document(path, value), None)
            .await
            .map_err(Error::Update)?;

        Ok(WriteResult {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn find_by_id(&self, id: &Bson) -> Result<Option<Document>, Error> {
        self.records
            .find_one(doc! { "_id": id.clone() }, None)
            .await
            .map_err(Error::Verify)
    }
}
