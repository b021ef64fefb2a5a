/// Everything that can stop an update run short of a normal outcome.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("MONGO_URI not set in the environment or .env file")]
    MissingMongoUri,

    #[error("error loading .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("error querying documents: {0}")]
    Query(#[source] mongodb::error::Error),

    #[error("error updating document: {0}")]
    Update(#[source] mongodb::error::Error),

    #[error("error verifying update: {0}")]
    Verify(#[source] mongodb::error::Error),

    #[error("document with ID {id}: {source}")]
    OnRecord {
        id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("document with ID {0} disappeared before the update could be verified")]
    RecordVanished(String),

    #[error("matched document has no _id")]
    MissingId,

    #[error("cannot set `{path}`: `{segment}` is not a document")]
    PathConflict { path: String, segment: String },

    #[error("invalid language code '{0}'")]
    UnsupportedLanguage(String),
}
