use crate::{store::MongoStore, Config, Error, Outcome, UpdateRequest, Updater};

/// One full invocation against MongoDB: connect, update, report, disconnect.
/// The client is shut down whether or not the update succeeded.
pub async fn run(config: &Config, request: &UpdateRequest) -> Result<Outcome, Error> {
    let store = MongoStore::connect(config).await?;
    println!("Connected to MongoDB");

    let result = Updater::new(&store).run(request).await;
    if let Ok(outcome) = &result {
        print!("{}", outcome);
    }

    store.close().await;
    println!("\nMongoDB connection closed");

    result
}
