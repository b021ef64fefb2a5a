use crate::{Error, COLLECTION_NAME, DATABASE_NAME};

pub const MONGO_URI_KEY: &str = "MONGO_URI";

/// Where the records live. Only the connection string comes from the
/// environment, the database and collection are fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub mongo_uri: String,
    pub database: String,
    pub collection: String,
}

impl Config {
    /// Reads `.env` from the working directory when there is one, then
    /// builds the config from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        accept_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup(MONGO_URI_KEY)
            .map(|uri| uri.trim().to_string())
            .filter(|uri| !uri.is_empty())
            .ok_or(Error::MissingMongoUri)?;

        Ok(Self {
            mongo_uri,
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
        })
    }
}

/// A missing `.env` is fine, one that cannot be read or parsed is not.
fn accept_env_file<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), Error> {
    match loaded {
        Ok(_) => {
            tracing::debug!("loaded environment from .env");
            Ok(())
        }
        Err(e) if e.not_found() => {
            tracing::debug!("no .env file found, using process environment");
            Ok(())
        }
        Err(e) => Err(Error::EnvFile(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, fs};

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn builds_config_with_fixed_database_and_collection() {
        let config =
            Config::from_lookup(lookup_in(&[(MONGO_URI_KEY, "mongodb://localhost:27017")]))
                .unwrap();

        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "Hull_Schemes");
        assert_eq!(config.collection, "All_agri");
    }

    #[test]
    fn missing_uri_is_an_error() {
        let result = Config::from_lookup(lookup_in(&[("OTHER", "value")]));
        assert!(matches!(result, Err(Error::MissingMongoUri)));
    }

    #[test]
    fn blank_uri_is_treated_as_missing() {
        let result = Config::from_lookup(lookup_in(&[(MONGO_URI_KEY, "   ")]));
        assert!(matches!(result, Err(Error::MissingMongoUri)));
    }

    #[test]
    fn missing_env_file_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = dotenvy::from_path(dir.path().join(".env"));

        assert!(accept_env_file(loaded).is_ok());
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "this line has no equals sign\n").unwrap();

        let result = accept_env_file(dotenvy::from_path(&path));

        assert!(matches!(result, Err(Error::EnvFile(_))));
    }

    #[test]
    fn env_file_values_reach_the_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "SLUG_UPDATER_ENV_FILE_URI=mongodb://from-env-file:27017\n").unwrap();

        accept_env_file(dotenvy::from_path(&path)).unwrap();
        let config = Config::from_lookup(|key| match key {
            MONGO_URI_KEY => std::env::var("SLUG_UPDATER_ENV_FILE_URI").ok(),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.mongo_uri, "mongodb://from-env-file:27017");
    }
}
