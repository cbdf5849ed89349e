use crate::constants::{
    FAVORITES_STORAGE_KEY, SCHEMA_VERSION, SCHEMA_VERSION_STORAGE_KEY, SEARCH_HISTORY_STORAGE_KEY,
    THEME_STORAGE_KEY,
};
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use futures::{future, Future, FutureExt, TryFutureExt};
use http::Request;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub type EnvFuture<'a, T> = BoxFuture<'a, T>;
pub type TryEnvFuture<T> = EnvFuture<'static, Result<T, EnvError>>;

pub trait EnvFutureExt: Future {
    fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
    where
        Self: Sized + Send + 'a,
    {
        self.boxed()
    }
}

impl<T: ?Sized> EnvFutureExt for T where T: Future {}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EnvError {
    /// Error returned on [`Env::fetch`] when the transport fails
    Fetch(String),
    /// Error returned on [`Env::fetch`] when the response body is not valid JSON
    Serde(String),
    StorageUnavailable,
    StorageSchemaVersionDowngrade(u32, u32),
    StorageSchemaVersionUpgrade(Box<EnvError>),
    StorageReadError(String),
    StorageWriteError(String),
    Other(String),
}

impl EnvError {
    pub fn message(&self) -> String {
        match &self {
            EnvError::Fetch(message) => format!("Failed to fetch: {message}"),
            EnvError::Serde(message) => format!("Serialization error: {message}"),
            EnvError::StorageUnavailable => "Storage is not available".to_owned(),
            EnvError::StorageSchemaVersionDowngrade(from, to) => {
                format!("Downgrade storage schema version from {from} to {to} is not allowed",)
            }
            EnvError::StorageSchemaVersionUpgrade(source) => format!(
                "Upgrade storage schema version failed caused by: {}",
                source.message()
            ),
            EnvError::StorageReadError(message) => format!("Storage read error: {message}"),
            EnvError::StorageWriteError(message) => format!("Storage write error: {message}"),
            EnvError::Other(message) => format!("Other error: {message}"),
        }
    }
    pub fn code(&self) -> u32 {
        match &self {
            EnvError::Fetch(_) => 1,
            EnvError::Serde(_) => 2,
            EnvError::StorageUnavailable => 3,
            EnvError::StorageSchemaVersionDowngrade(_, _) => 4,
            EnvError::StorageSchemaVersionUpgrade(_) => 5,
            EnvError::StorageReadError(_) => 6,
            EnvError::StorageWriteError(_) => 7,
            EnvError::Other(_) => 1001,
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for EnvError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("EnvError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(error: serde_json::Error) -> Self {
        EnvError::Serde(error.to_string())
    }
}

pub trait Env {
    /// Send the request and decode the response body as JSON into `OUT`.
    ///
    /// Implementations must report transport failures as [`EnvError::Fetch`]
    /// and body decode failures as [`EnvError::Serde`].
    fn fetch<IN, OUT>(request: Request<IN>) -> TryEnvFuture<OUT>
    where
        IN: Serialize + Send + 'static,
        OUT: for<'de> Deserialize<'de> + Send + 'static;
    fn get_storage<T: for<'de> Deserialize<'de> + Send + 'static>(
        key: &str,
    ) -> TryEnvFuture<Option<T>>;
    fn set_storage<T: Serialize>(key: &str, value: Option<&T>) -> TryEnvFuture<()>;
    fn exec_concurrent<F: Future<Output = ()> + Send + 'static>(future: F);
    fn exec_sequential<F: Future<Output = ()> + Send + 'static>(future: F);
    fn now() -> DateTime<Utc>;
    #[cfg(debug_assertions)]
    fn log(message: String);
    fn migrate_storage_schema() -> TryEnvFuture<()>
    where
        Self: Sized,
    {
        Self::get_storage::<u32>(SCHEMA_VERSION_STORAGE_KEY)
            .and_then(|schema_version| async move {
                let mut schema_version = schema_version.unwrap_or_default();
                if schema_version > SCHEMA_VERSION {
                    return Err(EnvError::StorageSchemaVersionDowngrade(
                        schema_version,
                        SCHEMA_VERSION,
                    ));
                };
                if schema_version == 0 {
                    migrate_storage_schema_to_v1::<Self>()
                        .map_err(|error| EnvError::StorageSchemaVersionUpgrade(Box::new(error)))
                        .await?;
                    schema_version = 1;
                };
                if schema_version != SCHEMA_VERSION {
                    panic!(
                        "Storage schema version must be upgraded from {} to {}",
                        schema_version, SCHEMA_VERSION
                    );
                };
                Ok(())
            })
            .boxed_env()
    }
}

fn migrate_storage_schema_to_v1<E: Env>() -> TryEnvFuture<()> {
    future::try_join_all(vec![
        E::set_storage(SCHEMA_VERSION_STORAGE_KEY, Some(&1)),
        E::set_storage::<()>(THEME_STORAGE_KEY, None),
        E::set_storage::<()>(SEARCH_HISTORY_STORAGE_KEY, None),
        E::set_storage::<()>(FAVORITES_STORAGE_KEY, None),
    ])
    .map_ok(|_| ())
    .boxed_env()
}

#[cfg(test)]
mod test {
    use crate::constants::{SCHEMA_VERSION, SCHEMA_VERSION_STORAGE_KEY};
    use crate::runtime::{Env, EnvError};
    use crate::unit_tests::{TestEnv, STORAGE};
    use futures::executor::block_on;

    #[test]
    fn test_migration_from_empty_storage() {
        let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
        block_on(TestEnv::migrate_storage_schema()).expect("Should migrate");
        assert_eq!(
            STORAGE
                .read()
                .unwrap()
                .get(SCHEMA_VERSION_STORAGE_KEY)
                .map(|data| data.to_owned()),
            Some(SCHEMA_VERSION.to_string()),
            "Schema version should be initialized"
        );
    }

    #[test]
    fn test_migration_from_current_version() {
        let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
        STORAGE.write().unwrap().insert(
            SCHEMA_VERSION_STORAGE_KEY.to_owned(),
            SCHEMA_VERSION.to_string(),
        );
        block_on(TestEnv::migrate_storage_schema()).expect("Should migrate");
        assert_eq!(
            STORAGE
                .read()
                .unwrap()
                .get(SCHEMA_VERSION_STORAGE_KEY)
                .map(|data| data.to_owned()),
            Some(SCHEMA_VERSION.to_string()),
            "Schema version should stay the same"
        );
    }

    #[test]
    fn test_migration_from_newer_version() {
        let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
        STORAGE.write().unwrap().insert(
            SCHEMA_VERSION_STORAGE_KEY.to_owned(),
            (SCHEMA_VERSION + 1).to_string(),
        );
        let result = block_on(TestEnv::migrate_storage_schema());
        assert_eq!(
            result,
            Err(EnvError::StorageSchemaVersionDowngrade(
                SCHEMA_VERSION + 1,
                SCHEMA_VERSION
            )),
            "Downgrade should not be allowed"
        );
    }
}
