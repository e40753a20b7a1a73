// src/factories/database_factory.rs

use crate::{
    RestaurantError,
    ports::DatabaseService,
    repositories::{MongoDatabase, MySqlDatabase, PostgreSqlDatabase},
};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Database backends the factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseKind {
    MySql,
    PostgreSql,
    MongoDb,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 3] = [Self::MySql, Self::PostgreSql, Self::MongoDb];

    /// Configuration key for this backend.
    pub fn key(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::MongoDb => "mongodb",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for DatabaseKind {
    type Error = RestaurantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "postgresql" => Ok(Self::PostgreSql),
            "mongodb" => Ok(Self::MongoDb),
            _ => Err(RestaurantError::UnknownDatabase(value.to_string())),
        }
    }
}

impl FromStr for DatabaseKind {
    type Err = RestaurantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Factory for database backends keyed by configuration strings.
///
/// Callers only ever see the `DatabaseService` abstraction; which concrete
/// backend sits behind it is decided here and nowhere else.
#[derive(Debug, Clone)]
pub struct DatabaseFactory;

impl DatabaseFactory {
    /// Creates the backend named by `key`.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn DatabaseService>)` - Fresh backend instance
    /// * `Err(RestaurantError::UnknownDatabase)` - `key` names no backend
    pub fn create(key: &str) -> Result<Arc<dyn DatabaseService>, RestaurantError> {
        let kind = DatabaseKind::try_from(key)?;
        Ok(Self::create_kind(kind))
    }

    pub fn create_kind(kind: DatabaseKind) -> Arc<dyn DatabaseService> {
        debug!("Creating {} database backend", kind);
        match kind {
            DatabaseKind::MySql => Arc::new(MySqlDatabase::new()),
            DatabaseKind::PostgreSql => Arc::new(PostgreSqlDatabase::new()),
            DatabaseKind::MongoDb => Arc::new(MongoDatabase::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        let expected = [
            ("mysql", "MySQL", 25.99),
            ("postgresql", "PostgreSQL", 29.99),
            ("mongodb", "MongoDB", 27.50),
        ];

        for (key, type_name, price) in expected {
            let db = DatabaseFactory::create(key).unwrap();
            assert_eq!(db.type_name(), type_name);

            let order = db.find_by_id(42);
            assert_eq!(order.id(), 42);
            assert_eq!(order.total_amount(), price);
        }
    }

    #[test]
    fn test_keys_ignore_case_and_whitespace() {
        let db = DatabaseFactory::create(" MongoDB ").unwrap();
        assert_eq!(db.type_name(), "MongoDB");
    }

    #[test]
    fn test_unknown_key() {
        for key in ["oracle", "", "my sql", "sqlite"] {
            let err = DatabaseFactory::create(key).err().unwrap();
            assert!(err.is_invalid_argument());
            assert_eq!(err.key(), Some(key));
        }
    }

    #[test]
    fn test_kind_key_round_trips() {
        for kind in DatabaseKind::ALL {
            assert_eq!(kind.key().parse::<DatabaseKind>().unwrap(), kind);
        }
    }
}
