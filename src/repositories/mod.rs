pub mod mongodb;
pub mod mysql;
pub mod postgresql;

pub use mongodb::MongoDatabase;
pub use mysql::MySqlDatabase;
pub use postgresql::PostgreSqlDatabase;
