mod connection_tests;
mod migration_tests;
mod query_tests;
mod schema_tests;
