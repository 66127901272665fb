/// All database primary keys are UUIDs generated by the store
/// (`gen_random_uuid()`), so identifiers stay opaque to callers.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
