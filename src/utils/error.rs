use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown kind: {kind}")]
    UnknownKind { kind: String },

    #[error("No mapper registered for type: {name}")]
    UnregisteredType { name: String },

    #[error("There is no category with id {id}")]
    CategoryNotFound { id: u64 },

    #[error("There is no course with name {name}")]
    CourseNotFound { name: String },

    #[error("Category {name} was never registered")]
    UnknownCategory { name: String },

    #[error("Record with id={id} not found")]
    RecordNotFound { id: i64 },

    #[error("Db commit error: {0}")]
    DbCommit(#[source] rusqlite::Error),

    #[error("Db update error: {0}")]
    DbUpdate(#[source] rusqlite::Error),

    #[error("Db delete error: {0}")]
    DbDelete(#[source] rusqlite::Error),

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] rusqlite_migration::Error),

    #[error("Student has no persisted id")]
    MissingId,
}

pub type Result<T> = std::result::Result<T, EngineError>;
