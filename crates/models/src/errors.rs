use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}
