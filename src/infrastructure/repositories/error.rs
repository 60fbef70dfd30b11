use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if message.contains(".slug") {
                        DomainError::Conflict("slug already exists".into())
                    } else {
                        DomainError::Conflict("unique constraint violated".into())
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ if message.contains("UNIQUE constraint failed") => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                _ if message.contains("FOREIGN KEY constraint failed") => {
                    DomainError::NotFound("referenced record not found".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
