use models::errors::ModelError;
use thiserror::Error;

/// Failures of the greeting Store; the service layer adds none of its own.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Storage(#[from] ModelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> Result<(), ServiceError> {
        Err(ModelError::Db("connection refused".into()))?;
        Ok(())
    }

    #[test]
    fn model_errors_convert_with_question_mark() {
        let err = lookup().unwrap_err();
        assert!(matches!(err, ServiceError::Storage(ModelError::Db(_))));
        assert_eq!(err.to_string(), "storage error: database error: connection refused");
    }
}
