use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};
use gatehouse_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Path` extractor that also runs `validator` rules on the parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::new(StatusCode::BAD_REQUEST, anyhow!("Invalid path parameters")))?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow!("{}", format_errors(&errors)),
            )
        })?;

        Ok(ValidatedPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Params {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(length(max = 2))]
        code: String,
    }

    #[test]
    fn test_format_errors_uses_custom_message() {
        let params = Params {
            name: String::new(),
            code: "ok".to_string(),
        };
        let errors = params.validate().unwrap_err();
        assert_eq!(format_errors(&errors), "name is required");
    }

    #[test]
    fn test_format_errors_falls_back_to_field_name() {
        let params = Params {
            name: "a".to_string(),
            code: "too-long".to_string(),
        };
        let errors = params.validate().unwrap_err();
        assert_eq!(format_errors(&errors), "code is invalid");
    }
}
