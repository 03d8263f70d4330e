//! Bridge from `validator` derive output to [`CoreError`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .next()
                    .unwrap_or_else(|| {
                        errs.first()
                            .map(|e| e.code.to_string())
                            .unwrap_or_default()
                    });
                format!("{field}: {detail}")
            })
            .collect();
        fields.sort();
        CoreError::Validation(format!("Campos inválidos: {}", fields.join("; ")))
    }
}

/// Run `validator` checks on a request DTO.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}
