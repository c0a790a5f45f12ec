//! Task domain rules.
//!
//! The persisted completion flag is an integer column; these helpers are the
//! only place the `0`/`1` encoding is spelled out.

use std::collections::BTreeMap;

use validator::{ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in not-found errors and log fields.
pub const TASK_ENTITY: &str = "Task";

/// Build the not-found error for a task id.
pub fn task_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: TASK_ENTITY,
        id,
    }
}

/// Convert the stored completion flag to a boolean. Any non-zero value is `true`.
pub fn completed_from_db(value: i64) -> bool {
    value != 0
}

/// Convert a completion flag to its stored integer form.
pub fn completed_to_db(value: bool) -> i64 {
    i64::from(value)
}

/// Flatten `validator` errors into a single human-readable message.
///
/// Fields are listed in name order so the message is stable, e.g.
/// `"title: must not be empty"`.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let fields: BTreeMap<_, _> = errors.errors().iter().collect();

    fields
        .into_iter()
        .map(|(field, kind)| {
            let detail = match kind {
                ValidationErrorsKind::Field(errs) => errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
                ValidationErrorsKind::Struct(_) | ValidationErrorsKind::List(_) => {
                    "invalid".to_string()
                }
            };
            format!("{field}: {detail}")
        })
        .collect::<Vec<_>>()
        .join("; ")
}
