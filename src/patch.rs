//! JSON patch documents applied to transfer-shape copies.
//!
//! A [`PatchDocument`] is a list of `add`, `remove`, `replace`, `move` and
//! `test` operations addressing top-level fields by JSON pointer (`/age`).
//! Documents are applied to a copy of the target and only written back when
//! every operation succeeds, so a failing document never leaves the target
//! half-edited.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::dto::employee::EmployeeForUpdateDto;

#[derive(Debug, Error, PartialEq)]
pub enum PatchError {
    #[error("the target location '{0}' does not exist")]
    UnknownPath(String),

    #[error("the value at '{path}' is invalid: {reason}")]
    InvalidValue { path: String, reason: String },

    #[error("the current value at '{path}' is not equal to the test value")]
    TestFailed { path: String },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Test { path: String, value: Value },
}

/// Field-addressable structure that patch documents can edit.
pub trait PatchTarget: Clone {
    /// Current value of the field at `path`, `Value::Null` when unset.
    fn read(&self, path: &str) -> Result<Value, PatchError>;

    /// Writes `value` to the field at `path`; `Value::Null` clears it.
    fn write(&mut self, path: &str, value: Value) -> Result<(), PatchError>;
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PatchDocument(Vec<PatchOperation>);

impl PatchDocument {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self(operations)
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    /// Applies every operation in order. On error `target` is left untouched.
    pub fn apply_to<T: PatchTarget>(&self, target: &mut T) -> Result<(), PatchError> {
        let mut working = target.clone();
        for operation in &self.0 {
            apply_operation(&mut working, operation)?;
        }
        *target = working;
        Ok(())
    }
}

fn apply_operation<T: PatchTarget>(
    target: &mut T,
    operation: &PatchOperation,
) -> Result<(), PatchError> {
    match operation {
        PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
            target.write(path, value.clone())
        }
        PatchOperation::Remove { path } => target.write(path, Value::Null),
        PatchOperation::Move { from, path } => {
            let value = target.read(from)?;
            target.write(from, Value::Null)?;
            target.write(path, value)
        }
        PatchOperation::Test { path, value } => {
            if &target.read(path)? == value {
                Ok(())
            } else {
                Err(PatchError::TestFailed { path: path.clone() })
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EmployeeField {
    Name,
    Age,
    Position,
}

impl EmployeeField {
    fn from_path(path: &str) -> Result<Self, PatchError> {
        let field = path.strip_prefix('/').unwrap_or(path);
        match field.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "position" => Ok(Self::Position),
            _ => Err(PatchError::UnknownPath(path.to_string())),
        }
    }
}

fn text_value(path: &str, value: Value) -> Result<Option<String>, PatchError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        other => Err(PatchError::InvalidValue {
            path: path.to_string(),
            reason: format!("expected a string, got {other}"),
        }),
    }
}

fn integer_value(path: &str, value: Value) -> Result<Option<i32>, PatchError> {
    let invalid = |reason: String| PatchError::InvalidValue {
        path: path.to_string(),
        reason,
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| invalid(format!("{number} is not a 32-bit integer"))),
        other => Err(invalid(format!("expected an integer, got {other}"))),
    }
}

impl PatchTarget for EmployeeForUpdateDto {
    fn read(&self, path: &str) -> Result<Value, PatchError> {
        let value = match EmployeeField::from_path(path)? {
            EmployeeField::Name => self.name.clone().map(Value::from),
            EmployeeField::Age => self.age.map(Value::from),
            EmployeeField::Position => self.position.clone().map(Value::from),
        };
        Ok(value.unwrap_or(Value::Null))
    }

    fn write(&mut self, path: &str, value: Value) -> Result<(), PatchError> {
        match EmployeeField::from_path(path)? {
            EmployeeField::Name => self.name = text_value(path, value)?,
            EmployeeField::Age => self.age = integer_value(path, value)?,
            EmployeeField::Position => self.position = text_value(path, value)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employee() -> EmployeeForUpdateDto {
        EmployeeForUpdateDto {
            name: Some("Sam Raiden".to_string()),
            age: Some(26),
            position: Some("Dev".to_string()),
        }
    }

    fn document(value: Value) -> PatchDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_standard_operations() {
        let doc = document(json!([
            { "op": "replace", "path": "/age", "value": 30 },
            { "op": "remove", "path": "/position" },
            { "op": "move", "from": "/name", "path": "/position" },
        ]));

        assert_eq!(doc.operations().len(), 3);
        assert_eq!(
            doc.operations()[1],
            PatchOperation::Remove {
                path: "/position".to_string()
            }
        );
    }

    #[test]
    fn replace_and_add_set_fields() {
        let mut target = employee();

        document(json!([
            { "op": "replace", "path": "/age", "value": 31 },
            { "op": "add", "path": "/Position", "value": "Lead" },
        ]))
        .apply_to(&mut target)
        .unwrap();

        assert_eq!(target.age, Some(31));
        assert_eq!(target.position.as_deref(), Some("Lead"));
    }

    #[test]
    fn remove_clears_the_field() {
        let mut target = employee();

        document(json!([{ "op": "remove", "path": "/age" }]))
            .apply_to(&mut target)
            .unwrap();

        assert_eq!(target.age, None);
    }

    #[test]
    fn move_transfers_between_fields() {
        let mut target = employee();

        document(json!([{ "op": "move", "from": "/name", "path": "/position" }]))
            .apply_to(&mut target)
            .unwrap();

        assert_eq!(target.name, None);
        assert_eq!(target.position.as_deref(), Some("Sam Raiden"));
    }

    #[test]
    fn failed_test_leaves_target_untouched() {
        let mut target = employee();

        let result = document(json!([
            { "op": "replace", "path": "/age", "value": 50 },
            { "op": "test", "path": "/name", "value": "Someone Else" },
        ]))
        .apply_to(&mut target);

        assert_eq!(
            result,
            Err(PatchError::TestFailed {
                path: "/name".to_string()
            })
        );
        assert_eq!(target, employee());
    }

    #[test]
    fn unknown_path_is_rejected() {
        let mut target = employee();

        let result = document(json!([{ "op": "replace", "path": "/salary", "value": 1 }]))
            .apply_to(&mut target);

        assert_eq!(result, Err(PatchError::UnknownPath("/salary".to_string())));
    }

    #[test]
    fn type_mismatch_is_rejected() {
        let mut target = employee();

        let moved = document(json!([{ "op": "move", "from": "/name", "path": "/age" }]))
            .apply_to(&mut target);
        let replaced = document(json!([{ "op": "replace", "path": "/age", "value": 3.5 }]))
            .apply_to(&mut target);

        assert!(matches!(moved, Err(PatchError::InvalidValue { .. })));
        assert!(matches!(replaced, Err(PatchError::InvalidValue { .. })));
        assert_eq!(target, employee());
    }

    #[test]
    fn unsupported_operation_fails_to_deserialize() {
        let result =
            serde_json::from_value::<PatchDocument>(json!([{ "op": "copy", "from": "/a", "path": "/b" }]));

        assert!(result.is_err());
    }
}
