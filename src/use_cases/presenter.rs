use crate::domain::{Field, FieldStatus};

// Applies a validity result to a field. Idempotent: the end state only depends on
// the arguments, never on the previous state.
pub fn set_validation(field: &dyn Field, is_valid: bool, message: &str) {
    if is_valid {
        field.set_status(FieldStatus::Success);
        field.set_custom_validity("");
    } else {
        field.set_status(FieldStatus::Error);
        field.set_custom_validity(message);
    }
}
