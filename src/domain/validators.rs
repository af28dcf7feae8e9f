// Pure predicates over a field's current value.

use crate::domain::field::Field;

pub fn value_is_not_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

// Finite decimal number, surrounding whitespace allowed. No card-specific format is
// enforced here; that is left to the remote check.
pub fn value_is_number(value: Option<&str>) -> bool {
    let Some(raw) = value else {
        return false;
    };
    // `f64::from_str` accepts "inf"/"nan" spellings, the finiteness check drops them.
    raw.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

pub fn is_not_empty(field: &dyn Field) -> bool {
    value_is_not_empty(field.value().as_deref())
}

pub fn is_number(field: &dyn Field) -> bool {
    value_is_number(field.value().as_deref())
}
