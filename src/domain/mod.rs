mod envelope;
mod errors;
mod field;
mod keys;
mod ports;
mod validators;
mod widgets;

// Re-export the domain boundary types and ports.
pub use envelope::{ResponseEnvelope, ValidityFlag, encode_validity};
pub use errors::{RegistryError, RequestError};
pub use field::{Field, FieldId, FieldStatus};
pub use keys::{ENTER_KEY_CODE, should_suppress_key};
pub use ports::{CardRegistry, RequestClient};
pub use validators::{is_not_empty, is_number, value_is_not_empty, value_is_number};
pub use widgets::{DatePickerOptions, SelectPickerOptions, WidgetHost};
