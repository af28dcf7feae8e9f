// Use cases layer: validation workflows for the card form and its endpoint.

pub mod check_card;
pub mod form;
pub mod presenter;
pub mod validate_card;

#[cfg(test)]
pub(crate) mod test_support;

pub use check_card::{CardCheckOutcome, CheckCardUseCase};
pub use form::{CardForm, FormFields};
pub use presenter::set_validation;
