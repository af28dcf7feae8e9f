use crate::domain::{Field, RequestClient, value_is_not_empty, value_is_number};
use crate::use_cases::presenter::set_validation;

pub const CARD_EMPTY_MESSAGE: &str = "fill in the user's card";
pub const CARD_FORMAT_MESSAGE: &str = "invalid card format";
pub const CARD_REQUEST_ERROR_MESSAGE: &str = "server request error";
pub const CARD_REGISTERED_MESSAGE: &str = "card is already registered";

// Remote method that answers whether a card may be registered.
pub const VALIDATE_METHOD: &str = "validate";

// Terminal state of a single card check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCheckOutcome {
    Empty,
    InvalidFormat,
    Available,
    AlreadyRegistered,
    RequestFailed,
}

// Card check use case: local validators first, then the remote lookup.
pub struct CheckCardUseCase<R> {
    pub client: R,
}

impl<R> CheckCardUseCase<R>
where
    R: RequestClient,
{
    #[tracing::instrument(name = "check_card", skip_all, fields(field = %field.id()))]
    pub async fn execute(&self, field: &dyn Field) -> CardCheckOutcome {
        // One read: the validated value is the one sent.
        let value = field.value();
        let Some(card) = value.filter(|v| value_is_not_empty(Some(v.as_str()))) else {
            set_validation(field, false, CARD_EMPTY_MESSAGE);
            return CardCheckOutcome::Empty;
        };
        if !value_is_number(Some(card.as_str())) {
            set_validation(field, false, CARD_FORMAT_MESSAGE);
            return CardCheckOutcome::InvalidFormat;
        }

        // Sent as typed, the server decides what a well-formed card is.
        let validity = self
            .client
            .request(VALIDATE_METHOD, &[("card", card.as_str())])
            .await
            .and_then(|envelope| envelope.validity());

        match validity {
            Ok(is_valid) => {
                set_validation(field, is_valid, CARD_REGISTERED_MESSAGE);
                if is_valid {
                    CardCheckOutcome::Available
                } else {
                    CardCheckOutcome::AlreadyRegistered
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "card check request failed.");
                set_validation(field, false, CARD_REQUEST_ERROR_MESSAGE);
                CardCheckOutcome::RequestFailed
            }
        }
    }
}
