use crate::domain::{CardRegistry, RegistryError};

// Server-side answer to "may this card be registered".
pub struct ValidateCardResponse {
    // True when the card is not registered yet.
    pub is_valid: bool,
}

#[derive(Debug)]
pub enum ValidateCardError {
    MissingCard,
    Registry(RegistryError),
}

// Validate-card use case with an injected registry.
pub struct ValidateCardUseCase<G> {
    pub registry: G,
}

impl<G> ValidateCardUseCase<G>
where
    G: CardRegistry,
{
    pub async fn execute(&self, card: Option<String>) -> Result<ValidateCardResponse, ValidateCardError> {
        let card = card.ok_or(ValidateCardError::MissingCard)?;

        let registered = self
            .registry
            .is_registered(&card)
            .await
            .map_err(ValidateCardError::Registry)?;

        Ok(ValidateCardResponse {
            is_valid: !registered,
        })
    }
}
