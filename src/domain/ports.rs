use async_trait::async_trait;

use crate::domain::envelope::ResponseEnvelope;
use crate::domain::errors::{RegistryError, RequestError};

// Port for the `/request/{method}` endpoint. `Ok` is a usable envelope; every
// other outcome is an `Err` the caller must treat as indeterminate.
#[async_trait]
pub trait RequestClient: Send + Sync {
    async fn request(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<ResponseEnvelope, RequestError>;
}

// Port for the server-side lookup of already registered cards.
#[async_trait]
pub trait CardRegistry: Send + Sync {
    async fn is_registered(&self, card: &str) -> Result<bool, RegistryError>;
}

// Lets shared handles (`Arc<dyn CardRegistry>`) stand in for the registry itself.
#[async_trait]
impl<T> CardRegistry for std::sync::Arc<T>
where
    T: CardRegistry + ?Sized,
{
    async fn is_registered(&self, card: &str) -> Result<bool, RegistryError> {
        (**self).is_registered(card).await
    }
}
