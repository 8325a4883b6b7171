use std::sync::Arc;

use crate::email::sender::Mailer;
use crate::provider::AiProvider;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway. Handlers never touch the pool directly; the
    /// scoring pipeline stays storage-agnostic behind this trait.
    pub store: Arc<dyn Store>,
    /// Active AI backend, resolved once at startup from config.
    pub provider: Arc<dyn AiProvider>,
    /// SMTP mailer. Delivery is best-effort; failures are logged, not raised.
    pub mailer: Arc<Mailer>,
}
