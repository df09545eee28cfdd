// src/middleware/admin.rs
use async_trait::async_trait;
use http::Request;

use crate::auth::CurrentUser;
use crate::errors::ApiError;
use crate::middleware::Handler;

/// Authorization guard for admin-only endpoints.
///
/// Wraps a handler and evaluates the supplied predicate against the
/// request's [`CurrentUser`] extension before delegating. A request that
/// carries no user skips the check entirely: authentication runs upstream,
/// and this guard only decides privilege for principals that layer has
/// already attached.
///
/// The guard holds no state and logs nothing; the decision is made fresh on
/// every request.
pub struct AdminRequired<H, P> {
    inner: H,
    is_admin: P,
}

impl<H, P> AdminRequired<H, P> {
    /// Wrap `inner` so it only runs for users accepted by `is_admin`
    pub fn new(inner: H, is_admin: P) -> Self {
        Self { inner, is_admin }
    }
}

#[async_trait]
impl<B, H, P> Handler<B> for AdminRequired<H, P>
where
    B: Send + 'static,
    H: Handler<B>,
    P: Fn(&CurrentUser) -> bool + Send + Sync,
{
    type Response = H::Response;

    async fn handle(&self, req: Request<B>) -> Result<Self::Response, ApiError> {
        if let Some(user) = req.extensions().get::<CurrentUser>() {
            if !(self.is_admin)(user) {
                return Err(ApiError::Forbidden("Admin rights required".to_string()));
            }
        }

        self.inner.handle(req).await
    }
}
