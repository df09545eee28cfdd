use std::future::Future;

use async_trait::async_trait;
use http::Request;

use crate::errors::ApiError;

/// Unit of request handling that middleware can wrap.
///
/// Generic over the request body so a wrapper never changes the wrapped
/// handler's parameter or return contract.
#[async_trait]
pub trait Handler<B>: Send + Sync {
    type Response: Send + 'static;

    async fn handle(&self, req: Request<B>) -> Result<Self::Response, ApiError>;
}

/// Adapter that lets a plain async function act as a [`Handler`].
pub struct HandlerFn<F>(F);

/// Lift an async function into a [`Handler`]
///
/// # Example
/// ```
/// use http::Request;
/// use swim_backend::errors::ApiError;
/// use swim_backend::middleware::handler_fn;
///
/// let handler = handler_fn(|_req: Request<()>| async { Ok::<_, ApiError>("pong") });
/// ```
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn(f)
}

#[async_trait]
impl<B, F, Fut, R> Handler<B> for HandlerFn<F>
where
    B: Send + 'static,
    F: Fn(Request<B>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, ApiError>> + Send,
    R: Send + 'static,
{
    type Response = R;

    async fn handle(&self, req: Request<B>) -> Result<R, ApiError> {
        (self.0)(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handler_fn_delegates() {
        let handler = handler_fn(|req: Request<String>| async move {
            Ok::<_, ApiError>(format!("echo: {}", req.into_body()))
        });

        let req = Request::builder().body("hello".to_string()).unwrap();
        assert_eq!(handler.handle(req).await.unwrap(), "echo: hello");
    }
}
