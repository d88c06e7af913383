use crate::session::state::TypedSession;
use anyhow::anyhow;
use axum::http::{header::LOCATION, HeaderValue, Request, Response, StatusCode};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::{Layer, Service};
use tower_sessions::Session;
use tracing::Instrument;

/// Routing guard: protected paths redirect anonymous visitors to the login
/// page (carrying the original path in a `redirect` query parameter), while
/// auth pages bounce already-logged-in visitors to the dashboard. On
/// protected paths the resolved user id is stored as a request extension.
#[derive(Debug, Clone)]
pub struct AuthorizedSessionLayer {
    protected_paths: &'static [&'static str],
    auth_paths: &'static [&'static str],
}

impl AuthorizedSessionLayer {
    pub fn new(
        protected_paths: &'static [&'static str],
        auth_paths: &'static [&'static str],
    ) -> Self {
        Self {
            protected_paths,
            auth_paths,
        }
    }
}

impl<S> Layer<S> for AuthorizedSessionLayer {
    type Service = AuthorizedSession<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthorizedSession {
            inner,
            protected_paths: self.protected_paths,
            auth_paths: self.auth_paths,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizedSession<S> {
    inner: S,
    protected_paths: &'static [&'static str],
    auth_paths: &'static [&'static str],
}

impl<S> AuthorizedSession<S> {
    fn see_other<ResBody>(location: HeaderValue) -> Response<ResBody>
    where
        ResBody: Default,
    {
        let mut res = Response::default();
        *res.status_mut() = StatusCode::SEE_OTHER;
        res.headers_mut().insert(LOCATION, location);
        res
    }

    fn to_login<ResBody>(original_path: &str) -> Response<ResBody>
    where
        ResBody: Default,
    {
        tracing::info!("User id not found in session");
        let location = HeaderValue::from_str(&format!("/login?redirect={original_path}"))
            .unwrap_or_else(|_| HeaderValue::from_static("/login"));
        Self::see_other(location)
    }

    fn to_dashboard<ResBody>() -> Response<ResBody>
    where
        ResBody: Default,
    {
        tracing::info!("User is already logged in");
        Self::see_other(HeaderValue::from_static("/dashboard"))
    }

    fn internal_server_error<ResBody>(error: anyhow::Error) -> Response<ResBody>
    where
        ResBody: Default,
    {
        tracing::error!("{:#?}", error);
        let mut res = Response::default();
        *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        res
    }
}

impl<ReqBody, ResBody, S> Service<Request<ReqBody>> for AuthorizedSession<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send,
    ReqBody: Send + 'static,
    ResBody: Default + Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let span = tracing::info_span!("call");
        let protected_paths = self.protected_paths;
        let auth_paths = self.auth_paths;
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(
            async move {
                let path = req.uri().path().to_string();
                let is_protected = protected_paths.iter().any(|p| path.starts_with(p));
                let is_auth_page = auth_paths.iter().any(|p| path.starts_with(p));

                if is_protected || is_auth_page {
                    let Some(session) = req
                        .extensions()
                        .get::<Session>()
                        .cloned()
                        .map(TypedSession::new)
                    else {
                        return Ok(Self::internal_server_error(anyhow!("Session not found")));
                    };

                    match session.get_user_id().await {
                        Ok(Some(user_id)) if is_auth_page => {
                            tracing::info!("User id `{user_id}` found in session");
                            return Ok(Self::to_dashboard());
                        }
                        Ok(Some(user_id)) => {
                            tracing::info!("User id `{user_id}` found in session");
                            req.extensions_mut().insert(user_id);
                        }
                        Ok(None) if is_protected => return Ok(Self::to_login(&path)),
                        Ok(None) => {}
                        Err(e) => return Ok(Self::internal_server_error(e)),
                    };
                }

                inner.call(req).await
            }
            .instrument(span),
        )
    }
}
