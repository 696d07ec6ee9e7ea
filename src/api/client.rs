//! HTTP Client
//!
//! One request path for every endpoint: token header, timeout via
//! `AbortController`, and status handling (401 logs the user out).

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::{AbortController, FormData};

use super::endpoints::auth_header;
use crate::config::config;
use crate::error::{extract_server_message, ApiError, ApiResult};
use crate::session::{self, BrowserStorage, Session};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

enum Body {
    Empty,
    Json(Value),
    Form(FormData),
}

/// A single pending API call
pub(crate) struct Call<'a> {
    verb: Verb,
    path: String,
    query: Vec<(&'a str, &'a str)>,
    body: Body,
    authenticated: bool,
}

impl<'a> Call<'a> {
    fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            query: Vec::new(),
            body: Body::Empty,
            authenticated: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Verb::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Verb::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Verb::Delete, path)
    }

    pub fn query(mut self, key: &'a str, value: &'a str) -> Self {
        self.query.push((key, value));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Body::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Multipart body; the browser fills in the boundary header.
    pub fn form(mut self, form: FormData) -> Self {
        self.body = Body::Form(form);
        self
    }

    /// Do not attach the stored token (login / register).
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub async fn send_json<T: DeserializeOwned>(self) -> ApiResult<T> {
        let response = self.send().await?;
        response.json::<T>().await.map_err(ApiError::from)
    }

    /// Send and ignore the response body (`{"success": ...}` acks).
    pub async fn send_unit(self) -> ApiResult<()> {
        self.send().await.map(|_| ())
    }

    async fn send(self) -> ApiResult<Response> {
        let settings = config();
        let url = settings.endpoint(&self.path);
        log::debug!("{:?} {}", self.verb, url);

        let mut builder = builder_for(self.verb, &url).header("Accept", "application/json");
        if !self.query.is_empty() {
            builder = builder.query(self.query.iter().copied());
        }

        let token = if self.authenticated { session::stored_token() } else { None };
        if let Some(token) = &token {
            builder = builder.header("Authorization", &auth_header(token));
        }

        let controller = AbortController::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        builder = builder.abort_signal(Some(&controller.signal()));

        let request = match self.body {
            Body::Empty => builder.build()?,
            Body::Json(value) => builder.json(&value)?,
            Body::Form(form) => builder.body(form)?,
        };

        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let timed_out = timed_out.clone();
            Timeout::new(settings.request_timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let result = request.send().await;
        drop(timer);

        let response = match result {
            Ok(response) => response,
            Err(_) if timed_out.get() => {
                log::warn!("{:?} {} timed out after {}ms", self.verb, url, settings.request_timeout_ms);
                return Err(ApiError::Timeout);
            }
            Err(e) => {
                log::error!("{:?} {} failed: {}", self.verb, url, e);
                return Err(e.into());
            }
        };

        check_status(response, token.is_some()).await
    }
}

fn builder_for(verb: Verb, url: &str) -> RequestBuilder {
    match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    }
}

async fn check_status(response: Response, sent_token: bool) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status == 401 {
        log::warn!("{} returned 401", response.url());
        if sent_token {
            expire_session();
        }
        return Err(ApiError::Unauthorized);
    }

    let message = extract_server_message(&body).unwrap_or_default();
    log::warn!("{} returned {}: {}", response.url(), status, message);
    Err(ApiError::Server { status, message })
}

/// Drop the stored session and hard-redirect to the login page.
fn expire_session() {
    Session::clear(&BrowserStorage);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
