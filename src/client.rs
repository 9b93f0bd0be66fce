//! HTTP client for the hub backend API.
//!
//! Every request goes through one response helper that fails on any non-2xx
//! status, carrying the status code and the backend's error text. There is no
//! retry anywhere; a failed call surfaces as an error to the command layer.

use reqwest::Method;
use serde::de::DeserializeOwned;

use clubhub_core::directory::MemberSource;
use clubhub_core::error::{HubError, HubResult};
use clubhub_core::event::Event;
use clubhub_core::member::Member;
use clubhub_core::protocol::{AnswerRequest, DeleteAck, MemberProps};

/// Client for the hub REST API (mounted at /api/1 on the backend).
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

/// Error body the backend renders for failed requests.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: String,
}

fn transport(err: reqwest::Error) -> HubError {
    HubError::Transport(err.to_string())
}

impl ApiClient {
    pub fn new(base_url: &str, session_cookie: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie,
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}/api/1{}", self.base_url, path));
        if let Some(cookie) = &self.session_cookie {
            request = request.header(reqwest::header::COOKIE, cookie.clone());
        }
        request
    }

    async fn expect_json<T: DeserializeOwned>(response: reqwest::Response) -> HubResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(HubError::Api {
                status: status.as_u16(),
                message,
            });
        }
        response.json().await.map_err(transport)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> HubResult<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_json(response).await
    }

    /// GET /api/1/events
    pub async fn list_events(&self) -> HubResult<Vec<Event>> {
        self.get_json("/events").await
    }

    /// GET /api/1/events/{id}
    pub async fn get_event(&self, id: &str) -> HubResult<Event> {
        self.get_json(&format!("/events/{id}")).await
    }

    /// POST /api/1/events/{id}/delete
    pub async fn delete_event(&self, id: &str) -> HubResult<DeleteAck> {
        let response = self
            .request(Method::POST, &format!("/events/{id}/delete"))
            .send()
            .await
            .map_err(transport)?;
        Self::expect_json(response).await
    }

    /// POST /api/1/events/answer
    ///
    /// The returned event is authoritative and fully supersedes any local
    /// copy; callers must render from it, never merge into what they had.
    pub async fn answer(&self, request: &AnswerRequest) -> HubResult<Event> {
        let response = self
            .request(Method::POST, "/events/answer")
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_json(response).await
    }

    /// GET /api/1/myself
    pub async fn myself(&self) -> HubResult<Member> {
        self.get_json("/myself").await
    }

    /// GET /api/1/members/{id}
    pub async fn get_member(&self, id: &str) -> HubResult<Member> {
        self.get_json(&format!("/members/{id}")).await
    }

    /// GET /api/1/members?cached=1
    ///
    /// `cached` is a hint only; the server returns the full list regardless.
    pub async fn list_members(&self, cached: bool) -> HubResult<Vec<Member>> {
        let path = if cached { "/members?cached=1" } else { "/members" };
        self.get_json(path).await
    }

    /// POST /api/1/members/{id}/props
    pub async fn update_member(&self, id: &str, props: &MemberProps) -> HubResult<Member> {
        let response = self
            .request(Method::POST, &format!("/members/{id}/props"))
            .json(props)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_json(response).await
    }
}

impl MemberSource for &ApiClient {
    async fn fetch_member(&self, id: &str) -> HubResult<Member> {
        self.get_member(id).await
    }

    async fn fetch_members(&self, cached: bool) -> HubResult<Vec<Member>> {
        self.list_members(cached).await
    }
}
