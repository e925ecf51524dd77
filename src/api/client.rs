//! HTTP client for the CodeLingo lessons API.
//!
//! One method per remote capability. Every call is a single attempt and
//! returns either the decoded payload or a typed [`ApiError`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Catalog, LanguagePair, Lesson, LessonDirection};
use crate::traits::{Headers, HttpClient, Response};

/// Default URL for the lessons API
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Request timeout used by [`LessonApiClient::new`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegistrationRequest<'a> {
    name: &'a str,
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LanguagePairRequest<'a> {
    known_language: &'a str,
    target_language: &'a str,
}

/// Body of `/login` and `/registration`.
///
/// The server reports rejected credentials either with a 4xx or with a
/// 200 carrying `error` instead of `jwt`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    jwt: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CheckSolutionResponse {
    result: bool,
}

/// How a non-2xx status should be classified for a given endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Endpoint {
    /// `/login`, `/registration`: any rejection is an auth failure
    Credentials,
    /// Bearer-authenticated read or check
    Authenticated,
    /// `/register-languages`: 400/422 are validation failures
    LanguageSelection,
    /// Unauthenticated read
    Public,
}

/// Extract the server's error text from a FastAPI-style body.
///
/// Handles `{"detail": "..."}`, `{"detail": [{"msg": "..."}]}` and
/// `{"error": "..."}`.
fn error_detail(response: &Response) -> Option<String> {
    let value: serde_json::Value = response.json().ok()?;
    let text = match value.get("detail") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Array(items)) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(|msg| msg.as_str())
            .map(str::to_string),
        _ => None,
    };
    text.or_else(|| {
        value
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string)
    })
    .filter(|s| !s.is_empty())
}

fn classify_failure(response: &Response, endpoint: Endpoint, fallback: &str) -> ApiError {
    let detail = error_detail(response);
    match (endpoint, response.status) {
        (Endpoint::Credentials, _) => ApiError::auth(detail.unwrap_or_else(|| fallback.to_string())),
        (_, 401) | (_, 403) => ApiError::auth(detail.unwrap_or_default()),
        (Endpoint::LanguageSelection, 400) | (Endpoint::LanguageSelection, 422) => {
            ApiError::validation(detail.unwrap_or_else(|| fallback.to_string()))
        }
        (_, status) => ApiError::Server {
            status,
            message: detail.unwrap_or_else(|| fallback.to_string()),
        },
    }
}

/// Client for the lessons API.
///
/// Cheap to clone; spawned tasks each take their own copy.
#[derive(Clone)]
pub struct LessonApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for LessonApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LessonApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LessonApiClient {
    /// Create a client for `base_url` backed by reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = ReqwestHttpClient::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::with_http(base_url, Arc::new(http))
    }

    /// Create a client with an injected HTTP implementation.
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    fn bearer_headers(token: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        headers
    }

    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        headers: Headers,
    ) -> ApiResult<Response> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::InvalidResponse {
            message: e.to_string(),
        })?;
        let response = self.http.post(&self.url(path), &body, &headers).await?;
        Ok(response)
    }

    fn decode_token(response: Response, fallback: &str) -> ApiResult<String> {
        if !response.is_success() {
            return Err(classify_failure(&response, Endpoint::Credentials, fallback));
        }
        let token: TokenResponse = response.json()?;
        match token.jwt.filter(|jwt| !jwt.is_empty()) {
            Some(jwt) => Ok(jwt),
            None => Err(ApiError::auth(
                token
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }

    /// Exchange credentials for a bearer token.
    ///
    /// POST /login
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        tracing::debug!("POST /login for user {}", username);
        let response = self
            .post_json(
                "/login",
                &LoginRequest { username, password },
                Self::json_headers(),
            )
            .await?;
        Self::decode_token(response, "Login failed")
    }

    /// Create an account and return its bearer token. The new account has
    /// no language pair yet.
    ///
    /// POST /registration
    pub async fn register(&self, name: &str, username: &str, password: &str) -> ApiResult<String> {
        tracing::debug!("POST /registration for user {}", username);
        let response = self
            .post_json(
                "/registration",
                &RegistrationRequest {
                    name,
                    username,
                    password,
                },
                Self::json_headers(),
            )
            .await?;
        Self::decode_token(response, "Registration failed")
    }

    /// Fetch the catalog of available languages. An empty list is valid.
    ///
    /// GET /get-languages
    pub async fn list_languages(&self) -> ApiResult<Catalog> {
        let response = self.http.get(&self.url("/get-languages"), &Headers::new()).await?;
        if !response.is_success() {
            return Err(classify_failure(
                &response,
                Endpoint::Public,
                "Could not load languages",
            ));
        }
        Ok(response.json()?)
    }

    /// Record the learner's language pair on the server.
    ///
    /// POST /register-languages
    pub async fn set_language_pair(&self, token: &str, pair: &LanguagePair) -> ApiResult<()> {
        if pair.known.trim().is_empty() {
            return Err(ApiError::validation("Choose the language you already know"));
        }
        if pair.target.trim().is_empty() {
            return Err(ApiError::validation("Choose the language you want to learn"));
        }

        let mut headers = Self::json_headers();
        headers.extend(Self::bearer_headers(token));
        let response = self
            .post_json(
                "/register-languages",
                &LanguagePairRequest {
                    known_language: &pair.known,
                    target_language: &pair.target,
                },
                headers,
            )
            .await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(classify_failure(
                &response,
                Endpoint::LanguageSelection,
                "Could not save the languages",
            ))
        }
    }

    /// Fetch one of the two lesson collections, in server order. The server
    /// infers the language from the token.
    ///
    /// GET /get-lessons-target or GET /get-lessons-known
    pub async fn list_lessons(
        &self,
        token: &str,
        direction: LessonDirection,
    ) -> ApiResult<Vec<Lesson>> {
        let response = self
            .http
            .get(&self.url(direction.path()), &Self::bearer_headers(token))
            .await?;
        if !response.is_success() {
            let fallback = match direction {
                LessonDirection::Target => "Could not load lessons",
                LessonDirection::Known => "Could not load lessons for the known language",
            };
            return Err(classify_failure(&response, Endpoint::Authenticated, fallback));
        }
        let lessons: Vec<Lesson> = response.json()?;
        tracing::debug!("Fetched {} {} lessons", lessons.len(), direction);
        Ok(lessons)
    }

    /// Submit an exercise answer. A wrong answer is `Ok(false)`.
    ///
    /// GET /check-solution?code=..&topic=..&language=..
    pub async fn check_solution(
        &self,
        token: &str,
        code: &str,
        topic: &str,
        language: &str,
    ) -> ApiResult<bool> {
        let url = format!(
            "{}?code={}&topic={}&language={}",
            self.url("/check-solution"),
            urlencoding::encode(code),
            urlencoding::encode(topic),
            urlencoding::encode(language)
        );
        let response = self.http.get(&url, &Self::bearer_headers(token)).await?;
        if !response.is_success() {
            return Err(classify_failure(
                &response,
                Endpoint::Authenticated,
                "Could not check the solution",
            ));
        }
        let check: CheckSolutionResponse = response.json()?;
        Ok(check.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn client(http: &MockHttpClient) -> LessonApiClient {
        LessonApiClient::with_http(BASE, Arc::new(http.clone()))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = LessonApiClient::with_http("http://api.test/", Arc::new(MockHttpClient::new()));
        assert_eq!(api.base_url(), "http://api.test");
    }

    #[tokio::test]
    async fn test_login_success() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/login"),
            MockResponse::json(200, json!({"jwt": "token-1"})),
        );

        let token = client(&http).login("ann", "secret").await.unwrap();
        assert_eq!(token, "token-1");

        let request = &http.get_requests()[0];
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"username": "ann", "password": "secret"}));
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_login_error_in_ok_body_is_auth_error() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/login"),
            MockResponse::json(200, json!({"error": "The username or password is incorrect"})),
        );

        let err = client(&http).login("ann", "bad").await.unwrap_err();
        assert_eq!(err, ApiError::auth("The username or password is incorrect"));
    }

    #[tokio::test]
    async fn test_login_4xx_uses_detail() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/login"),
            MockResponse::json(400, json!({"detail": "Bad credentials"})),
        );

        let err = client(&http).login("ann", "bad").await.unwrap_err();
        assert_eq!(err, ApiError::auth("Bad credentials"));
    }

    #[tokio::test]
    async fn test_login_4xx_without_detail_uses_fallback() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/login"), MockResponse::status(400));

        let err = client(&http).login("ann", "bad").await.unwrap_err();
        assert_eq!(err, ApiError::auth("Login failed"));
    }

    #[tokio::test]
    async fn test_login_transport_failure_is_network_error() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/login"), MockResponse::connection_refused());

        let err = client(&http).login("ann", "secret").await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_register_taken_username() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/registration"),
            MockResponse::json(200, json!({"error": "This username is alredy taken"})),
        );

        let err = client(&http).register("Ann", "ann", "pw").await.unwrap_err();
        assert!(err.is_auth());
        assert!(err.user_message().contains("taken"));
    }

    #[tokio::test]
    async fn test_list_languages_empty_is_ok() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/get-languages"),
            MockResponse::json(200, json!([])),
        );

        let catalog = client(&http).list_languages().await.unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_set_language_pair_rejects_empty_without_request() {
        let http = MockHttpClient::new();
        let err = client(&http)
            .set_language_pair("abc", &LanguagePair::new("Python", " "))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_set_language_pair_sends_bearer_and_body() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/register-languages"),
            MockResponse::json(200, json!({"status": "ok"})),
        );

        client(&http)
            .set_language_pair("abc", &LanguagePair::new("Python", "Rust"))
            .await
            .unwrap();

        let request = &http.get_requests()[0];
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer abc")
        );
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"known_language": "Python", "target_language": "Rust"})
        );
    }

    #[tokio::test]
    async fn test_set_language_pair_422_is_validation() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/register-languages"),
            MockResponse::json(
                422,
                json!({"detail": [{"loc": ["body"], "msg": "Unsupported language", "type": "value_error"}]}),
            ),
        );

        let err = client(&http)
            .set_language_pair("abc", &LanguagePair::new("Python", "Klingon"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::validation("Unsupported language"));
    }

    #[tokio::test]
    async fn test_list_lessons_401_is_auth_error() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/get-lessons-target"),
            MockResponse::json(401, json!({"detail": "Invalid or expired token"})),
        );

        let err = client(&http)
            .list_lessons("stale", LessonDirection::Target)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::auth("Invalid or expired token"));
    }

    #[tokio::test]
    async fn test_list_lessons_preserves_order() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/get-lessons-known"),
            MockResponse::json(
                200,
                json!([
                    {"topic": "variables", "explanation": "", "example": "", "exercise": ""},
                    {"topic": "loops", "explanation": "", "example": "", "exercise": ""}
                ]),
            ),
        );

        let lessons = client(&http)
            .list_lessons("abc", LessonDirection::Known)
            .await
            .unwrap();
        let topics: Vec<_> = lessons.iter().map(|l| l.topic.as_str()).collect();
        assert_eq!(topics, vec!["variables", "loops"]);
    }

    #[tokio::test]
    async fn test_list_lessons_garbage_body_is_invalid_response() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/get-lessons-target"),
            MockResponse::json(200, json!({"unexpected": true})),
        );

        let err = client(&http)
            .list_lessons("abc", LessonDirection::Target)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_check_solution_encodes_query() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/check-solution"),
            MockResponse::json(200, json!({"result": false})),
        );

        let correct = client(&http)
            .check_solution("abc", "for i in 0..3 {}", "loops & ranges", "Rust")
            .await
            .unwrap();
        assert!(!correct);

        let url = &http.get_requests()[0].url;
        assert!(url.contains("code=for%20i%20in%200..3%20%7B%7D"));
        assert!(url.contains("topic=loops%20%26%20ranges"));
        assert!(url.ends_with("language=Rust"));
    }

    #[tokio::test]
    async fn test_check_solution_500_is_server_error() {
        let http = MockHttpClient::new();
        http.set_response(&format!("{BASE}/check-solution"), MockResponse::status(500));

        let err = client(&http)
            .check_solution("abc", "x", "loops", "Rust")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }
}
