use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use jokes_service::domain::user::errors::UserError;
use jokes_service::domain::user::models::User;
use jokes_service::domain::user::models::UserId;
use jokes_service::domain::user::models::Username;
use jokes_service::domain::user::ports::UserRepository;
use jokes_service::domain::user::service::UserService;
use jokes_service::inbound::http::router::create_router;
use serde_json::json;

/// Token signing secret shared by the spawned app and the tests, so tests
/// can mint expired or foreign tokens on demand.
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

pub const TEST_JWT_EXPIRATION_HOURS: i64 = 24;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // The credential store runs in memory; the unique constraint the
        // relational schema declares is emulated in its create().
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(UserService::new(user_repository));
        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let router = create_router(user_service, authenticator, TEST_JWT_EXPIRATION_HOURS);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request presenting a raw token header
    pub fn get_with_token(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header("Authorization", token)
    }

    /// Register a user through the API; panics on non-201
    pub async fn register_user(&self, username: &str, password: &str) {
        let response = self
            .post("/api/auth/register")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(
            response.status(),
            reqwest::StatusCode::CREATED,
            "Fixture registration failed"
        );
    }

    /// Log a user in through the API and return the issued token
    pub async fn login_for_token(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }
}

/// In-memory credential store for the test harness.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username.as_str() == user.username.as_str())
        {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.clone())
    }
}
