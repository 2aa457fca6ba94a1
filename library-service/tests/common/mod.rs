use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::SecretsConfig;
use auth::TokenCodec;
use library_service::domain::authentication::service::RequestAuthenticator;
use library_service::domain::book::errors::BookError;
use library_service::domain::book::models::Book;
use library_service::domain::book::models::BookId;
use library_service::domain::book::ports::BookRepository;
use library_service::domain::book::service::BookService;
use library_service::domain::user::errors::UserError;
use library_service::domain::user::models::Login;
use library_service::domain::user::models::User;
use library_service::domain::user::models::UserId;
use library_service::domain::user::ports::UserRepository;
use library_service::domain::user::service::UserService;
use library_service::inbound::http::router::create_router;

const TEST_SIGNING_KEY: &str = "test-secret-key-for-jwt-signing";
const TEST_HASHING_SALT: &str = "test-salt-for-password-hashing";

/// Test application that spawns a real server backed by in-memory repositories
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
    pub token_codec: TokenCodec,
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

        let secrets = SecretsConfig::new(TEST_SIGNING_KEY, TEST_HASHING_SALT)
            .expect("Failed to build test secrets");
        let authenticator = Arc::new(Authenticator::new(&secrets));

        let users = Arc::new(InMemoryUserRepository::default());
        let books = Arc::new(InMemoryBookRepository::default());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));
        let book_service = Arc::new(BookService::new(books));
        let request_authenticator = Arc::new(RequestAuthenticator::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));

        let router = create_router(user_service, book_service, request_authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let token_codec = TokenCodec::new(secrets.signing_key());

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            users,
            token_codec,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Sign up a user and return the issued access token
    pub async fn sign_up(&self, login: &str, password: &str) -> String {
        let response = self
            .post("/api/users/signup")
            .json(&serde_json::json!({
                "login": login,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["accessToken"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn find_by_login(&self, login: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.login.as_str() == login)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|existing| existing.login == user.login) {
            return Err(UserError::LoginAlreadyExists(user.login.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_login_password(
        &self,
        login: &Login,
        password_hash: &str,
    ) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| &user.login == login && user.password_hash == password_hash)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Mutex<Vec<Book>>,
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|book| &book.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Book>, BookError> {
        let mut books = self.books.lock().unwrap().clone();
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(books)
    }

    async fn delete(&self, id: &BookId) -> Result<bool, BookError> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|book| &book.id != id);
        Ok(books.len() < before)
    }
}
