use std::net::TcpListener;
use std::sync::Once;

use actix_web::{App, HttpResponse, HttpServer, web};
use payloads::requests::LoginCredentials;
use payloads::responses::LoginResponse;
use payloads::{Post, PostId, User, UserId};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

pub const ALICE_ID: &str = "42";
pub const ALICE_PASSWORD: &str = "supersecret";
pub const ACCESS_TOKEN: &str = "test-access-token";

/// A fixture backend listening on an OS-assigned port.
pub struct FixtureServer {
    pub port: u16,
    pub address: String,
}

impl FixtureServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }
}

pub fn alice() -> User {
    User {
        id: UserId(ALICE_ID.to_string()),
        username: "alice".to_string(),
        created_at: "2024-01-05T10:00:00Z".parse().unwrap(),
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId("p1".to_string()),
            image_count: 0,
            text_content: "first post!".to_string(),
            user: alice(),
            created_at: "2024-01-06T09:00:00Z".parse().unwrap(),
        },
        Post {
            id: PostId("p2".to_string()),
            image_count: 2,
            text_content: "look at these".to_string(),
            user: alice(),
            created_at: "2024-01-07T18:30:00Z".parse().unwrap(),
        },
    ]
}

/// Install a stderr subscriber once per test binary. `RUST_LOG` overrides
/// the default `error` filter.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("error"));
        let stderr = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_test_writer();
        let _ = LogTracer::init();
        let _ = Registry::default().with(env_filter).with(stderr).try_init();
    });
}

/// Start the fixture backend. Must be called from within a tokio runtime.
pub async fn spawn_fixture_server() -> FixtureServer {
    init_test_logging();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = HttpServer::new(|| App::new().configure(routes))
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
    tokio::spawn(server);

    FixtureServer {
        port,
        address: format!("http://127.0.0.1:{port}"),
    }
}

/// A URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/posts")
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/posts", web::get().to(list_posts))
            .route("/users/{id}", web::get().to(get_user))
            .route("/login", web::post().to(login))
            .route("/echo", web::post().to(echo))
            .route("/empty", web::get().to(empty))
            .route("/chunked", web::get().to(chunked))
            .route("/broken", web::get().to(broken))
            .route("/text", web::get().to(text))
            .route("/charset", web::get().to(charset))
            .route("/explode", web::get().to(explode)),
    );
}

async fn list_posts() -> HttpResponse {
    HttpResponse::Ok().json(sample_posts())
}

async fn get_user(path: web::Path<String>) -> HttpResponse {
    if path.into_inner() == ALICE_ID {
        HttpResponse::Ok().json(alice())
    } else {
        HttpResponse::NotFound()
            .json(serde_json::json!({ "error": "no such user" }))
    }
}

async fn login(credentials: web::Json<LoginCredentials>) -> HttpResponse {
    if credentials.username == "alice" && credentials.password == ALICE_PASSWORD
    {
        HttpResponse::Ok().json(LoginResponse {
            user: alice(),
            access_token: ACCESS_TOKEN.to_string(),
        })
    } else {
        HttpResponse::Unauthorized().finish()
    }
}

async fn echo(body: web::Json<serde_json::Value>) -> HttpResponse {
    HttpResponse::Ok().json(body.into_inner())
}

async fn empty() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// JSON without a `Content-Length` header.
async fn chunked() -> HttpResponse {
    let body = serde_json::to_vec(&alice()).unwrap_or_default();
    let stream = futures::stream::once(async move {
        Ok::<_, std::io::Error>(web::Bytes::from(body))
    });
    HttpResponse::Ok()
        .content_type("application/json")
        .streaming(stream)
}

async fn broken() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("{\"id\": ")
}

async fn text() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("hello")
}

async fn charset() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json; charset=utf-8")
        .body(serde_json::to_vec(&alice()).unwrap_or_default())
}

async fn explode() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(serde_json::json!({ "error": "boom" }))
}
