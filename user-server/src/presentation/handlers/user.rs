use crate::application::user_service::UserService;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreateUserRequest, UserResponse};
use crate::presentation::middleware::RequestId;
use crate::presentation::validation::validate_create_user;
use actix_web::{HttpResponse, web};
use tracing::info;

pub async fn create_user<R: UserRepository + 'static>(
    request_id: Option<web::ReqData<RequestId>>,
    users: web::Data<UserService<R>>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let new_user = validate_create_user(payload.into_inner())?;
    let user = users.create_user(new_user).await?;

    info!(
        request_id = request_id.as_deref().map_or("unknown", |rid| rid.0.as_str()),
        user_id = %user.id,
        "user registered"
    );

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use crate::application::user_service::UserService;
    use crate::data::in_memory_user_repository::InMemoryUserRepository;
    use crate::data::test_support::{ReadOnlyRepository, UnreachableRepository};
    use crate::data::user_repository::UserRepository;
    use crate::server::routes;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn post_user<R: UserRepository + 'static>(
        repo: Arc<R>,
        bodies: &[Value],
    ) -> Vec<(StatusCode, Value)> {
        let app =
            actix_test::init_service(App::new().configure(routes(UserService::new(repo)))).await;

        let mut responses = Vec::new();
        for body in bodies {
            let request = actix_test::TestRequest::post()
                .uri("/users")
                .set_json(body)
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            let status = response.status();
            let body = actix_test::read_body(response).await;
            responses.push((status, serde_json::from_slice(&body).expect("json body")));
        }
        responses
    }

    #[actix_web::test]
    async fn creates_user_and_rejects_duplicate_email() {
        let responses = post_user(
            Arc::new(InMemoryUserRepository::new()),
            &[
                json!({ "name": "Alice", "email": "alice@example.com" }),
                json!({ "name": "Alice2", "email": "alice@example.com" }),
            ],
        )
        .await;

        let (status, created) = &responses[0];
        assert_eq!(*status, StatusCode::CREATED);
        assert_eq!(created["name"], "Alice");
        assert_eq!(created["email"], "alice@example.com");
        assert!(created["id"].as_str().is_some());
        assert!(created["createdAt"].as_str().is_some_and(|t| t.ends_with('Z')));

        let (status, conflict) = &responses[1];
        assert_eq!(*status, StatusCode::CONFLICT);
        assert_eq!(conflict["details"]["email"], "alice@example.com");
    }

    #[actix_web::test]
    async fn rejects_invalid_email_before_the_workflow() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let responses = post_user(
            Arc::clone(&repo),
            &[json!({ "name": "Alice", "email": "not-an-email" })],
        )
        .await;

        let (status, body) = &responses[0];
        assert_eq!(*status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "email");
        assert_eq!(body["details"]["code"], "invalid_format");
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn malformed_body_is_a_bad_request() {
        let responses = post_user(
            Arc::new(InMemoryUserRepository::new()),
            &[json!({ "name": "Alice" })],
        )
        .await;

        let (status, body) = &responses[0];
        assert_eq!(*status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "body");
        assert_eq!(body["details"]["code"], "invalid_json");
    }

    #[actix_web::test]
    async fn unreachable_storage_is_a_service_unavailable() {
        let repo = Arc::new(UnreachableRepository::default());

        let responses = post_user(
            Arc::clone(&repo),
            &[json!({ "name": "Alice", "email": "alice@example.com" })],
        )
        .await;

        let (status, body) = &responses[0];
        assert_eq!(*status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "storage unavailable: connection refused");
        assert_eq!(repo.email_lookups(), 1);
    }

    #[actix_web::test]
    async fn failed_save_is_a_service_unavailable() {
        let repo = Arc::new(ReadOnlyRepository::default());

        let responses = post_user(
            Arc::clone(&repo),
            &[json!({ "name": "Alice", "email": "alice@example.com" })],
        )
        .await;

        assert_eq!(responses[0].0, StatusCode::SERVICE_UNAVAILABLE);
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
