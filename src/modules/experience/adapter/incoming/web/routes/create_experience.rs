use actix_web::{http::StatusCode, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::{ActionResult, FormFields};
use crate::shared::api::{action_response, form_fields, FormPayload};
use crate::AppState;

/// Create an experience entry
///
/// Owner only. Accepts JSON or urlencoded form fields.
#[utoipa::path(
    post,
    path = "/api/experiences",
    tag = "experience",
    request_body = FormFields,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Created", body = ActionResult),
        (status = 400, description = "Field errors", body = ActionResult),
        (status = 401, description = "No owner session", body = ActionResult),
        (status = 500, description = "Storage failure", body = ActionResult),
    )
)]
#[post("/api/experiences")]
pub async fn create_experience_handler(
    owner: MaybeOwner,
    payload: FormPayload,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = match form_fields(owner.session(), payload) {
        Ok(form) => data.experience.create.create(owner.session(), &form).await,
        Err(rejected) => Err(rejected),
    };
    action_response(outcome, StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::experience::application::experience_use_cases::ExperienceUseCases;
    use crate::experience::application::service::ExperienceService;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryExperienceRepository;
    use crate::tests::support::stubs::{owner_auth_header, test_token_provider};

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    async fn send(
        repo: &InMemoryExperienceRepository,
        req: test::TestRequest,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_experience(ExperienceUseCases::from_service(ExperienceService::new(
                repo.clone(),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(custom_json_config())
                .service(create_experience_handler),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn acme() -> Value {
        json!({
            "company": "Acme",
            "title": "Engineer",
            "description": "Built things",
            "startDate": "2020-01",
            "endDate": "2022-06"
        })
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_experience_success() {
        let repo = InMemoryExperienceRepository::default();

        let (status, body) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .insert_header(owner_auth_header())
                .set_json(acme()),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Experience created successfully");
        assert_eq!(body["errors"], json!({}));
        assert_eq!(repo.snapshot()[0].company, "Acme");
    }

    #[actix_web::test]
    async fn test_create_experience_accepts_urlencoded_form() {
        let repo = InMemoryExperienceRepository::default();

        let (status, _) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .insert_header(owner_auth_header())
                .set_form([
                    ("company", "Acme"),
                    ("title", "Engineer"),
                    ("description", "Built things"),
                    ("startDate", "2020-01"),
                    ("endDate", "2022-06"),
                ]),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_experience_without_session() {
        let repo = InMemoryExperienceRepository::default();

        let (status, body) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .set_json(acme()),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], Value::Null);
        assert_eq!(body["errors"]["form"], json!(["Unauthorized"]));
        assert!(repo.snapshot().is_empty());
    }

    #[actix_web::test]
    async fn test_create_experience_with_bad_token_is_unauthorized() {
        let repo = InMemoryExperienceRepository::default();

        let (status, _) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .insert_header(("Authorization", "Bearer not-a-token"))
                .set_json(acme()),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(repo.snapshot().is_empty());
    }

    #[actix_web::test]
    async fn test_create_experience_missing_end_date() {
        let repo = InMemoryExperienceRepository::default();
        let mut form = acme();
        form["endDate"] = json!("");

        let (status, body) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .insert_header(owner_auth_header())
                .set_json(form),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["endDate"], json!(["End date is required"]));
        assert!(repo.snapshot().is_empty());
    }

    #[actix_web::test]
    async fn test_create_experience_malformed_json() {
        let repo = InMemoryExperienceRepository::default();

        let (status, body) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .insert_header(owner_auth_header())
                .insert_header(("Content-Type", "application/json"))
                .set_payload("{not json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["form"].is_array());
    }

    #[actix_web::test]
    async fn test_create_experience_malformed_body_without_session() {
        let repo = InMemoryExperienceRepository::default();

        let (status, body) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .set_json(json!({ "company": 5 })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errors"]["form"], json!(["Unauthorized"]));
        assert!(repo.snapshot().is_empty());
    }

    #[actix_web::test]
    async fn test_create_experience_wrong_content_type_without_session() {
        let repo = InMemoryExperienceRepository::default();

        let (status, body) = send(
            &repo,
            test::TestRequest::post()
                .uri("/api/experiences")
                .insert_header(("Content-Type", "text/plain"))
                .set_payload("company=Acme"),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errors"]["form"], json!(["Unauthorized"]));
    }
}
