use actix_web::{http::StatusCode, put, web, Responder};

use crate::auth::adapter::incoming::web::extractors::MaybeOwner;
use crate::shared::action::{ActionResult, FormFields};
use crate::shared::api::{action_response, form_fields, FormPayload};
use crate::AppState;

/// Replace an experience entry
///
/// Owner only. Every field is rewritten; there is no partial update.
#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id (UUID)")),
    request_body = FormFields,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Updated", body = ActionResult),
        (status = 400, description = "Field errors or malformed id", body = ActionResult),
        (status = 401, description = "No owner session", body = ActionResult),
        (status = 404, description = "No such experience", body = ActionResult),
        (status = 500, description = "Storage failure", body = ActionResult),
    )
)]
#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    owner: MaybeOwner,
    path: web::Path<String>,
    payload: FormPayload,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = match form_fields(owner.session(), payload) {
        Ok(form) => data
            .experience
            .update
            .update(owner.session(), &path.into_inner(), &form)
            .await,
        Err(rejected) => Err(rejected),
    };
    action_response(outcome, StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::OwnerSession;
    use crate::experience::application::experience_use_cases::ExperienceUseCases;
    use crate::experience::application::ports::incoming::use_cases::CreateExperienceUseCase;
    use crate::experience::application::service::ExperienceService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryExperienceRepository;
    use crate::tests::support::stubs::{owner_auth_header, test_token_provider};

    async fn seeded() -> (InMemoryExperienceRepository, Uuid) {
        let repo = InMemoryExperienceRepository::default();
        ExperienceService::new(repo.clone())
            .create(
                Some(&OwnerSession::new(Uuid::new_v4())),
                &FormFields::from([
                    ("company", "Acme"),
                    ("title", "Engineer"),
                    ("description", "Built things"),
                    ("startDate", "2020-01"),
                    ("endDate", "2022-06"),
                ]),
            )
            .await
            .unwrap();
        let id = repo.snapshot()[0].id;
        (repo, id)
    }

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
                .service(update_experience_handler),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn globex() -> Value {
        json!({
            "company": "Globex",
            "title": "Lead",
            "description": "Led things",
            "startDate": "2020-01",
            "endDate": "2024-02"
        })
    }

    #[actix_web::test]
    async fn test_update_experience_success() {
        let (repo, id) = seeded().await;

        let (status, body) = send(
            &repo,
            test::TestRequest::put()
                .uri(&format!("/api/experiences/{id}"))
                .insert_header(owner_auth_header())
                .set_json(globex()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Experience updated successfully");
        let stored = &repo.snapshot()[0];
        assert_eq!(stored.company, "Globex");
        assert_eq!(stored.title, "Lead");
    }

    #[actix_web::test]
    async fn test_update_experience_unknown_id() {
        let (repo, _) = seeded().await;

        let (status, body) = send(
            &repo,
            test::TestRequest::put()
                .uri(&format!("/api/experiences/{}", Uuid::new_v4()))
                .insert_header(owner_auth_header())
                .set_json(globex()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errors"]["form"], json!(["Experience not found"]));
    }

    #[actix_web::test]
    async fn test_update_experience_malformed_id() {
        let (repo, _) = seeded().await;

        let (status, body) = send(
            &repo,
            test::TestRequest::put()
                .uri("/api/experiences/42")
                .insert_header(owner_auth_header())
                .set_json(globex()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["form"], json!(["A valid ID is required"]));
    }

    #[actix_web::test]
    async fn test_update_experience_without_session_leaves_row() {
        let (repo, id) = seeded().await;

        let (status, _) = send(
            &repo,
            test::TestRequest::put()
                .uri(&format!("/api/experiences/{id}"))
                .set_json(globex()),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(repo.snapshot()[0].company, "Acme");
    }
}
