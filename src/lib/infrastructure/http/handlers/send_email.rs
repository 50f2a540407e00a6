//! Contact form handler

use axum::{body::Bytes, extract::State, Json};

use crate::{
    domain::contact::{ContactService, Submission},
    infrastructure::http::{
        errors::{ApiError, StatusResponse},
        state::AppState,
    },
};

/// Message returned once the contact message has been handed to the mailer
pub const EMAIL_SENT_MESSAGE: &str = "Email sent successfully!";

/// Validate a contact form submission and dispatch it to the site owner
///
/// The body is read raw so that an empty body or a non-object payload can be
/// treated as an empty form instead of an extractor rejection.
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let submission = Submission::parse(&body)?;

    state.contact.submit(&submission).await?;

    Ok(Json(StatusResponse::ok(EMAIL_SENT_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::{
            communication::{email_addresses::EmailAddress, mailer::MockMailer},
            contact::{ContactError, ContactServiceImpl, MockContactService},
        },
        infrastructure::http::{
            errors::{StatusResponse, INTERNAL_ERROR_MESSAGE},
            router,
            state::{test_state, AppState},
        },
    };

    const REQUIRED_MESSAGE: &str = "Name, email and message are required";

    fn mailer_state(mailer: MockMailer) -> AppState<ContactServiceImpl<MockMailer>> {
        AppState::new(ContactServiceImpl::new(
            Arc::new(mailer),
            EmailAddress::new("noreply@portfolio.com").expect("valid sender"),
            EmailAddress::new("contact@portfolio.com").expect("valid recipient"),
        ))
    }

    #[tokio::test]
    async fn test_send_email_success() -> TestResult {
        let mut contact = MockContactService::new();

        contact
            .expect_submit()
            .times(1)
            .withf(|submission| {
                submission.name() == "Ana"
                    && submission.email() == "ana@x.com"
                    && submission.message() == "Hello"
            })
            .returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(contact))))?
            .post("/send-email")
            .json(&json!({ "nome": "Ana", "email": "ana@x.com", "mensagem": "Hello" }))
            .await;

        response.assert_status_ok();

        let json = response.json::<StatusResponse>();

        assert!(json.success);
        assert_eq!(json.message, "Email sent successfully!");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_is_mounted_under_api() -> TestResult {
        let mut contact = MockContactService::new();

        contact.expect_submit().times(1).returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(contact))))?
            .post("/api/send-email")
            .json(&json!({ "nome": "Ana", "email": "ana@x.com", "mensagem": "Hello" }))
            .await;

        response.assert_status_ok();

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_missing_required_fields() -> TestResult {
        let payloads = [
            json!({ "email": "ana@x.com", "mensagem": "Hello" }),
            json!({ "nome": "Ana", "mensagem": "Hello" }),
            json!({ "nome": "Ana", "email": "ana@x.com", "mensagem": "" }),
            json!([1, 2, 3]),
        ];

        for payload in payloads {
            let mut contact = MockContactService::new();
            contact.expect_submit().times(0);

            let response = TestServer::new(router(test_state(Some(contact))))?
                .post("/send-email")
                .json(&payload)
                .await;

            let json = response.json::<StatusResponse>();

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            assert!(!json.success);
            assert_eq!(json.message, REQUIRED_MESSAGE);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_missing_name_with_nested_phone() -> TestResult {
        let mut contact = MockContactService::new();
        contact.expect_submit().times(0);

        let response = TestServer::new(router(test_state(Some(contact))))?
            .post("/send-email")
            .json(&json!({ "email": "ana@x.com", "mensagem": "Hi", "telefone": [1] }))
            .await;

        let json = response.json::<StatusResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(!json.success);
        assert_eq!(json.message, REQUIRED_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_empty_body() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .post("/send-email")
            .await;

        let json = response.json::<StatusResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, REQUIRED_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_malformed_json() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .post("/send-email")
            .text("{\"nome\": \"Ana\",")
            .await;

        let json = response.json::<StatusResponse>();

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!json.success);
        assert_eq!(json.message, INTERNAL_ERROR_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_unexpected_payload_shape() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .post("/send-email")
            .json(&json!({ "nome": { "first": "Ana" }, "email": "ana@x.com", "mensagem": "Hi" }))
            .await;

        let json = response.json::<StatusResponse>();

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.message, INTERNAL_ERROR_MESSAGE);
        assert!(!json.message.contains("nome"));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_service_error_is_hidden() -> TestResult {
        let mut contact = MockContactService::new();

        contact
            .expect_submit()
            .returning(|_| Err(ContactError::Internal(anyhow!("smtp relay refused"))));

        let response = TestServer::new(router(test_state(Some(contact))))?
            .post("/send-email")
            .json(&json!({ "nome": "Ana", "email": "ana@x.com", "mensagem": "Hello" }))
            .await;

        let json = response.json::<StatusResponse>();

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.message, INTERNAL_ERROR_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_panic_is_caught() -> TestResult {
        let mut contact = MockContactService::new();

        contact
            .expect_submit()
            .returning(|_| panic!("mailer exploded"));

        let response = TestServer::new(router(test_state(Some(contact))))?
            .post("/send-email")
            .json(&json!({ "nome": "Ana", "email": "ana@x.com", "mensagem": "Hello" }))
            .await;

        let json = response.json::<StatusResponse>();

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.message, INTERNAL_ERROR_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_dispatches_defaulted_fields() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|envelope| {
                envelope.subject == "Contact from Portfolio"
                    && envelope.body.contains("Name: Ana")
                    && envelope.body.contains("Email: ana@x.com")
                    && envelope.body.contains("Phone: Not informed")
                    && envelope.body.contains("Subject: Not informed")
                    && envelope.body.contains("Hello")
            })
            .returning(|_| Ok(()));

        let response = TestServer::new(router(mailer_state(mailer)))?
            .post("/send-email")
            .json(&json!({ "nome": "Ana", "email": "ana@x.com", "mensagem": "Hello" }))
            .await;

        response.assert_status_ok();

        Ok(())
    }

    #[tokio::test]
    async fn test_send_email_dispatches_subject_title() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|envelope| {
                envelope.subject == "Contact from Portfolio: Jobs"
                    && envelope.body.contains("Subject: Jobs")
                    && envelope.body.contains("Phone: 555-0100")
            })
            .returning(|_| Ok(()));

        let response = TestServer::new(router(mailer_state(mailer)))?
            .post("/send-email")
            .json(&json!({
                "nome": "Ana",
                "email": "ana@x.com",
                "telefone": "555-0100",
                "assunto": "Jobs",
                "mensagem": "Hi"
            }))
            .await;

        response.assert_status_ok();

        Ok(())
    }
}
