//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::api::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Contact Relay"),
    paths(contact::handler, contact::preflight, uptime::handler),
    components(schemas(
        contact::SubmitContactBody,
        contact::SubmitContactResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{servers::http::router, state::tests::test_state};

    #[tokio::test]
    async fn test_openapi_document_lists_contact_route() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .get("/api/openapi.json")
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();

        assert!(json["paths"]["/api/contact"]["post"].is_object());
        assert!(json["paths"]["/api/contact"]["options"].is_object());
        assert!(json["paths"]["/api/uptime"]["get"].is_object());

        Ok(())
    }
}
