//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every handler in the inbound layer together with the
//! request, response and error envelope schemas. Swagger UI serves it in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::contact::{SubmitFormRequest, SubmitFormResponse};
use crate::inbound::http::health::{BannerResponse, HealthResponse};
use crate::inbound::http::schemas::ErrorEnvelope;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NovaShield API",
        description = "Contact-form intake that notifies the office and confirms receipt to the submitter."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contact::submit_form,
        crate::inbound::http::health::root,
        crate::inbound::http::health::api_health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SubmitFormRequest,
        SubmitFormResponse,
        ErrorEnvelope,
        BannerResponse,
        HealthResponse
    )),
    tags(
        (name = "contact", description = "Contact-form submissions"),
        (name = "health", description = "Banner, health summary and health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("ErrorEnvelope", &["status", "status_code", "detail"])]
    #[case("SubmitFormRequest", &["name", "email", "company", "phone", "message", "service_type"])]
    #[case("SubmitFormResponse", &["status", "message", "user_email_sent"])]
    #[case("HealthResponse", &["status", "service"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/api/submit-form")]
    #[case("/api/health")]
    #[case("/")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
