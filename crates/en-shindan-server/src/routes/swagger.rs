//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::models::{DiagnoseRequest, DiagnoseResponse, DiagnosisData};

#[derive(OpenApi)]
#[openapi(
    paths(super::diagnosis::diagnose),
    info(
        title = "En-Shindan API",
        version = "0.1.0",
        description = "縁診断 - natural type, name bond, attraction type, biorhythm and region energy from a single form.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Diagnosis", description = "Diagnosis - compute a profile from the form"),
    ),
    components(schemas(DiagnoseRequest, DiagnoseResponse, DiagnosisData)),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_diagnosis_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/diagnosis"));
    }
}
