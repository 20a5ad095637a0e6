//! OpenAPI document for the service.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "pdf2docx API",
        description = "Upload a PDF, get back a Word document. Keeps an in-memory log of recent conversion attempts."
    ),
    paths(
        crate::handlers::convert::convert_pdf,
        crate::handlers::history::list_history,
        crate::handlers::download::download_document,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        pdf2docx_core::ConversionRecord,
        pdf2docx_core::ConversionStatus,
        crate::handlers::convert::ConvertResponse,
        crate::handlers::health::HealthResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "convert", description = "PDF to Word conversion"),
        (name = "history", description = "Recent conversion attempts"),
        (name = "downloads", description = "Generated document downloads"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
