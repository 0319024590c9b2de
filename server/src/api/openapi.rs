//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{dcim, health};
use crate::api::types::PaginationMeta;
use crate::data::filters::FilterDescriptor;
use crate::data::types::{
    ConsolePortRow, ConsoleServerPortRow, DeviceRow, DeviceTypeRow, InterfaceConnectionRow,
    InterfaceRow, PowerOutletRow, PowerPortRow, RackGroupRow, RackReservationRow, RackRow,
    SiteRow,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RackView API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Read-only DCIM inventory queries"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "dcim", description = "Filtered listings of sites, racks, devices and their connections")
    ),
    paths(
        health::health,
        dcim::list_resource,
        dcim::list_filters,
    ),
    components(schemas(
        PaginationMeta,
        FilterDescriptor,
        health::HealthResponse,
        dcim::types::ListQuery,
        dcim::types::FiltersResponse,
        // Records
        SiteRow,
        RackGroupRow,
        RackRow,
        RackReservationRow,
        DeviceTypeRow,
        DeviceRow,
        ConsolePortRow,
        ConsoleServerPortRow,
        PowerPortRow,
        PowerOutletRow,
        InterfaceRow,
        InterfaceConnectionRow,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>RackView API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                deepLinking: true,
                showExtensions: true,
                showCommonExtensions: true
            });
        };
    </script>
</body>
</html>"#;
