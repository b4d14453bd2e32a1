//! Swagger UI handoff.
//!
//! The UI itself is an external collaborator loaded from CDN assets; this
//! module only serializes the assembled document and generates the HTML
//! shell that boots the renderer against the spec endpoint.

use crate::spec::Document;
use girder_http::{Error, HttpResponse};

const SWAGGER_UI_VERSION: &str = "5.10.0";

/// Configuration for a mounted documentation page.
#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    /// Mount path for the UI page (e.g. `/docs`).
    pub path: String,
    /// Title of the rendered page.
    pub title: String,
    /// The fully assembled document being served.
    pub document: Document,
}

impl SwaggerConfig {
    pub fn new(path: impl Into<String>, document: Document) -> Self {
        Self {
            path: path.into(),
            title: "API Documentation".to_string(),
            document,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// URL of the JSON spec endpoint relative to the mount.
    pub fn spec_url(&self) -> String {
        format!("{}/openapi.json", self.path.trim_end_matches('/'))
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn spec_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(&self.document)
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serialize the document as YAML.
    pub fn spec_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(&self.document).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// HTML shell that loads Swagger UI from the CDN and points it at the spec
/// endpoint.
pub fn swagger_ui_html(config: &SwaggerConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@{version}/swagger-ui.css">
    <style>
        body {{
            margin: 0;
            padding: 0;
        }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@{version}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {{
            SwaggerUIBundle({{
                url: "{spec_url}",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [SwaggerUIBundle.presets.apis]
            }});
        }};
    </script>
</body>
</html>"#,
        title = config.title,
        version = SWAGGER_UI_VERSION,
        spec_url = config.spec_url()
    )
}

/// Response serving the UI page.
pub fn swagger_ui_response(config: &SwaggerConfig) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::html(swagger_ui_html(config)))
}

/// Response serving the spec as JSON.
pub fn spec_json_response(config: &SwaggerConfig) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::ok()
        .with_header("content-type", "application/json")
        .with_body(config.spec_json()?.into_bytes()))
}

/// Response serving the spec as YAML.
pub fn spec_yaml_response(config: &SwaggerConfig) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::ok()
        .with_header("content-type", "application/x-yaml")
        .with_body(config.spec_yaml()?.into_bytes()))
}
