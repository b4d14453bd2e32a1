//! ReDoc handoff, an alternative single-page renderer.

use girder_http::HttpResponse;

/// ReDoc page configuration.
#[derive(Debug, Clone)]
pub struct RedocConfig {
    /// URL the renderer fetches the spec from.
    pub spec_url: String,
    /// Page title.
    pub title: String,
}

impl RedocConfig {
    pub fn new(spec_url: impl Into<String>) -> Self {
        Self {
            spec_url: spec_url.into(),
            title: "API Reference".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for RedocConfig {
    fn default() -> Self {
        Self::new("/docs/openapi.json")
    }
}

/// HTML shell that loads ReDoc from the CDN.
pub fn redoc_html(config: &RedocConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            padding: 0;
        }}
    </style>
</head>
<body>
    <redoc spec-url="{spec_url}"></redoc>
    <script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>"#,
        title = config.title,
        spec_url = config.spec_url
    )
}

/// Response serving the ReDoc page.
pub fn redoc_response(config: &RedocConfig) -> HttpResponse {
    HttpResponse::html(redoc_html(config))
}
