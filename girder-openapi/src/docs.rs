//! Documentation endpoint handler.
//!
//! One [`DocsHandler`] serves the UI page and the spec exports for a mount:
//!
//! - `GET <mount>` - interactive UI (Swagger UI or ReDoc)
//! - `GET <mount>/openapi.json` - the assembled document as JSON
//! - `GET <mount>/openapi.yaml` - the assembled document as YAML
//!
//! The handler holds a pre-assembled, immutable document; all per-request
//! work is serialization of already-resolved data.

use crate::config::{DocsSettings, UiFlavor};
use crate::redoc::{redoc_response, RedocConfig};
use crate::spec::Document;
use crate::swagger::{spec_json_response, spec_yaml_response, swagger_ui_response, SwaggerConfig};
use async_trait::async_trait;
use girder_http::{Error, Handler, HttpRequest, HttpResponse};
use log::warn;

pub struct DocsHandler {
    settings: DocsSettings,
    swagger: SwaggerConfig,
    redoc: RedocConfig,
}

impl DocsHandler {
    /// Handler with default settings (`/docs`, Swagger UI, enabled).
    pub fn new(document: Document) -> Self {
        Self::with_settings(DocsSettings::default(), document)
    }

    pub fn with_settings(settings: DocsSettings, document: Document) -> Self {
        if !settings.enabled {
            warn!("docs serving is disabled; {} will answer 404", settings.path);
        }
        let swagger =
            SwaggerConfig::new(settings.path.clone(), document).with_title(settings.title.clone());
        let redoc = RedocConfig::new(swagger.spec_url()).with_title(settings.title.clone());
        Self {
            settings,
            swagger,
            redoc,
        }
    }

    pub fn settings(&self) -> &DocsSettings {
        &self.settings
    }

    fn ui_response(&self) -> Result<HttpResponse, Error> {
        match self.settings.ui {
            UiFlavor::Swagger => swagger_ui_response(&self.swagger),
            UiFlavor::Redoc => Ok(redoc_response(&self.redoc)),
        }
    }
}

#[async_trait]
impl Handler for DocsHandler {
    async fn handle(&self, req: HttpRequest) -> Result<HttpResponse, Error> {
        if !self.settings.enabled {
            return Ok(HttpResponse::not_found());
        }

        let mount = self.settings.path.trim_end_matches('/');
        let path = req.path.trim_end_matches('/');

        if path == mount {
            self.ui_response()
        } else if path == format!("{mount}/openapi.json") {
            spec_json_response(&self.swagger)
        } else if path == format!("{mount}/openapi.yaml") {
            spec_yaml_response(&self.swagger)
        } else {
            Err(Error::NotFound(req.path))
        }
    }
}
