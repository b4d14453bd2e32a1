//! Fluent construction of the root document and its schemas.

use crate::spec::*;
use std::collections::BTreeMap;

/// Builder for the root [`Document`] handed to the assembler.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Start a document for the 3.0.0 revision of the specification.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            doc: Document {
                openapi: "3.0.0".to_string(),
                info: Info {
                    title: title.into(),
                    version: version.into(),
                    description: None,
                    terms_of_service: None,
                    contact: None,
                    license: None,
                },
                servers: Vec::new(),
                paths: BTreeMap::new(),
                components: Some(Components::default()),
                tags: Vec::new(),
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.doc.info.description = Some(description.into());
        self
    }

    pub fn terms_of_service(mut self, terms: impl Into<String>) -> Self {
        self.doc.info.terms_of_service = Some(terms.into());
        self
    }

    pub fn contact(
        mut self,
        name: Option<String>,
        url: Option<String>,
        email: Option<String>,
    ) -> Self {
        self.doc.info.contact = Some(Contact { name, url, email });
        self
    }

    pub fn license(mut self, name: impl Into<String>, url: Option<String>) -> Self {
        self.doc.info.license = Some(License {
            name: name.into(),
            url,
        });
        self
    }

    pub fn server(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.doc.servers.push(Server {
            url: url.into(),
            description,
        });
        self
    }

    pub fn tag(mut self, name: impl Into<String>, description: Option<String>) -> Self {
        self.doc.tags.push(Tag {
            name: name.into(),
            description,
        });
        self
    }

    /// Register a path directly on the root, outside fragment assembly.
    pub fn path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.doc.paths.insert(path.into(), item);
        self
    }

    /// Register a reusable schema in the components table.
    pub fn schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        if let Some(ref mut components) = self.doc.components {
            components.schemas.insert(name.into(), schema);
        }
        self
    }

    pub fn security_scheme(mut self, name: impl Into<String>, scheme: SecurityScheme) -> Self {
        if let Some(ref mut components) = self.doc.components {
            components.security_schemes.insert(name.into(), scheme);
        }
        self
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

/// Shorthands for common security schemes
impl DocumentBuilder {
    pub fn add_bearer_auth(self, name: impl Into<String>) -> Self {
        self.security_scheme(
            name,
            SecurityScheme::Http {
                scheme: "bearer".to_string(),
                bearer_format: Some("JWT".to_string()),
            },
        )
    }

    pub fn add_api_key_auth(
        self,
        name: impl Into<String>,
        key_name: impl Into<String>,
        location: ApiKeyLocation,
    ) -> Self {
        self.security_scheme(
            name,
            SecurityScheme::ApiKey {
                name: key_name.into(),
                location,
            },
        )
    }
}

/// Helper constructors for schemas
pub fn string_schema() -> Schema {
    Schema {
        schema_type: Some("string".to_string()),
        ..Default::default()
    }
}

pub fn integer_schema() -> Schema {
    Schema {
        schema_type: Some("integer".to_string()),
        format: Some("int64".to_string()),
        ..Default::default()
    }
}

pub fn number_schema() -> Schema {
    Schema {
        schema_type: Some("number".to_string()),
        format: Some("double".to_string()),
        ..Default::default()
    }
}

pub fn boolean_schema() -> Schema {
    Schema {
        schema_type: Some("boolean".to_string()),
        ..Default::default()
    }
}

pub fn array_schema(items: Schema) -> Schema {
    Schema {
        schema_type: Some("array".to_string()),
        items: Some(Box::new(items)),
        ..Default::default()
    }
}

pub fn object_schema(properties: BTreeMap<String, Schema>, required: Vec<String>) -> Schema {
    Schema {
        schema_type: Some("object".to_string()),
        properties: Some(properties),
        required,
        ..Default::default()
    }
}

/// A reference placeholder pointing into the components table.
pub fn schema_ref(name: impl Into<String>) -> Schema {
    Schema {
        reference: Some(format!("{SCHEMA_REF_PREFIX}{}", name.into())),
        ..Default::default()
    }
}
