//! Document assembly: fragment merging and reference resolution.
//!
//! [`Assembler::assemble`] is a pure, synchronous, one-shot transform meant
//! to run once at process startup. It never mutates its inputs; the base
//! document and every registered fragment stay reusable.

use crate::error::{AssembleError, Result};
use crate::fragment::PathFragment;
use crate::spec::{Document, Operation, Schema, SCHEMA_REF_PREFIX};
use log::{debug, info};
use std::collections::BTreeMap;

/// Merges path fragments into a root document and inlines every reference
/// placeholder from the components table.
#[derive(Debug, Clone)]
pub struct Assembler {
    base: Document,
    fragments: Vec<PathFragment>,
    manifest_version: Option<String>,
}

impl Assembler {
    pub fn new(base: Document) -> Self {
        Self {
            base,
            fragments: Vec::new(),
            manifest_version: None,
        }
    }

    /// Register one fragment.
    pub fn fragment(mut self, fragment: PathFragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Register a batch of fragments.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = PathFragment>) -> Self {
        self.fragments.extend(fragments);
        self
    }

    /// Overwrite `info.version` in the output with an externally sourced
    /// version string, typically `env!("CARGO_PKG_VERSION")`.
    pub fn manifest_version(mut self, version: impl Into<String>) -> Self {
        self.manifest_version = Some(version.into());
        self
    }

    /// Produce the fully resolved document.
    ///
    /// Fails fast on duplicate path keys, on placeholders with no matching
    /// components entry, and on component reference cycles. The output
    /// contains no `$ref` markers anywhere.
    pub fn assemble(&self) -> Result<Document> {
        let mut doc = self.base.clone();

        if let Some(ref version) = self.manifest_version {
            doc.info.version = version.clone();
        }

        for fragment in &self.fragments {
            if doc.paths.contains_key(fragment.path()) {
                return Err(AssembleError::DuplicatePath {
                    path: fragment.path().to_string(),
                });
            }
            doc.paths.insert(fragment.path().to_string(), fragment.item().clone());
        }

        // Lookups go against the pre-resolution table; resolution recurses,
        // so substituted copies come out fully inlined either way.
        let table = doc
            .components
            .as_ref()
            .map(|c| c.schemas.clone())
            .unwrap_or_default();

        for item in doc.paths.values_mut() {
            for operation in item.operations_mut() {
                resolve_operation(operation, &table)?;
            }
        }

        if let Some(ref mut components) = doc.components {
            let mut resolved = BTreeMap::new();
            for (name, schema) in &table {
                let mut stack = vec![name.clone()];
                resolved.insert(name.clone(), resolve_schema(schema, &table, &mut stack)?);
            }
            components.schemas = resolved;
        }

        info!(
            "assembled OpenAPI document `{}`: {} fragments merged, {} paths total",
            doc.info.title,
            self.fragments.len(),
            doc.paths.len()
        );

        Ok(doc)
    }
}

fn resolve_operation(operation: &mut Operation, table: &BTreeMap<String, Schema>) -> Result<()> {
    for parameter in &mut operation.parameters {
        if let Some(ref schema) = parameter.schema {
            parameter.schema = Some(resolve_schema(schema, table, &mut Vec::new())?);
        }
    }

    if let Some(ref mut body) = operation.request_body {
        for media in body.content.values_mut() {
            if let Some(ref schema) = media.schema {
                media.schema = Some(resolve_schema(schema, table, &mut Vec::new())?);
            }
        }
    }

    for response in operation.responses.values_mut() {
        if let Some(ref mut content) = response.content {
            for media in content.values_mut() {
                if let Some(ref schema) = media.schema {
                    media.schema = Some(resolve_schema(schema, table, &mut Vec::new())?);
                }
            }
        }
        if let Some(ref mut headers) = response.headers {
            for header in headers.values_mut() {
                if let Some(ref schema) = header.schema {
                    header.schema = Some(resolve_schema(schema, table, &mut Vec::new())?);
                }
            }
        }
    }

    Ok(())
}

/// Returns a deep copy of `schema` with every placeholder replaced by the
/// referenced component definition. `stack` holds the component names
/// currently being expanded; re-entering one of them is a cycle.
fn resolve_schema(
    schema: &Schema,
    table: &BTreeMap<String, Schema>,
    stack: &mut Vec<String>,
) -> Result<Schema> {
    if let Some(ref reference) = schema.reference {
        let name = reference
            .strip_prefix(SCHEMA_REF_PREFIX)
            .filter(|n| !n.is_empty() && !n.contains('/'))
            .ok_or_else(|| AssembleError::UnresolvedReference {
                reference: reference.clone(),
            })?;

        if stack.iter().any(|n| n == name) {
            return Err(AssembleError::CircularReference {
                name: name.to_string(),
            });
        }

        let target = table
            .get(name)
            .ok_or_else(|| AssembleError::UnresolvedReference {
                reference: reference.clone(),
            })?;

        stack.push(name.to_string());
        // Sibling fields of a `$ref` are discarded; OpenAPI 3.0 ignores them.
        let resolved = resolve_schema(target, table, stack)?;
        stack.pop();

        debug!("inlined component schema `{name}`");
        return Ok(resolved);
    }

    let mut out = schema.clone();

    if let Some(ref properties) = schema.properties {
        let mut resolved = BTreeMap::new();
        for (key, value) in properties {
            resolved.insert(key.clone(), resolve_schema(value, table, stack)?);
        }
        out.properties = Some(resolved);
    }

    if let Some(ref items) = schema.items {
        out.items = Some(Box::new(resolve_schema(items, table, stack)?));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{object_schema, schema_ref, string_schema, DocumentBuilder};
    use crate::fragment::{OperationBuilder, PathItemBuilder};
    use crate::spec::{Header, Response};

    fn base_with_user() -> Document {
        let mut props = BTreeMap::new();
        props.insert("name".to_string(), string_schema());
        DocumentBuilder::new("Test API", "1.0.0")
            .schema("User", object_schema(props, vec!["name".to_string()]))
            .build()
    }

    fn users_fragment() -> PathFragment {
        PathFragment::new(
            "/users",
            PathItemBuilder::new()
                .get(
                    OperationBuilder::new()
                        .summary("List users")
                        .response("200", Response::json("A list of users", schema_ref("User")))
                        .build(),
                )
                .build(),
        )
    }

    #[test]
    fn test_fragment_merged_under_path_key() {
        let doc = Assembler::new(base_with_user())
            .fragment(users_fragment())
            .assemble()
            .unwrap();

        assert!(doc.paths.contains_key("/users"));
    }

    #[test]
    fn test_reference_inlined_in_response() {
        let doc = Assembler::new(base_with_user())
            .fragment(users_fragment())
            .assemble()
            .unwrap();

        let schema = doc.paths["/users"].get.as_ref().unwrap().responses["200"]
            .content
            .as_ref()
            .unwrap()["application/json"]
            .schema
            .as_ref()
            .unwrap();

        assert!(schema.reference.is_none());
        assert_eq!(schema.schema_type, Some("object".to_string()));
        assert!(schema.properties.as_ref().unwrap().contains_key("name"));
    }

    #[test]
    fn test_dangling_reference_fails() {
        let fragment = PathFragment::new(
            "/ghosts",
            PathItemBuilder::new()
                .get(
                    OperationBuilder::new()
                        .response("200", Response::json("ghost", schema_ref("Ghost")))
                        .build(),
                )
                .build(),
        );

        let err = Assembler::new(base_with_user())
            .fragment(fragment)
            .assemble()
            .unwrap_err();

        assert!(matches!(err, AssembleError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_foreign_ref_shape_fails() {
        let fragment = PathFragment::new(
            "/ext",
            PathItemBuilder::new()
                .get(
                    OperationBuilder::new()
                        .response(
                            "200",
                            Response::json(
                                "external",
                                Schema {
                                    reference: Some("common.yaml#/User".to_string()),
                                    ..Default::default()
                                },
                            ),
                        )
                        .build(),
                )
                .build(),
        );

        let err = Assembler::new(base_with_user())
            .fragment(fragment)
            .assemble()
            .unwrap_err();

        assert!(matches!(err, AssembleError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_duplicate_fragment_path_fails() {
        let err = Assembler::new(base_with_user())
            .fragment(users_fragment())
            .fragment(users_fragment())
            .assemble()
            .unwrap_err();

        assert!(matches!(err, AssembleError::DuplicatePath { path } if path == "/users"));
    }

    #[test]
    fn test_fragment_colliding_with_root_path_fails() {
        let base = DocumentBuilder::new("Test API", "1.0.0")
            .path("/users", PathItemBuilder::new().build())
            .build();

        let err = Assembler::new(base)
            .fragment(users_fragment())
            .assemble()
            .unwrap_err();

        assert!(matches!(err, AssembleError::DuplicatePath { .. }));
    }

    #[test]
    fn test_component_to_component_resolution() {
        let mut address_props = BTreeMap::new();
        address_props.insert("street".to_string(), string_schema());

        let mut user_props = BTreeMap::new();
        user_props.insert("address".to_string(), schema_ref("Address"));

        let base = DocumentBuilder::new("Test API", "1.0.0")
            .schema("Address", object_schema(address_props, vec![]))
            .schema("User", object_schema(user_props, vec![]))
            .build();

        let fragment = PathFragment::new(
            "/users",
            PathItemBuilder::new()
                .get(
                    OperationBuilder::new()
                        .response("200", Response::json("user", schema_ref("User")))
                        .build(),
                )
                .build(),
        );

        let doc = Assembler::new(base).fragment(fragment).assemble().unwrap();

        let user = doc.paths["/users"].get.as_ref().unwrap().responses["200"]
            .content
            .as_ref()
            .unwrap()["application/json"]
            .schema
            .as_ref()
            .unwrap();
        let address = &user.properties.as_ref().unwrap()["address"];

        assert!(address.reference.is_none());
        assert!(address.properties.as_ref().unwrap().contains_key("street"));

        // the components table itself comes out inlined as well
        let table = &doc.components.as_ref().unwrap().schemas;
        assert!(table["User"].properties.as_ref().unwrap()["address"]
            .reference
            .is_none());
    }

    #[test]
    fn test_circular_component_reference_fails() {
        let mut node_props = BTreeMap::new();
        node_props.insert("next".to_string(), schema_ref("Node"));

        let base = DocumentBuilder::new("Test API", "1.0.0")
            .schema("Node", object_schema(node_props, vec![]))
            .build();

        let err = Assembler::new(base).assemble().unwrap_err();
        assert!(matches!(err, AssembleError::CircularReference { name } if name == "Node"));
    }

    #[test]
    fn test_parameter_and_header_schemas_resolved() {
        let base = base_with_user();

        let fragment = PathFragment::new(
            "/users/{id}",
            PathItemBuilder::new()
                .get(
                    OperationBuilder::new()
                        .parameter(crate::spec::Parameter {
                            name: "id".to_string(),
                            location: crate::spec::ParameterLocation::Path,
                            description: None,
                            required: Some(true),
                            schema: Some(schema_ref("User")),
                        })
                        .response(
                            "200",
                            Response {
                                description: "user".to_string(),
                                content: None,
                                headers: Some(BTreeMap::from([(
                                    "X-User".to_string(),
                                    Header {
                                        description: None,
                                        schema: Some(schema_ref("User")),
                                    },
                                )])),
                            },
                        )
                        .build(),
                )
                .build(),
        );

        let doc = Assembler::new(base).fragment(fragment).assemble().unwrap();
        let operation = doc.paths["/users/{id}"].get.as_ref().unwrap();

        assert!(operation.parameters[0].schema.as_ref().unwrap().reference.is_none());
        let header = &operation.responses["200"].headers.as_ref().unwrap()["X-User"];
        assert!(header.schema.as_ref().unwrap().reference.is_none());
    }

    #[test]
    fn test_manifest_version_copied_into_info() {
        let doc = Assembler::new(base_with_user())
            .manifest_version("9.9.9")
            .assemble()
            .unwrap();

        assert_eq!(doc.info.version, "9.9.9");
    }

    #[test]
    fn test_inputs_left_reusable() {
        let base = base_with_user();
        let fragment = users_fragment();

        let assembler = Assembler::new(base.clone()).fragment(fragment.clone());
        let _ = assembler.assemble().unwrap();

        // same assembler again: inputs were not consumed or mutated
        let again = assembler.assemble().unwrap();
        assert!(again.paths.contains_key("/users"));
        assert_eq!(fragment.path(), "/users");
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let assembler = Assembler::new(base_with_user()).fragment(users_fragment());

        let first = serde_json::to_string(&assembler.assemble().unwrap()).unwrap();
        let second = serde_json::to_string(&assembler.assemble().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
