//! Per-endpoint document fragments.
//!
//! A fragment describes one path's operations in isolation. Fragments are
//! built once as static literals, registered with the assembler, and merged
//! by copy; they stay reusable after assembly.

use crate::spec::{Operation, Parameter, PathItem, RequestBody, Response};

/// One endpoint's operations bound to exactly one path key.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFragment {
    path: String,
    item: PathItem,
}

impl PathFragment {
    pub fn new(path: impl Into<String>, item: PathItem) -> Self {
        Self {
            path: path.into(),
            item,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn item(&self) -> &PathItem {
        &self.item
    }
}

/// Builder for a fragment's [`PathItem`].
#[derive(Debug, Clone, Default)]
pub struct PathItemBuilder {
    item: PathItem,
}

impl PathItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(mut self, operation: Operation) -> Self {
        self.item.get = Some(operation);
        self
    }

    pub fn put(mut self, operation: Operation) -> Self {
        self.item.put = Some(operation);
        self
    }

    pub fn post(mut self, operation: Operation) -> Self {
        self.item.post = Some(operation);
        self
    }

    pub fn delete(mut self, operation: Operation) -> Self {
        self.item.delete = Some(operation);
        self
    }

    pub fn patch(mut self, operation: Operation) -> Self {
        self.item.patch = Some(operation);
        self
    }

    pub fn build(self) -> PathItem {
        self.item
    }
}

/// Builder for a single [`Operation`].
#[derive(Debug, Clone, Default)]
pub struct OperationBuilder {
    operation: Operation,
}

impl OperationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.operation.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.operation.description = Some(description.into());
        self
    }

    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation.operation_id = Some(id.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.operation.tags.push(tag.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.operation.parameters.push(parameter);
        self
    }

    pub fn request_body(mut self, body: RequestBody) -> Self {
        self.operation.request_body = Some(body);
        self
    }

    pub fn response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.operation.responses.insert(status.into(), response);
        self
    }

    pub fn build(self) -> Operation {
        self.operation
    }
}
