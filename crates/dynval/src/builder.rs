// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for TypeDescriptor.

use crate::type_descriptor::{FieldDescriptor, ScalarKind, TypeDescriptor, TypeKind};
use std::sync::Arc;

/// Builder for creating TypeDescriptor instances.
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptorBuilder {
    /// Create a new builder for a struct type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a scalar field.
    pub fn field(mut self, name: impl Into<String>, kind: ScalarKind) -> Self {
        let type_desc = Arc::new(TypeDescriptor::scalar("", kind));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a nullable-scalar field.
    pub fn nullable_field(mut self, name: impl Into<String>, kind: ScalarKind) -> Self {
        let type_desc = Arc::new(TypeDescriptor::nullable("", kind));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a string field.
    pub fn string_field(mut self, name: impl Into<String>) -> Self {
        let type_desc = Arc::new(TypeDescriptor::string(""));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add an untyped field.
    pub fn any_field(mut self, name: impl Into<String>) -> Self {
        let type_desc = Arc::new(TypeDescriptor::any(""));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a field with a type descriptor.
    pub fn field_with_type(
        mut self,
        name: impl Into<String>,
        type_desc: Arc<TypeDescriptor>,
    ) -> Self {
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a sequence field with scalar elements.
    pub fn sequence_field(mut self, name: impl Into<String>, element_kind: ScalarKind) -> Self {
        let element_type = Arc::new(TypeDescriptor::scalar("", element_kind));
        let type_desc = Arc::new(TypeDescriptor::new("", TypeKind::Sequence(element_type)));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a sequence field with an arbitrary element type.
    pub fn sequence_field_of(
        mut self,
        name: impl Into<String>,
        element_type: Arc<TypeDescriptor>,
    ) -> Self {
        let type_desc = Arc::new(TypeDescriptor::new("", TypeKind::Sequence(element_type)));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::struct_type(self.name, self.fields)
    }
}
