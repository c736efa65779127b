// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.

use crate::value::{Decimal, Value};
use std::sync::Arc;

/// Scalar (value-type) kinds. Closed set; never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Decimal,
    Char,
}

impl ScalarKind {
    /// Every scalar kind, in declaration order.
    pub const ALL: [ScalarKind; 13] = [
        Self::Bool,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::Decimal,
        Self::Char,
    ];

    /// Lowercase name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::Char => "char",
        }
    }

    /// The zero value of exactly this kind.
    pub fn zero(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::U8 => Value::U8(0),
            Self::U16 => Value::U16(0),
            Self::U32 => Value::U32(0),
            Self::U64 => Value::U64(0),
            Self::I8 => Value::I8(0),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::Decimal => Value::Decimal(Decimal::ZERO),
            Self::Char => Value::Char('\0'),
        }
    }
}

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Scalar value type.
    Scalar(ScalarKind),
    /// Nullable wrapper of a scalar value type. Strings and untyped values
    /// are already nullable by nature and have no wrapped form.
    Nullable(ScalarKind),
    /// UTF-8 string.
    String,
    /// Untyped marker; carries whatever the source held.
    Any,
    /// Struct with named fields.
    Struct(Vec<FieldDescriptor>),
    /// Sequence (dynamic length) of a single element type.
    Sequence(Arc<TypeDescriptor>),
}

/// A complete type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a scalar type descriptor.
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(name, TypeKind::Scalar(kind))
    }

    /// Create a nullable-scalar type descriptor.
    pub fn nullable(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(name, TypeKind::Nullable(kind))
    }

    /// Create a string type descriptor.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::String)
    }

    /// Create an untyped descriptor.
    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Any)
    }

    /// Create a struct type descriptor.
    pub fn struct_type(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self::new(name, TypeKind::Struct(fields))
    }

    /// Create a sequence type descriptor.
    pub fn sequence(name: impl Into<String>, element_type: Arc<TypeDescriptor>) -> Self {
        Self::new(name, TypeKind::Sequence(element_type))
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Membership in the closed basic-type set: the thirteen scalar kinds,
    /// their nullable wrappers, string, and the untyped marker. Composite
    /// and user-defined shapes are never basic, regardless of what they
    /// contain.
    pub fn is_basic(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Scalar(_) | TypeKind::Nullable(_) | TypeKind::String | TypeKind::Any
        )
    }

    /// The default value for this type: the zero of exactly the scalar kind
    /// for scalar descriptors, [`Value::Null`] for everything else. Nullable
    /// wrappers, strings and untyped values default to null, not to a zero;
    /// callers depend on absence here.
    pub fn default_value(&self) -> Value {
        match &self.kind {
            TypeKind::Scalar(kind) => kind.zero(),
            _ => Value::Null,
        }
    }

    /// Get fields if this is a struct.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        match &self.kind {
            TypeKind::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields()?.iter().position(|f| f.name == name)
    }
}

/// Field descriptor for struct members.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_desc: Arc<TypeDescriptor>,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            type_desc,
        }
    }
}
