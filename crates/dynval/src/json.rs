// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON decoding driven by runtime type descriptors.

use crate::dispatch::{Codec, DecodeFn, DECODE_OPERATION};
use crate::type_descriptor::{ScalarKind, TypeDescriptor, TypeKind};
use crate::value::Value;
use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Errors for descriptor-driven decoding.
#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
    TypeMismatch { expected: String, found: String },
    InvalidData(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON syntax error: {}", e),
            Self::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
            Self::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Decode JSON text into a [`Value`] shaped by the target descriptor.
///
/// The target type is data, not a type parameter: the same call site can
/// decode into any descriptor picked at runtime (from configuration, a wire
/// message, a registry). Shape mismatches and out-of-range numbers fail;
/// nothing is coerced across kinds.
pub fn decode_json(text: &str, target: &Arc<TypeDescriptor>) -> Result<Value, DecodeError> {
    let parsed: JsonValue = serde_json::from_str(text)?;
    log::trace!(
        "[json] decode {} bytes into '{}'",
        text.len(),
        target.name
    );
    decode_node(&parsed, &target.kind)
}

fn decode_node(node: &JsonValue, kind: &TypeKind) -> Result<Value, DecodeError> {
    match kind {
        TypeKind::Scalar(scalar) => decode_scalar(node, *scalar),
        TypeKind::Nullable(scalar) => {
            if node.is_null() {
                Ok(Value::Null)
            } else {
                decode_scalar(node, *scalar)
            }
        }
        TypeKind::String => match node {
            JsonValue::Null => Ok(Value::Null),
            JsonValue::String(s) => Ok(Value::String(s.clone())),
            other => Err(mismatch("string", other)),
        },
        TypeKind::Any => Ok(Value::Any(node.clone())),
        TypeKind::Struct(fields) => {
            let map = match node {
                JsonValue::Object(map) => map,
                other => return Err(mismatch("object", other)),
            };
            // Unknown members are ignored; missing members take the field
            // type's default (null for nullable/string/untyped fields).
            let mut out = HashMap::with_capacity(fields.len());
            for field in fields {
                let value = match map.get(&field.name) {
                    Some(member) => decode_node(member, &field.type_desc.kind)?,
                    None => field.type_desc.default_value(),
                };
                out.insert(field.name.clone(), value);
            }
            Ok(Value::Struct(out))
        }
        TypeKind::Sequence(element_type) => {
            let items = match node {
                JsonValue::Array(items) => items,
                other => return Err(mismatch("array", other)),
            };
            let decoded: Result<Vec<_>, _> = items
                .iter()
                .map(|item| decode_node(item, &element_type.kind))
                .collect();
            Ok(Value::Sequence(decoded?))
        }
    }
}

fn decode_scalar(node: &JsonValue, kind: ScalarKind) -> Result<Value, DecodeError> {
    match kind {
        ScalarKind::Bool => match node {
            JsonValue::Bool(v) => Ok(Value::Bool(*v)),
            other => Err(mismatch("bool", other)),
        },
        ScalarKind::U8 => unsigned(node, kind).map(|v| Value::U8(v as u8)),
        ScalarKind::U16 => unsigned(node, kind).map(|v| Value::U16(v as u16)),
        ScalarKind::U32 => unsigned(node, kind).map(|v| Value::U32(v as u32)),
        ScalarKind::U64 => unsigned(node, kind).map(Value::U64),
        ScalarKind::I8 => signed(node, kind).map(|v| Value::I8(v as i8)),
        ScalarKind::I16 => signed(node, kind).map(|v| Value::I16(v as i16)),
        ScalarKind::I32 => signed(node, kind).map(|v| Value::I32(v as i32)),
        ScalarKind::I64 => signed(node, kind).map(Value::I64),
        ScalarKind::F32 => float(node, kind).map(|v| Value::F32(v as f32)),
        ScalarKind::F64 => float(node, kind).map(Value::F64),
        ScalarKind::Decimal => match node {
            JsonValue::Number(n) => n
                .to_string()
                .parse()
                .map(Value::Decimal)
                .map_err(|_| DecodeError::InvalidData(format!("bad decimal number {}", n))),
            JsonValue::String(s) => s
                .parse()
                .map(Value::Decimal)
                .map_err(|_| DecodeError::InvalidData(format!("bad decimal literal \"{}\"", s))),
            other => Err(mismatch("decimal", other)),
        },
        ScalarKind::Char => match node {
            JsonValue::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(DecodeError::InvalidData(format!(
                        "expected single-character string, got \"{}\"",
                        s
                    ))),
                }
            }
            other => Err(mismatch("char", other)),
        },
    }
}

fn unsigned(node: &JsonValue, kind: ScalarKind) -> Result<u64, DecodeError> {
    let n = match node {
        JsonValue::Number(n) => n,
        other => return Err(mismatch(kind.name(), other)),
    };
    let max = match kind {
        ScalarKind::U8 => u8::MAX as u64,
        ScalarKind::U16 => u16::MAX as u64,
        ScalarKind::U32 => u32::MAX as u64,
        _ => u64::MAX,
    };
    match n.as_u64() {
        Some(v) if v <= max => Ok(v),
        _ => Err(DecodeError::InvalidData(format!(
            "number {} does not fit {}",
            n,
            kind.name()
        ))),
    }
}

fn signed(node: &JsonValue, kind: ScalarKind) -> Result<i64, DecodeError> {
    let n = match node {
        JsonValue::Number(n) => n,
        other => return Err(mismatch(kind.name(), other)),
    };
    let (min, max) = match kind {
        ScalarKind::I8 => (i8::MIN as i64, i8::MAX as i64),
        ScalarKind::I16 => (i16::MIN as i64, i16::MAX as i64),
        ScalarKind::I32 => (i32::MIN as i64, i32::MAX as i64),
        _ => (i64::MIN, i64::MAX),
    };
    match n.as_i64() {
        Some(v) if (min..=max).contains(&v) => Ok(v),
        _ => Err(DecodeError::InvalidData(format!(
            "number {} does not fit {}",
            n,
            kind.name()
        ))),
    }
}

fn float(node: &JsonValue, kind: ScalarKind) -> Result<f64, DecodeError> {
    match node {
        // as_f64 is total over JSON numbers
        JsonValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| DecodeError::InvalidData(format!("bad number {}", n))),
        other => Err(mismatch(kind.name(), other)),
    }
}

fn mismatch(expected: &str, found: &JsonValue) -> DecodeError {
    DecodeError::TypeMismatch {
        expected: expected.to_string(),
        found: json_kind(found).to_string(),
    }
}

fn json_kind(node: &JsonValue) -> &'static str {
    match node {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// The JSON codec capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create the codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn name(&self) -> &str {
        "json"
    }

    fn operation(&self, name: &str) -> Option<DecodeFn> {
        if name == DECODE_OPERATION {
            Some(decode_json as DecodeFn)
        } else {
            None
        }
    }

    /// A JSON object cannot populate two members of the same name
    /// distinctly, so such targets are rejected up front.
    fn validate_target(&self, target: &TypeDescriptor) -> Result<(), String> {
        match &target.kind {
            TypeKind::Struct(fields) => {
                let mut seen = HashSet::new();
                for field in fields {
                    if !seen.insert(field.name.as_str()) {
                        return Err(format!(
                            "duplicate member '{}' in struct '{}'",
                            field.name, target.name
                        ));
                    }
                    self.validate_target(&field.type_desc)?;
                }
                Ok(())
            }
            TypeKind::Sequence(element_type) => self.validate_target(element_type),
            _ => Ok(()),
        }
    }
}
