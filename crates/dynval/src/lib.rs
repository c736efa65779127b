// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dynval - Runtime type descriptors and dynamic JSON decoding
//!
//! Runtime type manipulation without compile-time type knowledge: describe a
//! type at runtime, classify it, take its default value, and decode JSON
//! text into it through a codec capability looked up by operation name.
//!
//! # Features
//!
//! - **TypeDescriptor**: runtime type description over a closed set of
//!   scalar kinds, plus nullable/string/untyped/struct/sequence shapes
//! - **Value**: type-erased container holding any describable value
//! - **Builder API**: fluent interface for building type descriptors
//! - **JSON support**: decode JSON text into a `Value` shaped by a
//!   runtime-supplied descriptor
//! - **Text reading**: drain a `Read` source into a `String` with
//!   encoding and byte-order-mark handling
//!
//! # Example
//!
//! ```rust
//! use dynval::{decode_as, JsonCodec, ScalarKind, TypeDescriptorBuilder, Value};
//! use std::sync::Arc;
//!
//! // Build a type descriptor at runtime
//! let reading = Arc::new(
//!     TypeDescriptorBuilder::new("SensorReading")
//!         .field("sensor_id", ScalarKind::U32)
//!         .field("temperature", ScalarKind::F64)
//!         .string_field("location")
//!         .build(),
//! );
//!
//! // Decode JSON against it
//! let value = decode_as(
//!     &JsonCodec::new(),
//!     r#"{"sensor_id":42,"temperature":23.5,"location":"Building A"}"#,
//!     &reading,
//! )
//! .unwrap();
//!
//! assert_eq!(value.get_field("sensor_id").and_then(Value::as_u32), Some(42));
//! assert_eq!(value.get_field("location").and_then(Value::as_str), Some("Building A"));
//!
//! // Classification and defaults come straight off the descriptor
//! assert!(!reading.is_basic());
//! assert!(reading.default_value().is_null());
//! ```

/// Fluent builder for type descriptors.
pub mod builder;
/// Codec capability trait and named-operation dispatch.
pub mod dispatch;
/// JSON decoding driven by runtime type descriptors.
pub mod json;
/// Stream-to-text reading with encoding/BOM handling.
pub mod text;
/// Runtime type descriptors, classification, default values.
pub mod type_descriptor;
/// Dynamic value types.
pub mod value;

pub use builder::TypeDescriptorBuilder;
pub use dispatch::{decode_as, Codec, DecodeFn, DispatchError, DECODE_OPERATION};
pub use json::{decode_json, DecodeError, JsonCodec};
pub use text::{read_text, read_text_with, TextEncoding, TextReadError, TextReadOptions};
pub use type_descriptor::{FieldDescriptor, ScalarKind, TypeDescriptor, TypeKind};
pub use value::{Decimal, ParseDecimalError, Value};
