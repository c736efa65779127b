// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Named-operation dispatch over codec capabilities.
//!
//! A [`Codec`] exposes decode routines by name, so a caller holding only a
//! runtime [`TypeDescriptor`] can target it without the type appearing
//! anywhere in a signature. [`decode_as`] is the single entry point: look
//! the operation up, check the target against the codec's constraints,
//! invoke. One shot, no state, no retries.

use crate::json::DecodeError;
use crate::type_descriptor::TypeDescriptor;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Operation name every text codec is expected to expose. A codec that
/// renames its operation is not dispatchable.
pub const DECODE_OPERATION: &str = "decode";

/// A decode routine: source text plus runtime target type to a value.
pub type DecodeFn = fn(&str, &Arc<TypeDescriptor>) -> Result<Value, DecodeError>;

/// A text codec capability, queried for operations by name.
pub trait Codec {
    /// Codec name used in diagnostics.
    fn name(&self) -> &str;

    /// Look up a decode operation by name.
    fn operation(&self, name: &str) -> Option<DecodeFn>;

    /// Check that a target type satisfies this codec's constraints.
    fn validate_target(&self, _target: &TypeDescriptor) -> Result<(), String> {
        Ok(())
    }
}

/// Errors for codec dispatch.
#[derive(Debug)]
pub enum DispatchError {
    /// The codec exposes no operation of the expected name.
    MissingOperation { codec: String, operation: String },
    /// The target type violates the codec's constraints.
    InvalidTargetType { type_name: String, reason: String },
    /// The operation itself failed; carries the original cause.
    Invocation {
        operation: String,
        source: DecodeError,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperation { codec, operation } => {
                write!(f, "codec '{}' has no operation '{}'", codec, operation)
            }
            Self::InvalidTargetType { type_name, reason } => {
                write!(f, "invalid target type '{}': {}", type_name, reason)
            }
            Self::Invocation { operation, source } => {
                write!(f, "operation '{}' failed: {}", operation, source)
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Decode `text` into a value of the runtime-supplied target type using the
/// codec's named decode operation.
///
/// Fails with [`DispatchError::MissingOperation`] when the codec does not
/// expose [`DECODE_OPERATION`], with [`DispatchError::InvalidTargetType`]
/// when the target cannot satisfy the codec's constraints, and with
/// [`DispatchError::Invocation`] when the decode itself rejects the text.
pub fn decode_as(
    codec: &dyn Codec,
    text: &str,
    target: &Arc<TypeDescriptor>,
) -> Result<Value, DispatchError> {
    let op = codec
        .operation(DECODE_OPERATION)
        .ok_or_else(|| DispatchError::MissingOperation {
            codec: codec.name().to_string(),
            operation: DECODE_OPERATION.to_string(),
        })?;

    codec
        .validate_target(target)
        .map_err(|reason| DispatchError::InvalidTargetType {
            type_name: target.name.clone(),
            reason,
        })?;

    log::debug!(
        "[dispatch] {}:{} target='{}'",
        codec.name(),
        DECODE_OPERATION,
        target.name
    );
    op(text, target).map_err(|source| DispatchError::Invocation {
        operation: DECODE_OPERATION.to_string(),
        source,
    })
}
