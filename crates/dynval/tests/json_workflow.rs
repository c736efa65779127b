// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end checks over the public API.

use dynval::{
    decode_as, Decimal, DispatchError, JsonCodec, ScalarKind, TypeDescriptor,
    TypeDescriptorBuilder, Value,
};
use std::sync::Arc;

#[test]
fn decode_shapes_by_runtime_target() {
    let target = Arc::new(
        TypeDescriptorBuilder::new("Record")
            .field("x", ScalarKind::I32)
            .build(),
    );

    let value = decode_as(&JsonCodec::new(), r#"{"x":5}"#, &target).expect("decode");
    let x = value.get_field("x").expect("field x");
    assert_eq!(*x, Value::I32(5));
    // Exactly the requested kind, not a wider one.
    assert_eq!(x.as_i64(), None);
}

#[test]
fn classification_closed_set() {
    let mut basic = 0;
    for kind in ScalarKind::ALL {
        assert!(TypeDescriptor::scalar("", kind).is_basic());
        assert!(TypeDescriptor::nullable("", kind).is_basic());
        basic += 2;
    }
    assert!(TypeDescriptor::string("").is_basic());
    assert!(TypeDescriptor::any("").is_basic());
    basic += 2;
    assert_eq!(basic, 28);

    let custom = TypeDescriptorBuilder::new("Custom")
        .field("inner", ScalarKind::I32)
        .build();
    assert!(!custom.is_basic());
}

#[test]
fn defaults_zero_or_null() {
    assert_eq!(
        TypeDescriptor::scalar("", ScalarKind::I32).default_value(),
        Value::I32(0)
    );
    assert_eq!(
        TypeDescriptor::scalar("", ScalarKind::Decimal).default_value(),
        Value::Decimal(Decimal::ZERO)
    );
    assert_eq!(
        TypeDescriptor::nullable("", ScalarKind::I32).default_value(),
        Value::Null
    );
    assert_eq!(TypeDescriptor::string("").default_value(), Value::Null);
}

#[test]
fn decimal_fields_survive_as_text() {
    let target = Arc::new(
        TypeDescriptorBuilder::new("Invoice")
            .field("total", ScalarKind::Decimal)
            .build(),
    );

    // String-typed decimals keep trailing zeros; the scale is part of the value.
    let value = decode_as(&JsonCodec::new(), r#"{"total":"19.90"}"#, &target).expect("decode");
    assert_eq!(
        value.get_field("total").and_then(Value::as_decimal),
        Some(Decimal::new(1990, 2))
    );
}

#[test]
fn mismatched_shape_reports_invocation_failure() {
    let target = Arc::new(
        TypeDescriptorBuilder::new("Record")
            .field("x", ScalarKind::I32)
            .build(),
    );

    // An array is not an object; the codec's own failure is carried through.
    let err = decode_as(&JsonCodec::new(), "[1,2,3]", &target).unwrap_err();
    match err {
        DispatchError::Invocation { .. } => {}
        other => panic!("expected Invocation, got {:?}", other),
    }
}
