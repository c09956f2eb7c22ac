//! End-to-end dispatch scenarios exercised through the public `Dispatcher`
//! entry point, one per receiver, plus the universal decline cases.

mod common;

use propfn_dispatch::collab::stub::{NullLogSink, StubFeatureWave, StubFileSystem, StubOsPlatform, StubRegistry};
use propfn_dispatch::{Collaborators, Dispatcher, DispatcherConfig, ReceiverType};
use propfn_value::Value;
use pretty_assertions::assert_eq;

fn dispatcher() -> Dispatcher {
    common::init_tracing();
    Dispatcher::new(
        Collaborators {
            file_system: Box::new(StubFileSystem::default()),
            registry: Box::new(StubRegistry),
            os_platform: Box::new(StubOsPlatform { unix_like: true }),
            feature_wave: Box::new(StubFeatureWave::default()),
            log_sink: Box::new(NullLogSink),
        },
        DispatcherConfig::default(),
        false,
    )
}

#[test]
fn string_starts_with() {
    let d = dispatcher();
    let r = d.dispatch(
        ReceiverType::String,
        "StartsWith",
        Some(&Value::string("MyTestString")),
        &[Value::string("My")],
    );
    assert_eq!(r.unwrap(), Some(Value::Bool(true)));
}

#[test]
fn string_equals() {
    let d = dispatcher();
    let r = d.dispatch(
        ReceiverType::String,
        "Equals",
        Some(&Value::string("MyTestString")),
        &[Value::string("MyTestString")],
    );
    assert_eq!(r.unwrap(), Some(Value::Bool(true)));
}

#[test]
fn intrinsic_right_shift_unsigned() {
    let d = dispatcher();
    let r = d.dispatch(ReceiverType::Intrinsic, "RightShiftUnsigned", None, &[Value::Int(16), Value::Int(2)]);
    assert_eq!(r.unwrap(), Some(Value::Int(4)));
}

#[test]
fn intrinsic_add_prefers_long_when_both_integral() {
    let d = dispatcher();
    let r = d.dispatch(ReceiverType::Intrinsic, "Add", None, &[Value::string("1"), Value::string("2")]);
    assert_eq!(r.unwrap(), Some(Value::Long(3)));
}

#[test]
fn intrinsic_add_falls_back_to_double() {
    let d = dispatcher();
    let r = d.dispatch(ReceiverType::Intrinsic, "Add", None, &[Value::string("1.5"), Value::string("2")]);
    assert_eq!(r.unwrap(), Some(Value::Double(3.5)));
}

#[test]
fn version_to_string_with_field_count() {
    let d = dispatcher();
    let ver = Value::Ver(propfn_value::Version::new(1, 2, 3, 4));
    let r = d.dispatch(ReceiverType::Version, "ToString", Some(&ver), &[Value::Int(2)]);
    assert_eq!(r.unwrap(), Some(Value::string("1.2")));
}

#[test]
fn int_to_string_hex_format() {
    let d = dispatcher();
    let r = d.dispatch(ReceiverType::String, "ToString", Some(&Value::Int(42)), &[Value::string("X4")]);
    assert_eq!(r.unwrap(), Some(Value::string("002A")));
}

#[test]
fn char_is_digit() {
    let d = dispatcher();
    let a = d.dispatch(ReceiverType::Char, "IsDigit", None, &[Value::string("7")]);
    assert_eq!(a.unwrap(), Some(Value::Bool(true)));
    let b = d.dispatch(ReceiverType::Char, "IsDigit", None, &[Value::string("ab"), Value::Int(1)]);
    assert_eq!(b.unwrap(), Some(Value::Bool(false)));
}

#[test]
fn string_ends_with_ordinal_ignore_case() {
    let d = dispatcher();
    let r = d.dispatch(
        ReceiverType::String,
        "EndsWith",
        Some(&Value::string("FOO")),
        &[Value::string("foo"), Value::string("OrdinalIgnoreCase")],
    );
    assert_eq!(r.unwrap(), Some(Value::Bool(true)));
}

#[test]
fn path_combine_three_parts() {
    let d = dispatcher();
    let r = d.dispatch(
        ReceiverType::Path,
        "Combine",
        None,
        &[Value::string("a"), Value::string("b"), Value::string("c")],
    );
    let Some(Value::Str(s)) = r.unwrap() else { panic!("expected a string") };
    assert_eq!(s.replace('\\', "/"), "a/b/c");
}

#[test]
fn unknown_method_declines() {
    let d = dispatcher();
    let r = d.dispatch(ReceiverType::String, "Frobnicate", Some(&Value::string("x")), &[]);
    assert_eq!(r.unwrap(), None);
}

#[test]
fn arity_mismatch_declines() {
    let d = dispatcher();
    let r = d.dispatch(ReceiverType::Intrinsic, "BitwiseNot", None, &[Value::Int(1), Value::Int(2)]);
    assert_eq!(r.unwrap(), None);
}

#[test]
fn coercion_failure_declines() {
    let d = dispatcher();
    let r = d.dispatch(ReceiverType::String, "Substring", Some(&Value::string("abc")), &[Value::string("x")]);
    assert_eq!(r.unwrap(), None);
}

#[test]
fn to_enum_accepts_bare_and_qualified_names_identically() {
    let bare = propfn_value::coerce::to_enum::<propfn_value::StringComparison>(&Value::string("OrdinalIgnoreCase"));
    let qualified = propfn_value::coerce::to_enum::<propfn_value::StringComparison>(&Value::string(
        "System.StringComparison.OrdinalIgnoreCase",
    ));
    assert_eq!(bare, qualified);
    assert_eq!(
        propfn_value::coerce::to_enum::<propfn_value::StringComparison>(&Value::string("5")),
        None
    );
}

#[test]
fn repeated_calls_are_idempotent() {
    let d = dispatcher();
    let args = [Value::string("My")];
    let a = d.dispatch(ReceiverType::String, "StartsWith", Some(&Value::string("MyTestString")), &args);
    let b = d.dispatch(ReceiverType::String, "StartsWith", Some(&Value::string("MyTestString")), &args);
    assert_eq!(a.unwrap(), b.unwrap());
}
