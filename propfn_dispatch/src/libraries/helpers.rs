//! Argument-shape helpers shared by every library.
//!
//! Each library's `exec_*` function translates method name to id via its
//! `FunctionIdTable` and then matches on `(id, args.len())`; the bodies below
//! are the per-argument coercion/arity checks those match arms call into so
//! the checks read the same way across every library file.

use propfn_value::coerce;
use propfn_value::{EnumValue, Value};

/// `true` iff `args.len() == expected`. Shape checks are expressed as plain
/// `if` guards on `args.len()` inside each library's `match`, not as an
/// early-return helper, because a library typically accepts more than one
/// arity for the same method id and needs to fall through to the next arm.
#[inline]
pub fn arity_is(args: &[Value], expected: usize) -> bool {
    args.len() == expected
}

#[inline]
pub fn str_arg(args: &[Value], index: usize) -> Option<std::sync::Arc<str>> {
    args.get(index).and_then(coerce::to_string_ref)
}

#[inline]
pub fn str_opt_arg(args: &[Value], index: usize) -> Option<Option<std::sync::Arc<str>>> {
    args.get(index).and_then(coerce::to_string_opt)
}

#[inline]
pub fn int_arg(args: &[Value], index: usize) -> Option<i32> {
    args.get(index).and_then(coerce::to_int)
}

#[inline]
pub fn long_arg(args: &[Value], index: usize) -> Option<i64> {
    args.get(index).and_then(coerce::to_long)
}

#[inline]
pub fn double_arg(args: &[Value], index: usize) -> Option<f64> {
    args.get(index).and_then(coerce::to_double)
}

#[inline]
pub fn char_arg(args: &[Value], index: usize) -> Option<u16> {
    args.get(index).and_then(coerce::to_char)
}

#[inline]
pub fn bool_arg(args: &[Value], index: usize) -> Option<bool> {
    args.get(index).and_then(coerce::to_bool)
}

#[inline]
pub fn enum_arg<E: EnumValue>(args: &[Value], index: usize) -> Option<E> {
    args.get(index).and_then(coerce::to_enum::<E>)
}

#[inline]
pub fn str_array_arg(args: &[Value], index: usize) -> Option<std::sync::Arc<[std::sync::Arc<str>]>> {
    args.get(index).and_then(coerce::to_string_array)
}
