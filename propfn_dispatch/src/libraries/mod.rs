//! One module per receiver library (C4), plus the shared argument-shape
//! helpers they're all built from.

pub mod char;
pub mod directory;
pub mod guid;
pub mod helpers;
pub mod int;
pub mod intrinsic;
pub mod math;
pub mod path;
pub mod regex;
pub mod string;
pub mod string_array;
pub mod version;
