//! Variable inspection macros.
//!
//! `debug_value!(x)` prints `x @ 0x7ffd... (i32) = 5`: the expression, its
//! address, its type and its `Debug` value. `debug_novalue!` drops the value
//! and `debug_basic!` drops the address too. Every macro has a `*_string`
//! form that returns the line instead of printing it.

/// Local time at which this crate was built, as `"14:03:09 on Oct  7 2026"`.
///
/// The day is space-padded, so the string is always 23 bytes long.
pub const COMPILE_TIME: &str = env!("TESTKIT_COMPILE_TIME");

/// `"file:line"` of the invocation, as a `&'static str`.
#[macro_export]
macro_rules! location {
    () => {
        concat!(file!(), ":", line!())
    };
}

#[macro_export]
macro_rules! debug_value_string {
    ($value:expr) => {{
        let value = &$value;
        format!(
            "{} @ {:p} ({}) = {:?}",
            stringify!($value),
            value,
            $crate::debug::type_name_of(value),
            value
        )
    }};
}

#[macro_export]
macro_rules! debug_novalue_string {
    ($value:expr) => {{
        let value = &$value;
        format!(
            "{} @ {:p} ({})",
            stringify!($value),
            value,
            $crate::debug::type_name_of(value)
        )
    }};
}

#[macro_export]
macro_rules! debug_basic_string {
    ($value:expr) => {
        format!(
            "{} ({})",
            stringify!($value),
            $crate::debug::type_name_of(&$value)
        )
    };
}

#[macro_export]
macro_rules! debug_value {
    ($value:expr) => {
        println!("{}", $crate::debug_value_string!($value))
    };
}

#[macro_export]
macro_rules! debug_novalue {
    ($value:expr) => {
        println!("{}", $crate::debug_novalue_string!($value))
    };
}

#[macro_export]
macro_rules! debug_basic {
    ($value:expr) => {
        println!("{}", $crate::debug_basic_string!($value))
    };
}

/// Name of the type behind a reference.
#[must_use]
pub fn type_name_of<T: ?Sized>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}
