//! Macros recording checks into a [`TestSession`](crate::TestSession).
//!
//! Each macro evaluates to `Result<bool, TestkitError>`: whether the check
//! passed, or the error from writing its output line.

/// Checks that a boolean expression holds.
///
/// ```
/// # use testkit::{check, TestSession};
/// let mut session = TestSession::new(Vec::new());
/// assert!(check!(session, 2 + 2 == 4).unwrap());
/// ```
#[macro_export]
macro_rules! check {
    ($session:expr, $cond:expr $(,)?) => {{
        let passed: bool = $cond;
        $session.record($crate::Check::new($crate::location!(), None, passed, || {
            format!("where {} ({}) was FALSE", stringify!($cond), passed)
        }))
    }};
}

/// Like [`check!`], with a name shown in the output and the failure list.
#[macro_export]
macro_rules! check_named {
    ($session:expr, $name:expr, $cond:expr $(,)?) => {{
        let passed: bool = $cond;
        $session.record($crate::Check::new(
            $crate::location!(),
            Some(::std::string::ToString::to_string(&$name)),
            passed,
            || format!("where {} ({}) was FALSE", stringify!($cond), passed),
        ))
    }};
}

/// Checks two expressions for equality, printing both values on failure.
#[macro_export]
macro_rules! check_eq {
    ($session:expr, $left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                let passed = *left == *right;
                $session.record($crate::Check::new($crate::location!(), None, passed, || {
                    format!(
                        "comparing {} ({:?}) to {} ({:?})",
                        stringify!($left),
                        left,
                        stringify!($right),
                        right
                    )
                }))
            }
        }
    };
}

/// Like [`check_eq!`], with a name.
#[macro_export]
macro_rules! check_named_eq {
    ($session:expr, $name:expr, $left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                let passed = *left == *right;
                $session.record($crate::Check::new(
                    $crate::location!(),
                    Some(::std::string::ToString::to_string(&$name)),
                    passed,
                    || {
                        format!(
                            "comparing {} ({:?}) to {} ({:?})",
                            stringify!($left),
                            left,
                            stringify!($right),
                            right
                        )
                    },
                ))
            }
        }
    };
}

/// Checks that two numbers differ by at most `epsilon`.
///
/// All three operands are converted with `as f64`.
#[macro_export]
macro_rules! check_epsilon_eq {
    ($session:expr, $left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let (left, right, epsilon) = (($left) as f64, ($right) as f64, ($epsilon) as f64);
        let passed = (left - right).abs() <= epsilon;
        $session.record($crate::Check::new($crate::location!(), None, passed, || {
            format!(
                "comparing {} ({}) to {} ({}) with epsilon {}",
                stringify!($left),
                left,
                stringify!($right),
                right,
                epsilon
            )
        }))
    }};
}
