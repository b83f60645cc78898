//! Canonical logging macros
//!
//! Every operation boundary logs through these so that `op`, `event` and the
//! error classification fields are spelled the same everywhere. Paths go
//! through `$crate`, so callers only need a dependency on `statdelta-core`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use statdelta_core::log_op_start;
/// log_op_start!("summarize_users");
/// log_op_start!("summarize_user", user_id = 2040809_u64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use statdelta_core::log_op_end;
/// log_op_end!("summarize_users", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError).
/// Its kind and code are always recorded; a user id attached with
/// `with_user_id` is recorded as `user_id`.
///
/// # Example
///
/// ```
/// # use statdelta_core::{log_op_error, errors::SnapshotError};
/// let err = SnapshotError::NotAnObject;
/// log_op_error!("decode_snapshot", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            user_id = ex_err.user_id(),
            $($field)*
        );
    }};
}
