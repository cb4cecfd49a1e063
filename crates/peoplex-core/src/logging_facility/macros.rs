//! Operation logging macros
//!
//! An operation logs one `start` event and then one of `end` or `end_error`.
//! Each event carries `component` (the calling module), `op` and `event`,
//! followed by any extra `tracing` fields the caller passes.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event
            $(, $($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use peoplex_core::log_op_start;
/// log_op_start!("list_people");
/// log_op_start!("list_people", strategy = "naive");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::peoplex_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use peoplex_core::log_op_end;
/// log_op_end!("list_people", duration_ms = 42);
/// log_op_end!("list_people", duration_ms = 42, rows = 3, fetches = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::peoplex_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation with the error's kind and stable code
///
/// `$err` is anything convertible into `ExError`.
///
/// ```
/// # use peoplex_core::log_op_error;
/// # use peoplex_core::errors::PeopleXError;
/// let err = PeopleXError::SiteNotFound { site_id: 1 };
/// log_op_error!("fetch_site", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            $crate::peoplex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
