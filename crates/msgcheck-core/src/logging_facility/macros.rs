//! Canonical lifecycle logging macros

/// Log the start of an operation
///
/// ```
/// # use msgcheck_core::log_op_start;
/// log_op_start!("convert_message");
/// log_op_start!("convert_message", message_type = "NewOrderSingle");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = msgcheck_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = msgcheck_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use msgcheck_core::log_op_end;
/// log_op_end!("convert_message", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = msgcheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = msgcheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation failure with its kind, code and error path
///
/// Accepts anything convertible into [`ConvertError`](crate::errors::ConvertError).
///
/// ```
/// # use msgcheck_core::{log_op_error, errors::MsgCheckError};
/// let err = MsgCheckError::BlankMessageType;
/// log_op_error!("convert_message", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ConvertError;
        let conv_err: ConvertError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = msgcheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?conv_err.kind(),
            err_code = conv_err.code(),
            err_path = %conv_err.path_string(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ConvertError;
        let conv_err: ConvertError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = msgcheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?conv_err.kind(),
            err_code = conv_err.code(),
            err_path = %conv_err.path_string(),
            $($field)*
        );
    }};
}
