//! Error macros for navroute

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}

/// Macro for returning invalid configuration errors
#[macro_export]
macro_rules! bail_config {
    ($reason:expr) => {
        return Err($crate::error::RouteError::invalid_config($reason))
    };
}
