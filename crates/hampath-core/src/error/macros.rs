//! Error macros for hampath

/// Macro for returning an invalid matrix error
#[macro_export]
macro_rules! bail_matrix {
    ($($arg:tt)*) => {
        return Err($crate::error::HamPathError::invalid_matrix(format!($($arg)*)))
    };
}

/// Macro for returning an invalid path error
#[macro_export]
macro_rules! bail_path {
    ($($arg:tt)*) => {
        return Err($crate::error::HamPathError::invalid_path(format!($($arg)*)))
    };
}
