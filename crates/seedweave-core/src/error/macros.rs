//! Error macros for seedweave

/// Macro for returning an invalid argument error
#[macro_export]
macro_rules! bail_invalid {
    ($msg:expr) => {
        return Err($crate::error::SeedweaveError::invalid_argument($msg))
    };
}

