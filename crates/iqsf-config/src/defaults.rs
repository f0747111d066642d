//! Default value functions for serde deserialization.
//!
//! These functions forward to constants defined in `iqsf_core::defaults`.

use iqsf_core::defaults;

/// Generate default value functions that forward to iqsf_core::defaults constants.
macro_rules! default_fns {
    // For Copy types (integers, bool, etc.)
    ($($fn_name:ident => $const_name:ident : $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> $ty {
                defaults::$const_name
            }
        )*
    };
}

/// Generate default value functions that return String from &str constants.
macro_rules! default_string_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> String {
                defaults::$const_name.to_string()
            }
        )*
    };
}

default_fns! {
    default_max_body_bytes        => DEFAULT_MAX_BODY_BYTES: usize,
    max_body_bytes_limit          => MAX_BODY_BYTES_LIMIT: usize,
    default_shutdown_timeout_secs => DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64,
    default_cors_allow_any        => DEFAULT_CORS_ALLOW_ANY: bool,
    default_seed_sample_data      => DEFAULT_SEED_SAMPLE_DATA: bool,
}

default_string_fns! {
    default_listen => DEFAULT_LISTEN,
}
