#![allow(unused_macros)]

#[macro_use]
mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "log")] {
            macro_rules! trace_storage {
                ($($arg:tt)+) => {
                    log::trace!(target: "coppice::heap", $($arg)+)
                };
            }

            macro_rules! debug_storage {
                ($($arg:tt)+) => {
                    log::debug!(target: "coppice::heap", $($arg)+)
                };
            }
        } else {
            // Arguments are still type-checked so both configurations agree.
            macro_rules! trace_storage {
                ($($arg:tt)+) => {{
                    let _ = format_args!($($arg)+);
                }};
            }

            macro_rules! debug_storage {
                ($($arg:tt)+) => {{
                    let _ = format_args!($($arg)+);
                }};
            }
        }
    }
}
