/***************************************/
/*               Macros                */
/***************************************/
/// Unwraps a `Result` or logs the error and exits. Only meant for startup
/// code paths where there is nothing sensible to do but terminate.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    };
}
