/**********************************************
  > File Name		: macros.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 14 May 2021 10:34:16 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Return RecordError::InvalidArgument with a formatted message
 * when the condition does not hold.
 */
#[macro_export]
macro_rules! check_arg {
    ($cond: expr, $($fmt: tt)+) => {
        if !$cond {
            let msg = format!($($fmt)+);
            log::warn!("rejected argument: {}", msg);
            return Err($crate::errors::RecordError::InvalidArgument(msg));
        }
    };
}

/*
 * Unwrap a Result while decoding the data file, any error
 * turns into CodecError::CorruptFormat at the given line.
 */
#[macro_export]
macro_rules! ok_or_corrupt {
    ($func: expr, $line: expr, $reason: expr) => {{
        match $func {
            Ok(v) => v,
            Err(e) => {
                log::debug!("line {}: {:?}", $line, e);
                return Err($crate::errors::CodecError::corrupt($line, format!("{}: {}", $reason, e)));
            }
        }
    }};
}
