pub mod package;

/// Command handlers return their output plus the exit code for success paths.
pub type CmdResult<T> = extpack::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}
