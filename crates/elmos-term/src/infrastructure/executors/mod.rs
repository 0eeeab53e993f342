mod process;

pub use process::ProcessExecutor;
