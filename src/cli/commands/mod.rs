pub mod check;
mod command_result;
pub mod dump;
pub mod helper;
pub mod init;
pub mod lookup;

pub use command_result::*;
