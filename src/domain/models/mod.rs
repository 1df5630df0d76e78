mod backend;
mod error;
mod mentor;
mod notice;
mod session;
mod slash_commands;

pub use backend::*;
pub use error::*;
pub use mentor::*;
pub use notice::*;
pub use session::*;
pub use slash_commands::*;
