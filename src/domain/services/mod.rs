mod documents;
mod engine;
mod meet;
mod parser;
mod policy;
mod prompts;
mod sessions;

pub use documents::*;
pub use engine::*;
pub use meet::*;
pub use parser::*;
pub use policy::*;
pub use prompts::*;
pub use sessions::*;
