mod requests;
mod session;
mod storage;

pub use requests::*;
pub use session::*;
pub use storage::*;
