mod create_user;
mod ensure_indexes;

pub use create_user::*;
pub use ensure_indexes::*;
