pub mod security;
pub mod util;
