pub mod password;
pub mod token;
pub mod validation;

pub use password::PasswordHasher;
pub use token::{decode_token, encode_token};
pub use validation::Validator;
