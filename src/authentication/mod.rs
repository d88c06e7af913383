mod password;

pub use password::{
    compute_password_hash, get_stored_credentials, validate_credentials, AuthError, Credentials,
};
