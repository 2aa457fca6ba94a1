pub mod hmac_sha512;

pub use hmac_sha512::PasswordHasher;
