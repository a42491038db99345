mod jwt_token_service;
mod salted_hasher;

pub use jwt_token_service::JwtTokenService;
pub use salted_hasher::SaltedSha256Hasher;
