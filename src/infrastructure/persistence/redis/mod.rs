pub mod token_blacklist;

pub use token_blacklist::RedisTokenBlacklist;
