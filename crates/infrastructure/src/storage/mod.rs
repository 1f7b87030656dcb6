pub mod file;
pub mod redis;

pub use file::FileStore;
pub use redis::RedisStore;
