pub mod postgres_repository;
pub mod redis_repository;

pub use postgres_repository::PostgresRepository;
pub use redis_repository::RedisRepository;
