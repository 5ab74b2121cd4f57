pub mod environment;
pub mod load;
pub mod posts;

pub use environment::{EnvAccessor, EnvSource, EnvironmentSnapshot, ProcessEnv, StaticEnv};
pub use posts::{Post, PostStore};
