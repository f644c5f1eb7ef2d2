pub mod arena;

pub use arena::ArenaClient;
