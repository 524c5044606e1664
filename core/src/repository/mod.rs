pub mod memory;
pub mod traits;

// Re-export
pub use memory::MemoryTaskRepository;
pub use traits::TaskRepository;
