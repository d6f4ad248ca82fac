//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod supabase;


pub use traits::Repository;
pub use memory::MemoryRepository;
pub use supabase::SupabaseRepository;
