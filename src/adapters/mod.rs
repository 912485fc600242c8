// Adapters layer: concrete implementations for external systems (storage, loading, rendering).

pub mod loader;
pub mod storage;
pub mod surface;
