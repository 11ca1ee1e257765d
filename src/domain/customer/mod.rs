// ============================================================================
// Customer Domain - Customer Record
// ============================================================================
//
// - Value objects (Address, CustomerType)
// - Errors (CustomerError enum)
// - Model (Customer record and its display name)
// - TypeScript declarations for the record's JSON shape
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod model;
pub mod typescript;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use model::*;
