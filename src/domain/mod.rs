// ============================================================================
// Domain Layer
// ============================================================================
//
// Plain data records. Persistence and version management belong to the
// callers that store these records.
//
// ============================================================================

pub mod customer;
