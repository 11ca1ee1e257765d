// ============================================================================
// Customer Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Unknown customer type: {0}")]
    UnknownCustomerType(String),

    #[error("Customer serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("The input doesn't contain any line return, please format it correctly")]
    MissingLineBreak,

    #[error("Cannot detect the type of the input, please format it correctly")]
    UndetectedDeclaration,

    #[error("The line \"{0}\" is not valid, please format it correctly")]
    InvalidLine(String),
}
