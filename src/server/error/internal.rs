use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A booking row carries a status outside `active`, `cancelled` and `completed`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Booking {booking_id} has unknown status '{value}'")]
    UnknownBookingStatus {
        /// ID of the booking holding the value
        booking_id: i32,
        /// The raw status string read from the store
        value: String,
    },

    /// Failure to sign a JWT for a user.
    #[error("Failed to sign token for user {user_id}: {source}")]
    TokenSigning {
        /// The user the token was issued for
        user_id: i32,
        /// The underlying signing error
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}
