//! Local checks run before a request leaves the process.
//!
//! The bulk wallet endpoints reject address sets above a fixed size. Checking
//! the size here lets the client fail fast without a round trip.

/// Maximum number of addresses accepted by the bulk wallet endpoints.
pub const MAX_ADDRESSES: usize = 10_000;

/// Error indicating an address list exceeds [`MAX_ADDRESSES`].
///
/// # Example
///
/// ```rust
/// use siacentral::http::TooManyAddressesError;
///
/// let err = TooManyAddressesError { got: 10_001, max_allowed: 10_000 };
/// assert_eq!(err.to_string(), "maximum of 10000 addresses, got 10001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooManyAddressesError {
    /// Number of addresses supplied.
    pub got: usize,

    /// Largest accepted number of addresses.
    pub max_allowed: usize,
}

impl std::fmt::Display for TooManyAddressesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "maximum of {} addresses, got {}", self.max_allowed, self.got)
    }
}

impl std::error::Error for TooManyAddressesError {}

/// Validates that an address list fits within [`MAX_ADDRESSES`].
///
/// # Errors
///
/// Returns [`TooManyAddressesError`] when `addresses` holds more than
/// [`MAX_ADDRESSES`] entries. Exactly [`MAX_ADDRESSES`] is accepted.
pub fn check_address_count<S: AsRef<str>>(addresses: &[S]) -> Result<(), TooManyAddressesError> {
    if addresses.len() > MAX_ADDRESSES {
        Err(TooManyAddressesError {
            got: addresses.len(),
            max_allowed: MAX_ADDRESSES,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_count_boundary() {
        let at_limit = vec!["addr".to_string(); MAX_ADDRESSES];
        assert!(check_address_count(&at_limit).is_ok());

        let over = vec!["addr".to_string(); MAX_ADDRESSES + 1];
        let err = check_address_count(&over).unwrap_err();
        assert_eq!(err.got, MAX_ADDRESSES + 1);
        assert_eq!(err.max_allowed, MAX_ADDRESSES);
    }

    #[test]
    fn test_empty_list_is_accepted() {
        let empty: [&str; 0] = [];
        assert!(check_address_count(&empty).is_ok());
    }
}
