//! Validation helpers shared by the upper layers

use super::types::{Error, Result};

/// Fail with `InvalidParameter` unless `condition` holds
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}
