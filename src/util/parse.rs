use serenity::all::{RoleId, UserId};

use crate::error::{internal::InternalError, AppError};

/// Converts a stored role ID into a `RoleId`
///
/// `RoleId::new` panics on zero, which a corrupt row could hold.
///
/// # Returns
/// - `Ok(RoleId)` - Non-zero ID
/// - `Err(AppError::InternalErr(ZeroId))` - The ID was zero
pub fn role_id(id: u64) -> Result<RoleId, AppError> {
    if id == 0 {
        return Err(InternalError::ZeroId { kind: "role" }.into());
    }

    Ok(RoleId::new(id))
}

/// Converts a stored user ID into a `UserId`, see [`role_id`].
pub fn user_id(id: u64) -> Result<UserId, AppError> {
    if id == 0 {
        return Err(InternalError::ZeroId { kind: "user" }.into());
    }

    Ok(UserId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_snowflakes() {
        assert_eq!(role_id(151003631204696064).unwrap().get(), 151003631204696064);
        assert_eq!(user_id(42).unwrap().get(), 42);
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            role_id(0),
            Err(AppError::InternalErr(InternalError::ZeroId { kind: "role" }))
        ));
        assert!(matches!(
            user_id(0),
            Err(AppError::InternalErr(InternalError::ZeroId { kind: "user" }))
        ));
    }
}
