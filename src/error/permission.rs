use thiserror::Error;

/// Permission failures for the invoking member or for the bot itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// Invoker is neither an administrator nor holds a keeper role.
    #[error("You must have the keeper role to use this command.")]
    NotKeeper,

    /// Invoker needs the Administrator permission.
    #[error("You must be a server administrator to use this command.")]
    NotAdministrator,

    /// The bot lacks the Manage Roles permission.
    #[error("I don't have permission to manage roles. Please check my permissions.")]
    MissingManageRoles,

    /// The target role sits at or above the bot's highest role.
    #[error(
        "I can't assign this role because it's higher than or equal to my highest role. \
         (My highest role position: {bot_position}, Role to assign position: {role_position})"
    )]
    RoleAboveBot {
        /// Position of the bot's highest role.
        bot_position: u16,
        /// Position of the role being assigned.
        role_position: u16,
    },
}
