//! `/help`: lists the registered commands with their arguments.

use serenity::all::{
    Command, CommandInteraction, CommandOption, CommandOptionType, Context, CreateCommand,
};

use crate::{bot::command::respond, error::AppError};

pub fn definition() -> CreateCommand {
    CreateCommand::new("help").description("Get a list of commands")
}

pub async fn run(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let commands = Command::get_global_commands(&ctx.http).await?;

    let usages: Vec<CommandUsage> = commands.iter().flat_map(CommandUsage::from_command).collect();

    respond(ctx, cmd, help_text(usages), true).await
}

/// One invocable form of a command, subcommands listed separately.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CommandUsage {
    /// Command path, e.g. `keeper add`.
    path: String,
    description: String,
    /// Argument names, optional ones in brackets.
    args: Vec<String>,
}

impl CommandUsage {
    fn from_command(command: &Command) -> Vec<Self> {
        Self::expand(&command.name, &command.description, &command.options)
    }

    fn expand(path: &str, description: &str, options: &[CommandOption]) -> Vec<Self> {
        let subcommands: Vec<&CommandOption> = options
            .iter()
            .filter(|o| {
                matches!(
                    o.kind,
                    CommandOptionType::SubCommand | CommandOptionType::SubCommandGroup
                )
            })
            .collect();

        if subcommands.is_empty() {
            let args = options
                .iter()
                .map(|o| {
                    if o.required {
                        format!("<{}>", o.name)
                    } else {
                        format!("[{}]", o.name)
                    }
                })
                .collect();

            return vec![Self {
                path: path.to_string(),
                description: description.to_string(),
                args,
            }];
        }

        subcommands
            .into_iter()
            .flat_map(|sub| Self::expand(&format!("{} {}", path, sub.name), &sub.description, &sub.options))
            .collect()
    }
}

fn help_text(mut usages: Vec<CommandUsage>) -> String {
    usages.sort_by(|a, b| a.path.cmp(&b.path));

    let mut text = String::from("```md\n# Commands\n");
    for usage in &usages {
        text.push('/');
        text.push_str(&usage.path);
        for arg in &usage.args {
            text.push(' ');
            text.push_str(arg);
        }
        text.push_str(" - ");
        text.push_str(&usage.description);
        text.push('\n');
    }
    text.push_str("```");

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(path: &str, description: &str, args: &[&str]) -> CommandUsage {
        CommandUsage {
            path: path.to_string(),
            description: description.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn lists_commands_alphabetically_with_arguments() {
        let text = help_text(vec![
            usage("ping", "Replies with Pong!", &[]),
            usage("keeper add", "Add a keeper role", &["<role>"]),
            usage("register", "Register a user to the guild", &["<player>", "[user]"]),
        ]);

        assert_eq!(
            text,
            "```md\n# Commands\n\
             /keeper add <role> - Add a keeper role\n\
             /ping - Replies with Pong!\n\
             /register <player> [user] - Register a user to the guild\n\
             ```"
        );
    }
}
