//! # Spawn Command
//!
//! Alert the configured users about a spawn.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub const SPAWN_COMMAND: &str = "spawn";
pub const MENSAJE_OPTION: &str = "mensaje";
pub const UBICACION_OPTION: &str = "ubicacion";

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_spawn_command()]
}

fn create_spawn_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name(SPAWN_COMMAND)
        .description("Alerta a usuarios específicos sobre un spawn")
        .create_option(|option| {
            option
                .name(MENSAJE_OPTION)
                .description("Mensaje adicional sobre el spawn")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name(UBICACION_OPTION)
                .description("Ubicación del spawn")
                .kind(CommandOptionType::String)
                .required(false)
        });
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_create_spawn_command() {
        let commands = create_commands();
        assert_eq!(commands.len(), 1);

        let spawn = &commands[0];
        let name = spawn.0.get("name").unwrap().as_str().unwrap();
        assert_eq!(name, "spawn");
    }

    #[test]
    fn test_spawn_options_are_optional_strings() {
        let commands = create_commands();
        let options = commands[0].0.get("options").unwrap().as_array().unwrap();
        assert_eq!(options.len(), 2);

        let names: Vec<&str> = options
            .iter()
            .map(|opt| opt.get("name").and_then(Value::as_str).unwrap())
            .collect();
        assert_eq!(names, vec![MENSAJE_OPTION, UBICACION_OPTION]);

        for option in options {
            assert_eq!(option.get("type"), Some(&Value::from(3)));
            assert_eq!(option.get("required"), Some(&Value::Bool(false)));
        }
    }
}
