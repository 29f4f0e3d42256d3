//! Platform-independent view of a slash command invocation
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;

/// One user-triggered command invocation, consumed once by its handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub command_name: String,
    /// Invoking user as `name#discriminator`
    pub user_tag: String,
    options: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(command_name: impl Into<String>, user_tag: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            user_tag: user_tag.into(),
            options: Vec::new(),
        }
    }

    /// Attach a string option value
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((name.into(), value.into()));
        self
    }

    /// Capture the command name, invoking user and string options of an interaction
    pub fn from_command(command: &ApplicationCommandInteraction) -> Self {
        let mut invocation = Self::new(command.data.name.clone(), command.user.tag());
        for option in &command.data.options {
            if let Some(value) = option.value.as_ref().and_then(|val| val.as_str()) {
                invocation = invocation.with_option(option.name.clone(), value);
            }
        }
        invocation
    }

    /// Value of a string option, `None` when the user left it out
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(option, _)| option == name)
            .map(|(_, value)| value.as_str())
    }
}
