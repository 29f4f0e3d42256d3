// Core layer - configuration, recipients and alert formatting
pub mod core;

// Application layer - slash command definitions and dispatch
pub mod commands;
