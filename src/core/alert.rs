//! # Alert Formatting
//!
//! Spawn alert message composition.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

/// Bold banner opening every alert
pub const BANNER: &str = "🚨 **¡Spawn detectado! Mantengan la distancia** 🚨";

/// Render a user mention token
pub fn mention(user_id: &str) -> String {
    format!("<@{user_id}>")
}

/// Mention every recipient, space separated, in configured order
pub fn mention_list(recipients: &[String]) -> String {
    recipients
        .iter()
        .map(|id| mention(id))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compose the alert text
///
/// Banner, blank line, mentions; then the location and information blocks
/// when their values are non-empty, in that order.
pub fn compose_alert(recipients: &[String], mensaje: &str, ubicacion: &str) -> String {
    let mut text = format!("{BANNER}\n\n{}", mention_list(recipients));

    if !ubicacion.is_empty() {
        text.push_str(&format!("\n\n📍 **Ubicación:** {ubicacion}"));
    }

    if !mensaje.is_empty() {
        text.push_str(&format!("\n\n💬 **Información:** {mensaje}"));
    }

    text
}
