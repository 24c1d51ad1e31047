//! Text printed by the tools

use lh_auth::{AdminLookup, AdminUser};
use lh_i18n::{translation_args, TranslationService};
use tracing::debug;

const RULE: &str = "============================================================";

/// Report for `generate-password-hash`, including the SQL to apply the hash
pub fn render_generated(password: &str, hash: &str, admin_email: &str) -> String {
    format!(
        "\n{RULE}\nPassword: {password}\nHash: {hash}\n{RULE}\n\nSQL Command:\n\
         UPDATE users SET password = '{hash}' WHERE email = '{}';\n{RULE}\n",
        sql_quote(admin_email)
    )
}

/// Report for a successful reset
pub fn render_reset(user: &AdminUser, new_password: &str) -> String {
    format!(
        "Password reset successfully!\nEmail: {}\nUsername: {}\nNew password: {new_password}\n\n\
         Remember to change this password after logging in!\n",
        user.email.as_deref().unwrap_or("(none)"),
        user.username.as_deref().unwrap_or("(none)"),
    )
}

/// Report for a reset that found no admin account
pub fn render_not_found(lookup: &AdminLookup) -> String {
    format!(
        "Admin user not found!\nLooking for user with email '{}' or username '{}'\n",
        lookup.email, lookup.username
    )
}

/// Message for a rejected new password, translated when catalogs are available
pub fn password_too_short(i18n: &TranslationService, lang: &str, min_length: usize) -> String {
    let key = "validation.min_length";
    match i18n.translate(key, lang, &translation_args!["min" => min_length]) {
        Ok(message) if message != key => message,
        Ok(_) => format!("Password must be at least {min_length} characters long"),
        Err(err) => {
            debug!("Using built-in message: {}", err);
            format!("Password must be at least {min_length} characters long")
        }
    }
}

fn sql_quote(value: &str) -> String {
    value.replace('\'', "''")
}
