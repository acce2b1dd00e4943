// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use booking_form::common::safe_email_log;
/// let masked = safe_email_log("user@example.com");
/// assert_eq!(masked, "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            let first = parts[0].chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Renders a field value for log output.
/// Contact details are masked; other fields are logged as typed.
pub fn safe_field_log(field_name: &str, value: &str) -> String {
    match field_name {
        "email" => safe_email_log(value),
        "phone" | "fullName" => {
            let count = value.chars().count();
            if count > 2 {
                let last: String = value.chars().skip(count - 2).collect();
                format!("***{}", last)
            } else {
                "***".to_string()
            }
        }
        _ => value.to_string(),
    }
}
