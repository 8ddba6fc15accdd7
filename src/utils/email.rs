//! Email address normalization.

/// Normalizes an email address for storage and lookup.
///
/// Surrounding whitespace is trimmed and the domain part is lowercased.
/// The local part is preserved as-is, since it is case-sensitive per RFC 5321
/// even though virtually no provider treats it that way.
///
/// # Examples
///
/// ```
/// use recipe_api::utils::email::normalize_email;
///
/// assert_eq!(normalize_email("test@PythonApp.Bla"), "test@pythonapp.bla");
/// assert_eq!(normalize_email("  Karl@Example.COM "), "Karl@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
