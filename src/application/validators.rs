use validator::ValidateEmail;

/// Same acceptance rule the browser applies to `<input type="email" required>`:
/// the domain must be a hostname, so IP literals such as `a@[127.0.0.1]` are
/// refused even though RFC 5321 allows them.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty()
        && email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| !domain.starts_with('['))
}
