//! Redirect target for users without a profile.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use url::form_urlencoded;

use crate::net::types::ProfileStatus;

/// Build `{profile_path}?email=..&name=..` so the profile form can prefill.
///
/// Values are form-urlencoded (`@` becomes `%40`, space becomes `+`), the same
/// encoding a browser uses for `URLSearchParams`. Missing fields are sent as
/// empty strings rather than dropped.
pub fn profile_redirect_target(profile_path: &str, status: &ProfileStatus) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("email", status.email.as_deref().unwrap_or_default())
        .append_pair("name", status.name.as_deref().unwrap_or_default())
        .finish();
    let separator = if profile_path.contains('?') { '&' } else { '?' };
    format!("{profile_path}{separator}{query}")
}
