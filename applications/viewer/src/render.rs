//! Profile card rendering.
//!
//! Pure text formatting: the card shows the avatar URL, the login, and the
//! bio, falling back to placeholder text when no profile is available.

use octoview_client::Profile;

const LOGIN_PLACEHOLDER: &str = "Login Placeholder";
const BIO_PLACEHOLDER: &str = "Bio Placeholder";

/// Render the card for a fetched profile.
pub fn profile_card(profile: &Profile) -> String {
    card(&profile.login, &profile.bio, Some(&profile.avatar_url))
}

/// Render the card shown when no profile is available.
pub fn placeholder_card() -> String {
    card(LOGIN_PLACEHOLDER, BIO_PLACEHOLDER, None)
}

fn card(login: &str, bio: &str, avatar_url: Option<&str>) -> String {
    let avatar = avatar_url.unwrap_or("(none)");
    format!("avatar: {}\n\n{}\n\n{}", avatar, login, bio)
}
