//! Discord invite link parsing.

use url::Url;

/// Hosts that serve Discord invites, paired with the path prefix before the code.
const INVITE_HOSTS: &[(&str, &str)] = &[
    ("discord.gg", ""),
    ("www.discord.gg", ""),
    ("discord.com", "invite/"),
    ("www.discord.com", "invite/"),
    ("discordapp.com", "invite/"),
    ("www.discordapp.com", "invite/"),
];

/// Extracts the invite code from a Discord invite link.
///
/// Accepts links with or without a scheme, e.g. `https://discord.gg/abc`,
/// `discord.gg/abc` or `https://discord.com/invite/abc`.
///
/// # Returns
/// - `Some(code)` - The invite code
/// - `None` - Not a Discord invite link or the code contains invalid characters
pub fn parse_invite_code(link: &str) -> Option<String> {
    let link = link.trim();
    let url = if link.contains("://") {
        Url::parse(link).ok()?
    } else {
        Url::parse(&format!("https://{}", link)).ok()?
    };

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let (_, prefix) = INVITE_HOSTS.iter().find(|(h, _)| *h == host)?;

    let path = url.path().trim_start_matches('/');
    let code = path.strip_prefix(prefix)?.trim_end_matches('/');

    let valid = !code.is_empty()
        && code.len() <= 32
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    valid.then(|| code.to_string())
}
