//! Input validation shared by applications, admin edits and owner edits.

use url::Url;

use crate::server::{error::AppError, util::invite::parse_invite_code};

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 2000;
const MAX_TAGS: usize = 10;
const MAX_TAG_LEN: usize = 32;

/// Trims a listing name and checks it is 1 to 100 characters long.
pub fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name.to_string())
}

/// Trims a description and checks it is at most 2000 characters long.
pub fn validate_description(description: &str) -> Result<String, AppError> {
    let description = description.trim();
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::BadRequest(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(description.to_string())
}

/// Checks the link is a Discord invite and returns it trimmed.
pub fn validate_invite_link(link: &str) -> Result<String, AppError> {
    let link = link.trim();
    if parse_invite_code(link).is_none() {
        return Err(AppError::BadRequest(
            "Invite link must be a Discord invite such as https://discord.gg/code".to_string(),
        ));
    }
    Ok(link.to_string())
}

/// Checks an optional logo is an http(s) URL; blank values clear the logo.
pub fn validate_logo_url(logo_url: Option<String>) -> Result<Option<String>, AppError> {
    let Some(logo_url) = logo_url else {
        return Ok(None);
    };
    let logo_url = logo_url.trim();
    if logo_url.is_empty() {
        return Ok(None);
    }

    let valid = Url::parse(logo_url)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !valid {
        return Err(AppError::BadRequest(
            "Logo must be an http or https URL".to_string(),
        ));
    }

    Ok(Some(logo_url.to_string()))
}

pub fn validate_member_count(member_count: i32) -> Result<i32, AppError> {
    if member_count < 0 {
        return Err(AppError::BadRequest(
            "Member count cannot be negative".to_string(),
        ));
    }
    Ok(member_count)
}

/// Trims tags, drops blanks and case-insensitive duplicates, keeping first-seen order.
///
/// Tags are stored comma-separated, so a comma inside a tag is rejected.
pub fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut normalized: Vec<String> = Vec::new();

    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if tag.contains(',') {
            return Err(AppError::BadRequest(
                "Tags cannot contain commas".to_string(),
            ));
        }
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(AppError::BadRequest(format!(
                "Tags must be at most {} characters",
                MAX_TAG_LEN
            )));
        }
        if normalized.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            continue;
        }
        normalized.push(tag.to_string());
    }

    if normalized.len() > MAX_TAGS {
        return Err(AppError::BadRequest(format!(
            "At most {} tags are allowed",
            MAX_TAGS
        )));
    }

    Ok(normalized)
}
