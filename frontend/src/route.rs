//! Decides what to render, and what to fetch, from the page path.

use common::model::character::CharacterId;

/// Path prefix under which character pages are served.
pub const CHARACTER_PATH: &str = "/character/";

/// Top-level page selected by [`crate::app::App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Character,
}

/// What the character page should do when it first mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterRoute {
    /// No id in the path: ask the server for a fresh character.
    Generate,
    /// The path names a saved character.
    Load(CharacterId),
    /// The path has something after `/character/` but none of its segments
    /// looks like an id.
    InvalidId,
}

pub fn page_for(path: &str) -> Page {
    if path.contains(CHARACTER_PATH) || path.trim_end_matches('/').ends_with("/character") {
        Page::Character
    } else {
        Page::Landing
    }
}

/// Part of `path` the application is mounted under, without trailing slash.
/// Empty when the application is served from the site root.
pub fn app_prefix(path: &str) -> &str {
    if let Some(start) = path.find(CHARACTER_PATH) {
        return &path[..start];
    }
    let trimmed = path.trim_end_matches('/');
    trimmed.strip_suffix("/character").unwrap_or(trimmed)
}

/// Resolves a character page path.
///
/// Only paths with at least one character after `/character/` are candidates for
/// loading; the bare `/character/` generates. Candidates are searched from the
/// last segment backwards, and the first one with the id length wins.
pub fn resolve(path: &str) -> CharacterRoute {
    let has_tail = path
        .find(CHARACTER_PATH)
        .is_some_and(|start| path.len() > start + CHARACTER_PATH.len());
    if !has_tail {
        return CharacterRoute::Generate;
    }

    path.split('/')
        .rev()
        .find_map(|segment| CharacterId::parse(segment).ok())
        .map_or(CharacterRoute::InvalidId, CharacterRoute::Load)
}
