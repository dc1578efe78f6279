//! Battle board link parsing.
//!
//! Turns a link to albionbattles.com or albionbb.com into the battle IDs it names and
//! the board and region serving them. Supported shapes:
//!
//! - `https://albionbattles.com/battles/1218601711`
//! - `https://albionbattles.com/multilog?ids=1218601711,1218599037`
//! - `https://albionbb.com/battles/1218601711`
//! - `https://albionbb.com/battles/multi?ids=1219723845,1219734327`
//!
//! The `eu.albionbattles.com` and `europe.albionbb.com` hosts accept the same paths
//! and select the European API.

use url::Url;

use crate::{
    error::battle::BattleBoardError,
    model::battle::{BattleBoard, BattleReference, Region},
};

/// Parses a battle board link.
///
/// # Arguments
/// - `input` - Link as pasted by the user, surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(BattleReference)` - Board, region and at least one battle ID
/// - `Err(BattleBoardError::InvalidUrl)` - Input is not a URL
/// - `Err(BattleBoardError::UnsupportedHost)` - Host is not a known battle board
/// - `Err(BattleBoardError::UnsupportedPath)` - Path is neither a battle nor a multi-battle page
/// - `Err(BattleBoardError::MissingIds)` - Multi-battle page without IDs
pub fn parse_board_url(input: &str) -> Result<BattleReference, BattleBoardError> {
    let url = Url::parse(input.trim())?;

    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let (board, region) = board_for_host(host)
        .ok_or_else(|| BattleBoardError::UnsupportedHost(host.to_string()))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let ids = match (board, segments.as_slice()) {
        (BattleBoard::AlbionBattles, ["multilog"]) => ids_from_query(&url)?,
        (BattleBoard::AlbionBb, ["battles", "multi"]) => ids_from_query(&url)?,
        (_, ["battles", id]) => vec![id.to_string()],
        _ => return Err(BattleBoardError::UnsupportedPath(url.path().to_string())),
    };

    Ok(BattleReference { board, region, ids })
}

/// Extracts battle IDs from a link, returning an empty list for anything unsupported.
#[cfg(test)]
pub fn battle_ids(input: &str) -> Vec<String> {
    parse_board_url(input)
        .map(|reference| reference.ids)
        .unwrap_or_default()
}

fn board_for_host(host: &str) -> Option<(BattleBoard, Region)> {
    match host {
        "albionbattles.com" => Some((BattleBoard::AlbionBattles, Region::Americas)),
        "eu.albionbattles.com" => Some((BattleBoard::AlbionBattles, Region::Europe)),
        "albionbb.com" => Some((BattleBoard::AlbionBb, Region::Americas)),
        "europe.albionbb.com" => Some((BattleBoard::AlbionBb, Region::Europe)),
        _ => None,
    }
}

/// Reads the comma separated `ids` query parameter, dropping empty segments.
fn ids_from_query(url: &Url) -> Result<Vec<String>, BattleBoardError> {
    let ids: Vec<String> = url
        .query_pairs()
        .find(|(key, _)| key == "ids")
        .map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if ids.is_empty() {
        return Err(BattleBoardError::MissingIds);
    }

    Ok(ids)
}
