//! Type definitions for the TIDAL backing-service API.
//!
//! The backing service wraps the vendor TIDAL client behind a small REST
//! surface and returns already-flattened records: a track arrives with its
//! artist and album reduced to display names and a ready-made browse URL.
//! Ids cross the wire as strings and are treated as opaque by this crate.

use serde::{Deserialize, Serialize};

/// A single track as returned by the backing service.
///
/// `id` is the stable identifier used for de-duplication when merging
/// recommendation batches. `source_track_id` is set on recommendation results
/// to record which seed track produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: i64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_track_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub num_tracks: i32,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub explicit: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// A playlist summary from the user's account or from search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub track_count: i32,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub url: Option<String>,
}

/// User identity attached to an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TidalUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response from `GET /api/auth/status`.
#[derive(Debug, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<TidalUser>,
}

/// Response from `GET /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResult {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Track>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistsResponse {
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistTracksResponse {
    pub playlist_id: String,
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub total_tracks: usize,
}

/// One content-type bucket inside a search response.
#[derive(Debug, Deserialize)]
pub struct SearchBucket<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: usize,
}

impl<T> Default for SearchBucket<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Buckets present in a comprehensive search response. Absent buckets simply
/// had no matches (or were not requested for this search type).
#[derive(Debug, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub tracks: Option<SearchBucket<Track>>,
    #[serde(default)]
    pub albums: Option<SearchBucket<Album>>,
    #[serde(default)]
    pub artists: Option<SearchBucket<Artist>>,
    #[serde(default)]
    pub playlists: Option<SearchBucket<Playlist>>,
}

/// Response from the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(default)]
    pub results: SearchResults,
}

#[derive(Debug, Serialize)]
pub struct CreatePlaylistRequest {
    pub title: String,
    pub description: String,
    pub track_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistResponse {
    pub status: String,
    pub message: String,
    pub playlist: Playlist,
}

#[derive(Debug, Serialize)]
pub struct AddTracksRequest {
    pub track_ids: Vec<String>,
}

/// Remove by track ids or by playlist positions; exactly one should be set.
#[derive(Debug, Serialize)]
pub struct RemoveTracksRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct UpdatePlaylistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoveTrackRequest {
    pub from_index: usize,
    pub to_index: usize,
}

/// Generic `{status, message}` acknowledgement for mutations. Endpoints attach
/// extra fields (counts, updated values); those are carried through untouched.
#[derive(Debug, Deserialize)]
pub struct MutationAck {
    pub status: String,
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
