use anyhow::Result;
use reqwest::Client;

use crate::client::types::*;

/// HTTP client for the TIDAL backing service.
///
/// The backing service owns the authenticated TIDAL session (stored in its
/// session file after device-flow login), so this client carries no credentials
/// or token state. Every request is answered from whatever session the backing
/// service currently holds; a 401 means the user has to run the login flow.
pub struct TidalClient {
    base_url: String,
    client: Client,
}

impl TidalClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Authentication operations

    /// Trigger the device-flow login in the backing service. This blocks until
    /// the user completes (or abandons) the browser login, so it uses a long
    /// timeout.
    pub async fn login(&self) -> Result<LoginResult> {
        let url = format!("{}/api/auth/login", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(330))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error during login: {}", e);
                anyhow::anyhow!("Failed to connect to TIDAL service at {}: {}", self.base_url, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Login failed with status {}: {}", status, error_body);

            match status.as_u16() {
                401 => anyhow::bail!("TIDAL authentication failed. Please try logging in again."),
                408 => anyhow::bail!("TIDAL authentication timed out before the login was completed."),
                500..=599 => anyhow::bail!("TIDAL service error during login ({}): {}", status, error_body),
                _ => anyhow::bail!("Login failed with status {}: {}", status, error_body),
            }
        }

        let result: LoginResult = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse login response: {}", e);
            anyhow::anyhow!("Invalid response from TIDAL service: {}", e)
        })?;

        tracing::info!("TIDAL login completed: {}", result.message);
        Ok(result)
    }

    /// Check whether the backing service holds a valid TIDAL session.
    pub async fn auth_status(&self) -> Result<AuthStatus> {
        let url = format!("{}/api/auth/status", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                anyhow::anyhow!("Failed to connect to TIDAL service at {}: {}", self.base_url, e)
            })?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to check authentication status: {}", response.status());
        }

        let status = response.json().await?;
        Ok(status)
    }

    // Track and recommendation operations

    /// Fetch the user's favorite tracks, newest first. The route takes the
    /// whole limit in one request and paginates against the vendor client
    /// internally.
    pub async fn favorite_tracks(&self, limit: usize) -> Result<Vec<Track>> {
        let url = format!("{}/api/tracks?limit={}", self.base_url, limit);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                401 => anyhow::bail!("Not authenticated with TIDAL"),
                _ => anyhow::bail!("Failed to get favorite tracks: {}", status),
            }
        }

        let tracks: TracksResponse = response.json().await?;
        Ok(tracks.tracks)
    }

    /// Fetch track-radio recommendations for a single seed track.
    pub async fn track_radio(&self, track_id: &str, limit: i32) -> Result<Vec<Track>> {
        let url = format!(
            "{}/api/recommendations/track/{}?limit={}",
            self.base_url,
            urlencoding::encode(track_id),
            limit
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                401 => anyhow::bail!("Not authenticated with TIDAL"),
                404 => anyhow::bail!("Track with ID {} not found", track_id),
                _ => anyhow::bail!("Failed to get recommendations for track {}: {}", track_id, status),
            }
        }

        let recommendations: RecommendationsResponse = response.json().await?;
        Ok(recommendations.recommendations)
    }

    // Playlist operations

    pub async fn create_playlist(&self, request: CreatePlaylistRequest) -> Result<CreatePlaylistResponse> {
        let url = format!("{}/api/playlists", self.base_url);

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to create playlist: {}", response.status());
        }

        let created = response.json().await?;
        Ok(created)
    }

    /// Get the user's playlists, sorted by last update (most recent first).
    pub async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        let url = format!("{}/api/playlists", self.base_url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                401 => anyhow::bail!("Not authenticated with TIDAL"),
                _ => anyhow::bail!("Failed to get playlists: {}", status),
            }
        }

        let playlists: PlaylistsResponse = response.json().await?;
        Ok(playlists.playlists)
    }

    /// Fetch a playlist's tracks. The route takes the whole limit in one
    /// request; omitting it fetches the full playlist.
    pub async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Track>> {
        let base = format!(
            "{}/api/playlists/{}/tracks",
            self.base_url,
            urlencoding::encode(playlist_id)
        );
        let url = match limit {
            Some(limit) => format!("{}?limit={}", base, limit),
            None => base,
        };

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                401 => anyhow::bail!("Not authenticated with TIDAL"),
                404 => anyhow::bail!("Playlist with ID {} not found", playlist_id),
                _ => anyhow::bail!("Failed to get playlist tracks: {}", status),
            }
        }

        let tracks: PlaylistTracksResponse = response.json().await?;
        Ok(tracks.tracks)
    }

    pub async fn delete_playlist(&self, playlist_id: &str) -> Result<MutationAck> {
        let url = format!(
            "{}/api/playlists/{}",
            self.base_url,
            urlencoding::encode(playlist_id)
        );

        let response = self.client.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                404 => anyhow::bail!("Playlist with ID {} not found", playlist_id),
                _ => anyhow::bail!("Failed to delete playlist: {}", status),
            }
        }

        let ack = response.json().await?;
        Ok(ack)
    }

    pub async fn add_playlist_tracks(
        &self,
        playlist_id: &str,
        track_ids: Vec<String>,
    ) -> Result<MutationAck> {
        let url = format!(
            "{}/api/playlists/{}/tracks",
            self.base_url,
            urlencoding::encode(playlist_id)
        );
        let request = AddTracksRequest { track_ids };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                404 => anyhow::bail!("Playlist with ID {} not found", playlist_id),
                _ => anyhow::bail!("Failed to add tracks to playlist: {}", status),
            }
        }

        let ack = response.json().await?;
        Ok(ack)
    }

    pub async fn remove_playlist_tracks(
        &self,
        playlist_id: &str,
        request: RemoveTracksRequest,
    ) -> Result<MutationAck> {
        let url = format!(
            "{}/api/playlists/{}/tracks",
            self.base_url,
            urlencoding::encode(playlist_id)
        );

        let response = self.client.delete(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                404 => anyhow::bail!("Playlist with ID {} not found", playlist_id),
                _ => anyhow::bail!("Failed to remove tracks from playlist: {}", status),
            }
        }

        let ack = response.json().await?;
        Ok(ack)
    }

    pub async fn update_playlist(
        &self,
        playlist_id: &str,
        request: UpdatePlaylistRequest,
    ) -> Result<MutationAck> {
        let url = format!(
            "{}/api/playlists/{}",
            self.base_url,
            urlencoding::encode(playlist_id)
        );

        let response = self.client.patch(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                404 => anyhow::bail!("Playlist with ID {} not found", playlist_id),
                _ => anyhow::bail!("Failed to update playlist: {}", status),
            }
        }

        let ack = response.json().await?;
        Ok(ack)
    }

    pub async fn move_playlist_track(
        &self,
        playlist_id: &str,
        from_index: usize,
        to_index: usize,
    ) -> Result<MutationAck> {
        let url = format!(
            "{}/api/playlists/{}/tracks/move",
            self.base_url,
            urlencoding::encode(playlist_id)
        );
        let request = MoveTrackRequest { from_index, to_index };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                404 => anyhow::bail!("Playlist with ID {} not found", playlist_id),
                _ => anyhow::bail!("Failed to move track in playlist: {}", status),
            }
        }

        let ack = response.json().await?;
        Ok(ack)
    }

    // Search operations

    /// Comprehensive search across content types. `search_type` is one of
    /// `all`, `tracks`, `albums`, `artists` or `playlists`.
    pub async fn search(&self, query: &str, search_type: &str, limit: i32) -> Result<SearchResponse> {
        let url = format!(
            "{}/api/search?q={}&type={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(search_type),
            limit
        );

        tracing::debug!("Making search request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Network error during search: {}", e);
            anyhow::anyhow!("Failed to connect to TIDAL service: {}", e)
        })?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Search failed with status {}: {}", status, error_body);

            match status.as_u16() {
                400 => anyhow::bail!("Invalid search request: {}", error_body),
                401 => anyhow::bail!("Not authenticated with TIDAL"),
                500..=599 => anyhow::bail!("TIDAL service error during search ({}): {}", status, error_body),
                _ => anyhow::bail!("Search failed with status {}: {}", status, error_body),
            }
        }

        let results: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse search response: {}", e);
            anyhow::anyhow!("Invalid response format from TIDAL service: {}", e)
        })?;

        Ok(results)
    }

    /// Dedicated single-type search (`tracks`, `albums`, `artists` or
    /// `playlists` endpoint variants).
    pub async fn search_type_only(
        &self,
        kind: &str,
        query: &str,
        limit: i32,
    ) -> Result<SearchResponse> {
        let url = format!(
            "{}/api/search/{}?q={}&limit={}",
            self.base_url,
            kind,
            urlencoding::encode(query),
            limit
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                400 => anyhow::bail!("Search query is required"),
                401 => anyhow::bail!("Not authenticated with TIDAL"),
                _ => anyhow::bail!("{} search failed: {}", kind, status),
            }
        }

        let results = response.json().await?;
        Ok(results)
    }
}
