use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::client::{
    CreatePlaylistRequest, RemoveTracksRequest, TidalClient, Track, UpdatePlaylistRequest,
};
use crate::paging::{bound_limit, fan_out_collect, fetch_all_items, PageConfig, MAX_REQUEST_LIMIT};

const AUTH_ERROR_MESSAGE: &str =
    "You need to login to TIDAL first before using this feature. Please use the tidal_login tool.";

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetFavoriteTracksParams {
    /// Maximum number of tracks to retrieve.
    #[serde(default = "default_favorite_limit")]
    pub limit: i32,
}

fn default_favorite_limit() -> i32 {
    20
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RecommendTracksParams {
    /// Seed track IDs. When omitted, the user's favorite tracks are used.
    #[serde(default)]
    pub track_ids: Option<Vec<String>>,
    /// Free-form preference text, echoed back for the calling agent to apply.
    #[serde(default)]
    pub filter_criteria: Option<String>,
    #[serde(default = "default_per_track_limit")]
    pub limit_per_track: i32,
    #[serde(default = "default_per_track_limit")]
    pub limit_from_favorite: i32,
    #[serde(default = "default_true")]
    pub remove_duplicates: bool,
}

fn default_per_track_limit() -> i32 {
    20
}

fn default_true() -> bool {
    true
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreatePlaylistParams {
    pub title: String,
    pub track_ids: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetPlaylistTracksParams {
    pub playlist_id: String,
    /// Maximum number of tracks to retrieve; omit to fetch the whole playlist.
    #[serde(default)]
    pub limit: Option<i32>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DeletePlaylistParams {
    pub playlist_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AddTracksParams {
    pub playlist_id: String,
    pub track_ids: Vec<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RemoveTracksParams {
    pub playlist_id: String,
    /// Track IDs to remove (use this OR indices).
    #[serde(default)]
    pub track_ids: Option<Vec<String>>,
    /// 0-based playlist positions to remove (use this OR track_ids).
    #[serde(default)]
    pub indices: Option<Vec<usize>>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdatePlaylistParams {
    pub playlist_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ReorderTracksParams {
    pub playlist_id: String,
    /// Current position of the track (0-based).
    pub from_index: usize,
    /// New position for the track (0-based).
    pub to_index: usize,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchParams {
    pub query: String,
    /// One of "all", "tracks", "albums", "artists" or "playlists".
    #[serde(default = "default_search_type")]
    pub search_type: String,
    #[serde(default = "default_search_limit")]
    pub limit: i32,
}

fn default_search_type() -> String {
    "all".to_string()
}

fn default_search_limit() -> i32 {
    20
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TypedSearchParams {
    pub query: String,
    #[serde(default = "default_search_limit")]
    pub limit: i32,
}

#[derive(Clone)]
pub struct TidalMcpServer {
    client: Arc<TidalClient>,
    tool_router: ToolRouter<TidalMcpServer>,
}

#[tool_router]
impl TidalMcpServer {
    pub fn new(api_url: String) -> Self {
        Self {
            client: Arc::new(TidalClient::new(api_url)),
            tool_router: Self::tool_router(),
        }
    }

    pub fn client(&self) -> &TidalClient {
        &self.client
    }

    /// Fetch up to `cap` favorite tracks. The favorites route takes the whole
    /// limit in one request and ignores offsets (pagination against the
    /// vendor client happens inside the backing service), so it is declared
    /// as a single-request source. A cap of zero skips the request entirely.
    async fn fetch_favorites(&self, cap: usize) -> Vec<Track> {
        let client = Arc::clone(&self.client);
        fetch_all_items(
            |limit, _offset| {
                let client = Arc::clone(&client);
                async move { client.favorite_tracks(limit).await }
            },
            PageConfig::single_request(cap),
        )
        .await
    }

    /// Check the backing service's session before an account-touching tool
    /// runs. Returns the error result to hand back when the check fails.
    async fn require_auth(&self) -> Option<CallToolResult> {
        match self.client.auth_status().await {
            Ok(status) if status.authenticated => None,
            Ok(_) => {
                let error = json!({
                    "status": "error",
                    "message": AUTH_ERROR_MESSAGE
                });
                Some(CallToolResult::error(vec![Content::text(
                    serde_json::to_string_pretty(&error).unwrap(),
                )]))
            }
            Err(e) => {
                tracing::error!("Failed to verify TIDAL authentication: {}", e);
                let error = json!({
                    "status": "error",
                    "message": format!("Failed to verify authentication: {}", e)
                });
                Some(CallToolResult::error(vec![Content::text(
                    serde_json::to_string_pretty(&error).unwrap(),
                )]))
            }
        }
    }

    // Authentication tools
    #[tool(
        description = "Authenticate with TIDAL through the browser login flow. Opens a browser window for the user to log in to their TIDAL account."
    )]
    async fn tidal_login(&self) -> Result<CallToolResult, McpError> {
        match self.client.login().await {
            Ok(result) => {
                let response = json!({
                    "status": result.status,
                    "message": result.message,
                    "user_id": result.user_id
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&response).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "status": "error",
                    "message": format!("Authentication failed: {}", e)
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    // Track and recommendation tools
    #[tool(description = "Retrieve tracks from the user's TIDAL favorites, newest first")]
    async fn get_favorite_tracks(
        &self,
        Parameters(params): Parameters<GetFavoriteTracksParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        let cap = params.limit.max(0) as usize;
        let tracks = self.fetch_favorites(cap).await;

        let result = json!({
            "tracks": tracks,
            "total_count": tracks.len()
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }

    #[tool(
        description = "Recommend tracks based on seed track IDs, or on the user's TIDAL favorites when no IDs are given. Results are merged across seeds with duplicates removed and each recommendation tagged with its seed track."
    )]
    async fn recommend_tracks(
        &self,
        Parameters(params): Parameters<RecommendTracksParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        let limit_per_track = bound_limit(params.limit_per_track, MAX_REQUEST_LIMIT);

        // Seed either from explicit track ids or from the user's favorites.
        let mut seed_tracks_info: Vec<Track> = Vec::new();
        let seed_track_ids: Vec<String> = match params.track_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => {
                let cap = params.limit_from_favorite.max(0) as usize;
                let favorites = self.fetch_favorites(cap).await;

                if favorites.is_empty() {
                    let error = json!({
                        "status": "error",
                        "message": "No favorite tracks found in your TIDAL account to use as seeds for recommendations."
                    });
                    return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
                }

                let ids = favorites.iter().map(|t| t.id.clone()).collect();
                seed_tracks_info = favorites;
                ids
            }
        };

        let client = Arc::clone(&self.client);
        let merged = fan_out_collect(
            seed_track_ids.clone(),
            move |track_id: String| {
                let client = Arc::clone(&client);
                async move {
                    let mut items = client.track_radio(&track_id, limit_per_track).await?;
                    for item in &mut items {
                        item.source_track_id = Some(track_id.clone());
                    }
                    Ok(items)
                }
            },
            params.remove_duplicates,
            |track: &Track| track.id.clone(),
        )
        .await;

        match merged {
            Ok(recommendations) => {
                if recommendations.is_empty() {
                    let error = json!({
                        "status": "error",
                        "message": "No recommendations found for the provided tracks. Try different seed tracks."
                    });
                    return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
                }

                let result = json!({
                    "status": "success",
                    "seed_tracks": seed_tracks_info,
                    "seed_track_ids": seed_track_ids,
                    "seed_count": seed_track_ids.len(),
                    "recommendations": recommendations,
                    "total_count": recommendations.len(),
                    "filter_criteria": params.filter_criteria
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to get recommendations",
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    // Playlist management tools
    #[tool(description = "Create a new TIDAL playlist with the specified tracks")]
    async fn create_tidal_playlist(
        &self,
        Parameters(params): Parameters<CreatePlaylistParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        if params.track_ids.is_empty() {
            let error = json!({
                "error": "Missing track_ids",
                "message": "A playlist needs at least one track"
            });
            return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
        }

        let track_count = params.track_ids.len();
        let request = CreatePlaylistRequest {
            title: params.title,
            description: params.description.unwrap_or_default(),
            track_ids: params.track_ids,
        };

        match self.client.create_playlist(request).await {
            Ok(created) => {
                let result = json!({
                    "status": created.status,
                    "message": created.message,
                    "playlist": created.playlist,
                    "tracks_added": track_count,
                    "url": format!("https://tidal.com/playlist/{}", created.playlist.id)
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to create playlist",
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "Get the user's TIDAL playlists sorted by last updated date")]
    async fn get_user_playlists(&self) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        match self.client.get_playlists().await {
            Ok(playlists) => {
                let result = json!({
                    "playlists": playlists,
                    "total_count": playlists.len()
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to get playlists",
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(
        description = "Retrieve tracks from a TIDAL playlist. Fetches the whole playlist unless a limit is given."
    )]
    async fn get_playlist_tracks(
        &self,
        Parameters(params): Parameters<GetPlaylistTracksParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        let playlist_id = params.playlist_id.clone();
        let client = Arc::clone(&self.client);

        // The playlist route takes the whole limit in one request and ignores
        // offsets; omitting the limit fetches the full playlist.
        let tracks = match params.limit {
            Some(limit) => {
                let cap = limit.max(0) as usize;
                fetch_all_items(
                    |limit, _offset| {
                        let client = Arc::clone(&client);
                        let playlist_id = playlist_id.clone();
                        async move { client.playlist_tracks(&playlist_id, Some(limit)).await }
                    },
                    PageConfig::single_request(cap),
                )
                .await
            }
            None => match client.playlist_tracks(&playlist_id, None).await {
                Ok(tracks) => tracks,
                Err(e) => {
                    let error = json!({
                        "error": "Failed to get playlist tracks",
                        "playlist_id": params.playlist_id,
                        "details": e.to_string()
                    });
                    return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
                }
            },
        };

        let result = json!({
            "playlist_id": params.playlist_id,
            "tracks": tracks,
            "total_tracks": tracks.len()
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }

    #[tool(description = "Delete a TIDAL playlist by its ID")]
    async fn delete_tidal_playlist(
        &self,
        Parameters(params): Parameters<DeletePlaylistParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        match self.client.delete_playlist(&params.playlist_id).await {
            Ok(ack) => {
                let result = json!({
                    "status": ack.status,
                    "message": ack.message,
                    "playlist_id": params.playlist_id
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to delete playlist",
                    "playlist_id": params.playlist_id,
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "Add tracks to an existing TIDAL playlist")]
    async fn add_tracks_to_playlist(
        &self,
        Parameters(params): Parameters<AddTracksParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        if params.track_ids.is_empty() {
            let error = json!({
                "error": "Missing track_ids",
                "message": "Provide at least one track ID to add"
            });
            return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
        }

        let track_count = params.track_ids.len();
        match self
            .client
            .add_playlist_tracks(&params.playlist_id, params.track_ids)
            .await
        {
            Ok(ack) => {
                let result = json!({
                    "status": ack.status,
                    "message": ack.message,
                    "playlist_id": params.playlist_id,
                    "tracks_added": track_count
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to add tracks to playlist",
                    "playlist_id": params.playlist_id,
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(
        description = "Remove tracks from a TIDAL playlist by track IDs or by 0-based position indices"
    )]
    async fn remove_tracks_from_playlist(
        &self,
        Parameters(params): Parameters<RemoveTracksParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        if params.track_ids.is_none() && params.indices.is_none() {
            let error = json!({
                "error": "Missing parameters",
                "message": "Provide either 'track_ids' or 'indices'"
            });
            return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
        }

        let request = RemoveTracksRequest {
            track_ids: params.track_ids,
            indices: params.indices,
        };

        match self
            .client
            .remove_playlist_tracks(&params.playlist_id, request)
            .await
        {
            Ok(ack) => {
                let result = json!({
                    "status": ack.status,
                    "message": ack.message,
                    "playlist_id": params.playlist_id,
                    "details": ack.extra
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to remove tracks from playlist",
                    "playlist_id": params.playlist_id,
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "Update a TIDAL playlist's title and/or description")]
    async fn update_playlist_metadata(
        &self,
        Parameters(params): Parameters<UpdatePlaylistParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        if params.title.is_none() && params.description.is_none() {
            let error = json!({
                "error": "Missing parameters",
                "message": "Provide at least 'title' or 'description'"
            });
            return Ok(CallToolResult::error(vec![Content::text(error.to_string())]));
        }

        let request = UpdatePlaylistRequest {
            title: params.title.clone(),
            description: params.description.clone(),
        };

        match self.client.update_playlist(&params.playlist_id, request).await {
            Ok(ack) => {
                let result = json!({
                    "status": ack.status,
                    "message": ack.message,
                    "playlist_id": params.playlist_id,
                    "updated_fields": {
                        "title": params.title,
                        "description": params.description
                    }
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to update playlist",
                    "playlist_id": params.playlist_id,
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "Move a track within a TIDAL playlist (0-based indices)")]
    async fn reorder_playlist_tracks(
        &self,
        Parameters(params): Parameters<ReorderTracksParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        match self
            .client
            .move_playlist_track(&params.playlist_id, params.from_index, params.to_index)
            .await
        {
            Ok(ack) => {
                let result = json!({
                    "status": ack.status,
                    "message": ack.message,
                    "playlist_id": params.playlist_id,
                    "from_index": params.from_index,
                    "to_index": params.to_index
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Failed to move track in playlist",
                    "playlist_id": params.playlist_id,
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    // Search tools
    #[tool(
        description = "Search TIDAL for tracks, albums, artists or playlists with comprehensive results"
    )]
    async fn search_tidal(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        let limit = bound_limit(params.limit, MAX_REQUEST_LIMIT);

        match self
            .client
            .search(&params.query, &params.search_type, limit)
            .await
        {
            Ok(response) => {
                let mut summary = serde_json::Map::new();
                if let Some(tracks) = &response.results.tracks {
                    summary.insert("tracks".to_string(), json!(tracks.total));
                }
                if let Some(albums) = &response.results.albums {
                    summary.insert("albums".to_string(), json!(albums.total));
                }
                if let Some(artists) = &response.results.artists {
                    summary.insert("artists".to_string(), json!(artists.total));
                }
                if let Some(playlists) = &response.results.playlists {
                    summary.insert("playlists".to_string(), json!(playlists.total));
                }

                let result = json!({
                    "query": response.query,
                    "search_type": params.search_type,
                    "limit": limit,
                    "results": {
                        "tracks": response.results.tracks.map(|b| json!({"items": b.items, "total": b.total})),
                        "albums": response.results.albums.map(|b| json!({"items": b.items, "total": b.total})),
                        "artists": response.results.artists.map(|b| json!({"items": b.items, "total": b.total})),
                        "playlists": response.results.playlists.map(|b| json!({"items": b.items, "total": b.total})),
                    },
                    "summary": summary
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": "Search failed",
                    "query": params.query,
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "Search specifically for tracks on TIDAL")]
    async fn search_tracks(
        &self,
        Parameters(params): Parameters<TypedSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.typed_search("tracks", params).await
    }

    #[tool(description = "Search specifically for albums on TIDAL")]
    async fn search_albums(
        &self,
        Parameters(params): Parameters<TypedSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.typed_search("albums", params).await
    }

    #[tool(description = "Search specifically for artists on TIDAL")]
    async fn search_artists(
        &self,
        Parameters(params): Parameters<TypedSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.typed_search("artists", params).await
    }

    #[tool(description = "Search specifically for playlists on TIDAL")]
    async fn search_playlists(
        &self,
        Parameters(params): Parameters<TypedSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.typed_search("playlists", params).await
    }

    async fn typed_search(
        &self,
        kind: &str,
        params: TypedSearchParams,
    ) -> Result<CallToolResult, McpError> {
        if let Some(denied) = self.require_auth().await {
            return Ok(denied);
        }

        let limit = bound_limit(params.limit, MAX_REQUEST_LIMIT);

        match self
            .client
            .search_type_only(kind, &params.query, limit)
            .await
        {
            Ok(response) => {
                let (items, total) = match kind {
                    "tracks" => {
                        let bucket = response.results.tracks.unwrap_or_default();
                        (json!(bucket.items), bucket.total)
                    }
                    "albums" => {
                        let bucket = response.results.albums.unwrap_or_default();
                        (json!(bucket.items), bucket.total)
                    }
                    "artists" => {
                        let bucket = response.results.artists.unwrap_or_default();
                        (json!(bucket.items), bucket.total)
                    }
                    _ => {
                        let bucket = response.results.playlists.unwrap_or_default();
                        (json!(bucket.items), bucket.total)
                    }
                };

                let result = json!({
                    "query": response.query,
                    "type": kind,
                    "limit": limit,
                    "results": { kind: { "items": items, "total": total } },
                    "count": total
                });

                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).unwrap(),
                )]))
            }
            Err(e) => {
                let error = json!({
                    "error": format!("{} search failed", kind),
                    "query": params.query,
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for TidalMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server provides tools for working with a TIDAL music account: browser-based login, favorite tracks, multi-seed track recommendations, playlist management (create, list, read, update, reorder, delete) and catalog search across tracks, albums, artists and playlists. Use tidal_login first if a tool reports that authentication is required.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
