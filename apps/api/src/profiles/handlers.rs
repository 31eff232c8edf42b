use std::path::PathBuf;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::profiles::loader::load_profiles;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub count: usize,
    pub profiles: Vec<CandidateProfile>,
}

/// GET /api/v1/profiles
///
/// Rescans the profile directory on every call; filesystem reads run on the blocking pool.
pub async fn handle_list_profiles(
    State(state): State<AppState>,
) -> Result<Json<ProfileListResponse>, AppError> {
    let dir = PathBuf::from(&state.config.profiles_dir);
    let profiles = tokio::task::spawn_blocking(move || load_profiles(&dir))
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(ProfileListResponse {
        count: profiles.len(),
        profiles,
    }))
}
