//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

use super::AuthenticatedUser;

/// Login request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "login must not be empty"))]
    pub login: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Login response with bearer token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub user: UserInfo,
}

/// Public view of a user account
#[derive(Serialize, ToSchema)]
pub struct UserInfo {
    pub id: i64,
    pub login: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub is_admin: bool,
    /// Owner account associated with this user, if any
    pub owner_id: Option<i64>,
}

/// Authenticate and obtain a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (token, user) = state
        .services
        .auth
        .authenticate(&data.login, &data.password)
        .await?;

    let user_info = build_user_info(&state, user).await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        user: user_info,
    }))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<UserInfo>> {
    let user = state.services.auth.get_user(claims.user_id).await?;
    let user_info = build_user_info(&state, user).await?;
    Ok(Json(user_info))
}

async fn build_user_info(state: &crate::AppState, user: User) -> AppResult<UserInfo> {
    let owner = state.services.auth.find_owner(user.id).await?;

    Ok(UserInfo {
        id: user.id,
        login: user.login,
        firstname: user.firstname,
        lastname: user.lastname,
        is_admin: user.is_admin,
        owner_id: owner.map(|o| o.id),
    })
}
