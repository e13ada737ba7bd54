/// User API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use roster_core::types::{CreateUser, UpdateUser, User, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: UserId,
}

/// Acknowledgment returned by mutating endpoints
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub status_code: u16,
    pub transaction: String,
    /// The stored user, present only on create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl TransactionResponse {
    fn new(status: StatusCode, transaction: &str) -> Self {
        Self {
            status_code: status.as_u16(),
            transaction: transaction.to_string(),
            user: None,
        }
    }
}

/// GET /user/
/// List every user
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let mut uow = app_state.db.begin().await?;
    let users = uow.list_users().await?;
    Ok(Json(users))
}

/// GET /user/:user_id
pub async fn get_user(
    Path(user_id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let mut uow = app_state.db.begin().await?;
    let user = uow.get_user(user_id).await?;
    Ok(Json(user))
}

/// POST /user/create
/// Create a user; its slug is derived from the username
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> Result<(StatusCode, Json<TransactionResponse>)> {
    if req.slug().is_empty() {
        return Err(ServerError::BadRequest(
            "username must contain at least one letter or digit".to_string(),
        ));
    }

    let mut uow = app_state.db.begin().await?;
    let user = uow.create_user(req).await?;
    uow.commit().await?;

    tracing::info!(user_id = user.id, slug = %user.slug, "Created user");

    let mut response = TransactionResponse::new(StatusCode::CREATED, "Successful");
    response.user = Some(user);
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /user/update?user_id=
/// Replace a user's firstname, lastname and age
pub async fn update_user(
    Query(query): Query<UserIdQuery>,
    State(app_state): State<AppState>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<TransactionResponse>> {
    let mut uow = app_state.db.begin().await?;
    uow.get_user(query.user_id).await?;

    uow.update_user(query.user_id, req).await?;
    uow.commit().await?;

    tracing::info!(user_id = query.user_id, "Updated user");

    Ok(Json(TransactionResponse::new(
        StatusCode::OK,
        "User update is successful!",
    )))
}

/// DELETE /user/delete?user_id=
pub async fn delete_user(
    Query(query): Query<UserIdQuery>,
    State(app_state): State<AppState>,
) -> Result<Json<TransactionResponse>> {
    let mut uow = app_state.db.begin().await?;
    uow.get_user(query.user_id).await?;

    uow.delete_user(query.user_id).await?;
    uow.commit().await?;

    tracing::info!(user_id = query.user_id, "Deleted user");

    Ok(Json(TransactionResponse::new(
        StatusCode::OK,
        "User deletion is successful!",
    )))
}
