//! Route handlers
//!
//! Each handler validates the path identifier before touching storage, calls
//! the repositories and converts every failure into an [`ApiError`].

use super::AppState;
use super::error::{ApiError, json_body};
use crate::core::{Comment, CommentInput, NewComment, NewTicket, Ticket, TicketId, TicketUpdate};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A ticket together with its comment thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub comments: Vec<Comment>,
}

fn parse_ticket_id(raw: &str, context: &str) -> Result<TicketId, ApiError> {
    TicketId::parse_str(raw).map_err(|e| ApiError::from_error(&e, context))
}

/// Load a ticket, turning a missing one into 404
async fn find_ticket(state: &AppState, id: &TicketId, context: &str) -> Result<Ticket, ApiError> {
    state
        .tickets
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_error(&e, context))?
        .ok_or_else(ApiError::not_found)
}

/// `POST /api/tickets`
pub async fn create_ticket(
    State(state): State<AppState>,
    payload: Result<Json<NewTicket>, JsonRejection>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    const CONTEXT: &str = "Error creating ticket";

    let new_ticket = json_body(payload)?.map_err(|e| ApiError::from_error(&e, CONTEXT))?;
    let ticket = state
        .tickets
        .create(new_ticket)
        .await
        .map_err(|e| ApiError::from_error(&e, CONTEXT))?;

    info!(ticket_id = %ticket.id, priority = %ticket.priority, "Ticket created");
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// `GET /api/tickets`
pub async fn list_tickets(State(state): State<AppState>) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = state
        .tickets
        .list_all()
        .await
        .map_err(|e| ApiError::from_error(&e, "Error fetching tickets"))?;

    debug!(count = tickets.len(), "Listed tickets");
    Ok(Json(tickets))
}

/// `GET /api/tickets/:id`
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TicketDetail>, ApiError> {
    const CONTEXT: &str = "Server error";

    let id = parse_ticket_id(&id, CONTEXT)?;
    let ticket = find_ticket(&state, &id, CONTEXT).await?;
    let comments = state
        .comments
        .list_by_ticket(&id)
        .await
        .map_err(|e| ApiError::from_error(&e, CONTEXT))?;

    Ok(Json(TicketDetail { ticket, comments }))
}

/// `PUT /api/tickets/:id`
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TicketUpdate>, JsonRejection>,
) -> Result<Json<Ticket>, ApiError> {
    const CONTEXT: &str = "Error updating ticket";

    let id = parse_ticket_id(&id, CONTEXT)?;
    let update = match json_body(payload)? {
        Ok(update) => update,
        Err(e) => {
            // A missing ticket is reported ahead of a mistyped body
            find_ticket(&state, &id, CONTEXT).await?;
            return Err(ApiError::from_error(&e, CONTEXT));
        },
    };
    let ticket = state
        .tickets
        .update_by_id(&id, update)
        .await
        .map_err(|e| ApiError::from_error(&e, CONTEXT))?
        .ok_or_else(ApiError::not_found)?;

    info!(ticket = %ticket.id.short(), "Ticket updated");
    Ok(Json(ticket))
}

/// `POST /api/tickets/:id/comments`
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CommentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    const CONTEXT: &str = "Error adding comment";

    let id = parse_ticket_id(&id, CONTEXT)?;
    let input = json_body(payload)?;
    find_ticket(&state, &id, CONTEXT).await?;
    let input = input.map_err(|e| ApiError::from_error(&e, CONTEXT))?;

    let comment = state
        .comments
        .create(NewComment::new(id, input))
        .await
        .map_err(|e| ApiError::from_error(&e, CONTEXT))?;

    info!(ticket = %id.short(), comment = %comment.id.short(), "Comment added");
    Ok((StatusCode::CREATED, Json(comment)))
}
