use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use service::greeting::Greeting;
use tracing::{info, warn};

use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GreetingQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Body of POST and PUT; `name` may be absent, null or empty.
/// Numbers and booleans are taken as their text (`{"name": 5}` greets "5").
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NameInput {
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Objects and arrays are still rejected.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|v| match v {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageOutput {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedOutput {
    pub message: String,
    pub id: i64,
    pub content: String,
}

#[utoipa::path(
    get, path = "/api/greetings", tag = "greetings",
    params(GreetingQuery),
    responses((status = 200, description = "Formatted greeting", body = crate::openapi::MessageDoc))
)]
pub async fn get_greeting(State(state): State<ServerState>, Query(q): Query<GreetingQuery>) -> Json<MessageOutput> {
    let message = state.greetings.format_greeting(q.first_name.as_deref(), q.last_name.as_deref());
    Json(MessageOutput { message })
}

#[utoipa::path(
    post, path = "/api/greetings", tag = "greetings",
    request_body = crate::openapi::NameInputDoc,
    responses(
        (status = 201, description = "Greeting created and saved", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn create_greeting(
    State(state): State<ServerState>,
    Json(input): Json<NameInput>,
) -> Result<(StatusCode, Json<CreatedOutput>), JsonApiError> {
    let saved = state.greetings.create_and_store(input.name.as_deref()).await?;
    info!(id = saved.id, "created greeting");
    Ok((
        StatusCode::CREATED,
        Json(CreatedOutput {
            message: "Greeting created and saved".to_string(),
            id: saved.id,
            content: saved.message,
        }),
    ))
}

#[utoipa::path(
    get, path = "/api/greetings/{id}", tag = "greetings",
    params(("id" = i64, Path, description = "Greeting ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::GreetingDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn get_greeting_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Response, JsonApiError> {
    match state.greetings.fetch_by_id(id).await? {
        Some(g) => Ok(Json(g).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

#[utoipa::path(
    get, path = "/api/greetings/all", tag = "greetings",
    responses(
        (status = 200, description = "Every stored greeting", body = [crate::openapi::GreetingDoc]),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn list_greetings(State(state): State<ServerState>) -> Result<Json<Vec<Greeting>>, JsonApiError> {
    let list = state.greetings.fetch_all().await?;
    info!(count = list.len(), "list greetings");
    Ok(Json(list))
}

/// Placeholder: reports the message the greeting would get but leaves the store untouched.
#[utoipa::path(
    put, path = "/api/greetings/{id}", tag = "greetings",
    params(("id" = i64, Path, description = "Greeting ID")),
    request_body = crate::openapi::NameInputDoc,
    responses((status = 200, description = "Placeholder update message", body = crate::openapi::MessageDoc))
)]
pub async fn update_greeting(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<NameInput>,
) -> Json<MessageOutput> {
    let message = state.greetings.compose_named(input.name.as_deref());
    warn!(id, "update is a placeholder; greeting not modified");
    Json(MessageOutput {
        message: format!("Greeting ID {id} updated to: {message} (update logic placeholder)"),
    })
}

/// Placeholder: answers 204 without removing anything.
#[utoipa::path(
    delete, path = "/api/greetings/{id}", tag = "greetings",
    params(("id" = i64, Path, description = "Greeting ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_greeting(Path(id): Path<i64>) -> StatusCode {
    warn!(id, "delete is a placeholder; greeting not removed");
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(body: &str) -> Result<Option<String>, serde_json::Error> {
        serde_json::from_str::<NameInput>(body).map(|i| i.name)
    }

    #[test]
    fn name_accepts_text_null_and_absent() {
        assert_eq!(name_of(r#"{"name":"Sam"}"#).unwrap().as_deref(), Some("Sam"));
        assert_eq!(name_of(r#"{"name":null}"#).unwrap(), None);
        assert_eq!(name_of("{}").unwrap(), None);
    }

    #[test]
    fn scalar_names_become_text() {
        assert_eq!(name_of(r#"{"name":5}"#).unwrap().as_deref(), Some("5"));
        assert_eq!(name_of(r#"{"name":1.5}"#).unwrap().as_deref(), Some("1.5"));
        assert_eq!(name_of(r#"{"name":true}"#).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn structured_names_are_rejected() {
        assert!(name_of(r#"{"name":[1]}"#).is_err());
        assert!(name_of(r#"{"name":{"first":"Sam"}}"#).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        assert_eq!(name_of(r#"{"name":"Sam","title":"Dr"}"#).unwrap().as_deref(), Some("Sam"));
    }
}
