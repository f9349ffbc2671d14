//! JSON REST handlers for people.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use roster_app::ports::PersonRepository;
use roster_domain::error::RosterError;
use roster_domain::id::PersonId;
use roster_domain::person::Person;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and search endpoints.
///
/// A missing record is a success without content, not a `404`.
pub enum GetResponse {
    Ok(Json<Person>),
    NoContent,
}

impl From<Option<Person>> for GetResponse {
    fn from(value: Option<Person>) -> Self {
        value.map_or(Self::NoContent, |person| Self::Ok(Json(person)))
    }
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(PersonId),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(id) => (
                StatusCode::CREATED,
                [(header::LOCATION, format!("/people/{id}"))],
            )
                .into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Person>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the count endpoint.
pub enum CountResponse {
    Ok(Json<u64>),
}

impl IntoResponse for CountResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /people`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /people/:id`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<PersonId>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let person = state.person_service.get_person(id).await?;
    Ok(GetResponse::from(person))
}

/// `POST /people`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    Json(person): Json<Person>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let created = state.person_service.create_person(person).await?;
    let id = created
        .id
        .ok_or_else(|| RosterError::Storage("created person has no id".into()))?;
    Ok(CreateResponse::Created(id))
}

/// `PUT /people/:id`
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<PersonId>,
    Json(person): Json<Person>,
) -> Result<UpdateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let updated = state.person_service.update_person(id, person).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /people/:id`
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<PersonId>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    state.person_service.delete_person(id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /people/search/:name`
pub async fn search<PR>(
    State(state): State<AppState<PR>>,
    Path(name): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let person = state.person_service.search_by_name(&name).await?;
    Ok(GetResponse::from(person))
}

/// `GET /people/count`
pub async fn count<PR>(State(state): State<AppState<PR>>) -> Result<CountResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let count = state.person_service.count_people().await?;
    Ok(CountResponse::Ok(Json(count)))
}
