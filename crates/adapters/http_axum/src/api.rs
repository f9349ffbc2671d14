//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod people;

use axum::Router;
use axum::routing::get;

use roster_app::ports::PersonRepository;

use crate::state::AppState;

/// Build the `/people` routes.
///
/// `/people/count` and `/people/search/{name}` are static prefixes and take
/// precedence over `/people/{id}`.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/people",
            get(people::list::<PR>).post(people::create::<PR>),
        )
        .route("/people/count", get(people::count::<PR>))
        .route("/people/search/{name}", get(people::search::<PR>))
        .route(
            "/people/{id}",
            get(people::get::<PR>)
                .put(people::update::<PR>)
                .delete(people::delete::<PR>),
        )
}
