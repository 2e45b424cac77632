use crate::middleware::auth::authenticate;
use crate::middleware::role::{AdminGate, require_gate};
use crate::modules::users::controller::{delete_user, get_users};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get},
};
use tower::ServiceBuilder;

/// Users routes.
///
/// The delete route runs its stages in the order listed in the
/// `ServiceBuilder`: authenticate, then the admin gate, then the handler.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    let delete_stages = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(state, authenticate))
        .layer(middleware::from_fn_with_state(
            AdminGate::DELETE_USER,
            require_gate,
        ));

    Router::new()
        .route("/", get(get_users))
        .route("/{username}", delete(delete_user).route_layer(delete_stages))
}
