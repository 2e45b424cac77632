//! Capability-based authorization for Axum routes.
//!
//! Authentication has already happened by the time anything here runs: the
//! [`authenticate`](crate::middleware::auth::authenticate) stage attaches a
//! [`Principal`] to the request. This module only decides whether that
//! principal may go further.
//!
//! An [`AdminGate`] pairs the capability a route requires with the fixed
//! message returned when it is missing. [`require_gate`] applies a gate as
//! route middleware:
//!
//! ```rust,ignore
//! use axum::{middleware, routing::delete};
//! use crate::middleware::role::{AdminGate, require_gate};
//!
//! let route = delete(delete_user)
//!     .route_layer(middleware::from_fn_with_state(AdminGate::DELETE_USER, require_gate));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use gatehouse_auth::{Capability, Principal};
use gatehouse_core::AppError;
use tracing::{info, warn};

use crate::metrics::track_gate_decision;

/// Returns whether `principal` holds `capability`.
pub fn has_capability(principal: &Principal, capability: Capability) -> bool {
    match capability {
        Capability::Admin => principal.is_admin,
    }
}

/// Why a gate rejected a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    Forbidden,
}

impl DenialReason {
    pub fn code(&self) -> &'static str {
        match self {
            DenialReason::Forbidden => "FORBIDDEN",
        }
    }
}

/// A rejected gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub reason: DenialReason,
    pub message: &'static str,
}

impl Denial {
    pub fn into_error(self) -> AppError {
        match self.reason {
            DenialReason::Forbidden => AppError::forbidden(self.message),
        }
    }
}

impl IntoResponse for Denial {
    fn into_response(self) -> Response {
        self.into_error().into_response()
    }
}

/// Outcome of [`AdminGate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Deny(Denial),
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// A checkpoint between authentication and a protected action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminGate {
    pub capability: Capability,
    pub denial_message: &'static str,
}

impl AdminGate {
    /// Guards `DELETE /api/users/{username}`.
    pub const DELETE_USER: AdminGate =
        AdminGate::new(Capability::Admin, "Forbidden: Only admins can delete users");

    pub const fn new(capability: Capability, denial_message: &'static str) -> Self {
        Self {
            capability,
            denial_message,
        }
    }

    /// Pure decision: no state is read or written beyond `principal`.
    pub fn evaluate(&self, principal: &Principal) -> GateDecision {
        if has_capability(principal, self.capability) {
            GateDecision::Allow
        } else {
            GateDecision::Deny(Denial {
                reason: DenialReason::Forbidden,
                message: self.denial_message,
            })
        }
    }
}

/// Middleware applying an [`AdminGate`] to the request's [`Principal`].
///
/// Must be layered inside `authenticate`. A request without a principal never
/// passed authentication and is answered with 401.
pub async fn require_gate(State(gate): State<AdminGate>, req: Request, next: Next) -> Response {
    let Some(principal) = req.extensions().get::<Principal>() else {
        return AppError::unauthorized("Not authenticated").into_response();
    };

    let decision = gate.evaluate(principal);
    track_gate_decision(gate.capability, decision.is_allowed());

    match decision {
        GateDecision::Allow => {
            info!(
                principal = %principal.id,
                capability = %gate.capability,
                "Gate allowed request"
            );
            next.run(req).await
        }
        GateDecision::Deny(denial) => {
            warn!(
                principal = %principal.id,
                capability = %gate.capability,
                reason = denial.reason.code(),
                "Gate denied request"
            );
            denial.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn principal(id: &str, is_admin: bool) -> Principal {
        Principal {
            id: id.to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_has_capability() {
        assert!(has_capability(&principal("u1", true), Capability::Admin));
        assert!(!has_capability(&principal("u2", false), Capability::Admin));
    }

    #[test]
    fn test_evaluate_admin_allows() {
        let decision = AdminGate::DELETE_USER.evaluate(&principal("u1", true));
        assert_eq!(decision, GateDecision::Allow);
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_evaluate_non_admin_denies_with_fixed_message() {
        let decision = AdminGate::DELETE_USER.evaluate(&principal("u2", false));
        match decision {
            GateDecision::Deny(denial) => {
                assert_eq!(denial.reason, DenialReason::Forbidden);
                assert_eq!(denial.reason.code(), "FORBIDDEN");
                assert_eq!(denial.message, "Forbidden: Only admins can delete users");
            }
            GateDecision::Allow => panic!("non-admin must be denied"),
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let gate = AdminGate::DELETE_USER;
        for p in [principal("u1", true), principal("u2", false)] {
            assert_eq!(gate.evaluate(&p), gate.evaluate(&p));
        }
    }

    #[test]
    fn test_denial_maps_to_forbidden_error() {
        let GateDecision::Deny(denial) = AdminGate::DELETE_USER.evaluate(&principal("u2", false))
        else {
            panic!("non-admin must be denied");
        };
        let err = denial.into_error();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.message(), "Forbidden: Only admins can delete users");
    }

    #[test]
    fn test_denial_response_status() {
        let gate = AdminGate::new(Capability::Admin, "Admins only");
        let GateDecision::Deny(denial) = gate.evaluate(&principal("u3", false)) else {
            panic!("non-admin must be denied");
        };
        assert_eq!(denial.message, "Admins only");
        assert_eq!(denial.into_response().status(), StatusCode::FORBIDDEN);
        assert!(gate.evaluate(&principal("u4", true)).is_allowed());
    }
}
