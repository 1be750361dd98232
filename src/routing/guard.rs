//! Navigation guard.
//!
//! Evaluated once per navigation attempt, synchronously, before the
//! navigation commits. The decision table is ordered; the first matching
//! row wins:
//!
//! 1. authenticated + entry route        -> bounce to the landing route
//! 2. authenticated + admin route, not admin -> notice + landing route
//! 3. authenticated                      -> permit
//! 4. unauthenticated + guarded route    -> notice + login with redirect param
//! 5. unauthenticated                    -> permit
//!
//! The auth check precedes the admin check, so an unauthenticated request
//! to an admin route lands in row 4.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routing::table::{LANDING_PATH, LOGIN_PATH, RouteDescriptor};

/// User-visible advisory attached to a redirect decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Outcome of evaluating one navigation intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Permit,
    Redirect {
        target: String,
        notice: Option<Notice>,
    },
}

/// Login URL carrying the originally requested path for post-login return.
pub fn login_redirect_target(intended: &str) -> String {
    format!("{LOGIN_PATH}?redirect={intended}")
}

/// Apply the decision table to one navigation intent. `path` is the
/// concrete target path (with parameters substituted), `route` its
/// descriptor from the static table.
pub fn evaluate(
    path: &str,
    route: &RouteDescriptor,
    authenticated: bool,
    admin: bool,
) -> GuardDecision {
    if authenticated {
        if route.is_entry {
            return GuardDecision::Redirect {
                target: LANDING_PATH.to_owned(),
                notice: None,
            };
        }
        if route.requires_admin && !admin {
            return GuardDecision::Redirect {
                target: LANDING_PATH.to_owned(),
                notice: Some(Notice {
                    message: "You do not have permission to access that page.".to_owned(),
                }),
            };
        }
        return GuardDecision::Permit;
    }

    if route.requires_auth {
        return GuardDecision::Redirect {
            target: login_redirect_target(path),
            notice: Some(Notice {
                message: "Please log in to continue.".to_owned(),
            }),
        };
    }

    GuardDecision::Permit
}
