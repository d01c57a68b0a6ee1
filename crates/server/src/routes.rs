//! HTTP routes for the identity API.

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::routing::get;
use axum::{Json, Router};
use gadget_id_core::identity::UsbIdentity;
use gadget_id_core::store::IdentityStore;
use tracing::warn;

use crate::proto::{self, Response};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<IdentityStore>,
}

/// Build the API router over a store.
pub fn router(store: IdentityStore) -> Router {
    Router::new()
        .route(
            "/api/usb-identity",
            get(get_usb_identity).post(set_usb_identity),
        )
        .with_state(AppState {
            store: Arc::new(store),
        })
}

/// GET /api/usb-identity: report the effective identity.
///
/// Cannot fail: missing or unreadable files fall back to factory defaults
/// inside the store.
async fn get_usb_identity(State(state): State<AppState>) -> Json<Response<UsbIdentity>> {
    Response::ok(state.store.load())
}

/// POST /api/usb-identity: persist a submitted identity.
///
/// Form fields: `vid` and `pid` (required, non-empty), `manufacturer` and
/// `product` (optional; blank clears the stored value). Failures map to the
/// per-field codes in [`proto::save_error_code`].
async fn set_usb_identity(
    State(state): State<AppState>,
    form: Result<Form<UsbIdentity>, FormRejection>,
) -> Json<Response<()>> {
    let Ok(Form(identity)) = form else {
        return Response::err(proto::CODE_INVALID_ARGUMENTS, "invalid arguments");
    };
    if identity.vid.is_empty() || identity.pid.is_empty() {
        return Response::err(proto::CODE_INVALID_ARGUMENTS, "invalid arguments");
    }

    match state.store.save(&identity) {
        Ok(()) => Response::ok_empty(),
        Err(err) => {
            warn!(%err, "set usb identity rejected");
            Response::err(proto::save_error_code(err.field()), err.to_string())
        }
    }
}
