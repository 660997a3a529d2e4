use axum::{extract::State, Json};

use service::account::{domain::AccountRequest, response::AccountResponse};

use super::AppState;

/// `POST /services/account`
///
/// Always answers 200; lookup failures travel in `returnCode`/`message`.
/// A missing or undecodable body counts as an absent request.
pub async fn get_account(State(state): State<AppState>, body: Option<Json<AccountRequest>>) -> Json<AccountResponse> {
    let request = body.map(|Json(r)| r);
    Json(state.accounts.get_account(request).await)
}
