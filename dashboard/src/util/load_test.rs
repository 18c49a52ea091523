use std::sync::Arc;

use souksync::api::{HttpRequest, HttpResponse, HttpTransport};
use souksync::{ClientConfig, MemoryTokenStore, TokenStore};

use super::*;

struct Offline;

#[async_trait::async_trait(?Send)]
impl HttpTransport for Offline {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport("offline".to_owned()))
    }
}

fn scope_with_tokens() -> (PageScope, Arc<MemoryTokenStore>, AliveFlag) {
    let tokens = Arc::new(MemoryTokenStore::with_tokens("a1", "r1"));
    let client = ApiClient::new(ClientConfig::default(), Arc::new(Offline), tokens.clone());
    let alive = AliveFlag::new();
    (PageScope::new(SessionManager::new(client), alive.clone()), tokens, alive)
}

fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, message: "Not authenticated".to_owned() }
}

// =============================================================================
// LoadState
// =============================================================================

#[test]
fn ok_result_is_ready() {
    let state = LoadState::from_result(Ok(3), "Failed to load");
    assert_eq!(state.ready(), Some(&3));
    assert_eq!(state.error(), None);
    assert!(!state.is_loading());
}

#[test]
fn status_error_shows_server_message() {
    let err = ApiError::Status { status: 404, message: "Credit profile not found".to_owned() };
    let state: LoadState<()> = LoadState::from_result(Err(err), "Failed to load credit profile");
    assert_eq!(state.error(), Some("Credit profile not found"));
}

#[test]
fn transport_error_shows_fallback() {
    let state: LoadState<()> = LoadState::from_result(Err(ApiError::Transport("dns".to_owned())), "Failed to load orders");
    assert_eq!(state.error(), Some("Failed to load orders"));
}

// =============================================================================
// PageScope::settle
// =============================================================================

#[test]
fn settle_passes_success_through() {
    let (scope, tokens, _alive) = scope_with_tokens();
    assert_eq!(scope.settle(Ok(7)), Some(Ok(7)));
    assert_eq!(tokens.access_token().as_deref(), Some("a1"));
}

#[test]
fn settle_drops_results_after_unmount() {
    let (scope, _tokens, alive) = scope_with_tokens();
    alive.clear();
    assert_eq!(scope.settle(Ok(1)), None);
}

#[test]
fn late_unauthorized_after_unmount_still_logs_out() {
    let (scope, tokens, alive) = scope_with_tokens();
    alive.clear();
    assert_eq!(scope.settle::<()>(Err(unauthorized())), None);
    assert_eq!(tokens.pair(), None);
}

#[test]
fn settle_unauthorized_logs_out() {
    let (scope, tokens, _alive) = scope_with_tokens();
    let settled = scope.settle::<()>(Err(unauthorized()));
    assert!(matches!(settled, Some(Err(ref e)) if e.is_unauthorized()));
    assert_eq!(tokens.pair(), None);
    assert_eq!(scope.session().state().user, None);
}

#[test]
fn settle_other_failures_keep_tokens() {
    let (scope, tokens, _alive) = scope_with_tokens();
    let err = ApiError::Status { status: 422, message: "Invalid price".to_owned() };
    assert!(scope.settle::<()>(Err(err)).is_some());
    assert_eq!(tokens.access_token().as_deref(), Some("a1"));
}

// =============================================================================
// PageScope::settle_latest
// =============================================================================

#[test]
fn newer_load_supersedes_older_one() {
    let (scope, _tokens, _alive) = scope_with_tokens();
    let first = scope.next_ticket();
    let second = scope.next_ticket();

    assert_eq!(scope.settle_latest(second, Ok(2)), Some(Ok(2)));
    // page 1 answers last but must not overwrite page 2
    assert_eq!(scope.settle_latest(first, Ok(1)), None);
}

#[test]
fn clones_share_the_generation() {
    let (scope, _tokens, _alive) = scope_with_tokens();
    let ticket = scope.next_ticket();
    let other = scope.clone();
    other.next_ticket();
    assert!(!scope.is_latest(ticket));
}

#[test]
fn superseded_unauthorized_still_logs_out() {
    let (scope, tokens, _alive) = scope_with_tokens();
    let stale = scope.next_ticket();
    scope.next_ticket();
    assert_eq!(scope.settle_latest::<()>(stale, Err(unauthorized())), None);
    assert_eq!(tokens.pair(), None);
}

#[test]
fn latest_load_commits_while_mounted_only() {
    let (scope, _tokens, alive) = scope_with_tokens();
    let ticket = scope.next_ticket();
    assert!(scope.is_latest(ticket));
    alive.clear();
    assert_eq!(scope.settle_latest(ticket, Ok(5)), None);
}
