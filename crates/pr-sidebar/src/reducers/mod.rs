pub mod app_reducer;
pub mod pull_request_reducer;
pub mod router_reducer;
pub mod sidebar_reducer;
