//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse for AppError` mapping lives in `pixshare-core` (the
//! crate that owns `AppError`) because the orphan rule forbids implementing
//! the foreign `axum` trait for the foreign error type here. It is enabled
//! via the `axum` feature on `pixshare-core`. The response body type is
//! re-exported so it remains reachable as `pixshare_api::error`.

pub use pixshare_core::error::ApiErrorResponse;
