//! Trofes Server - HTTP API
//!
//! Exposes the recommendation service over a small JSON API:
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /` | Liveness banner |
//! | `GET /health` | Model load status |
//! | `POST /recommend` | Recommendations from liked recipes |
//! | `POST /recommendCalculator` | Recommendations from macro targets |

pub mod api;
pub mod constants;
pub mod init;

pub use api::{ApiState, RequestDefaults, trofes_rocket};
pub use init::{check, run};
