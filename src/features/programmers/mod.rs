//! Programmers feature.
//!
//! A single static endpoint kept from the original demo deployment.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/programmers/best` | Fixed answer, no state involved |

pub mod dtos;
pub mod handlers;
pub mod routes;
