//! steward — a supervised HTTP service runtime.
//!
//! Boots an HTTP application on a configured port and supervises the
//! process lifecycle: startup status reporting, termination signals,
//! background-fault handling, and graceful drain of in-flight work.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌───────────────────────────────────────────────┐
//!                 │                    STEWARD                    │
//!                 │                                               │
//!    PORT/APP_ENV │  ┌────────┐      ┌────────┐     ┌─────────┐   │
//!    ────────────▶│  │ config │─────▶│  net   │────▶│  http   │◀──┼──── Client
//!                 │  │        │      │listener│     │ server  │   │     Requests
//!                 │  └────────┘      └────────┘     └────┬────┘   │
//!                 │                                      │        │
//!                 │                                ListenHandle   │
//!                 │                                      │        │
//!    SIGTERM ──┐  │  ┌────────────────────────────┐      ▼        │
//!    SIGINT  ──┼──┼─▶│         lifecycle          │  ┌─────────┐  │
//!    task    ──┘  │  │   signals / faults /       │─▶│ drain,  │  │
//!    faults       │  │   shutdown / supervisor    │  │  exit   │  │
//!                 │  └────────────────────────────┘  └─────────┘  │
//!                 └───────────────────────────────────────────────┘
//! ```
//!
//! The supervisor owns the listen handle for the process lifetime and
//! resolves exactly one terminal transition: operator signal (drain, exit
//! 0), background fault (drain, exit 1), or escaped panic (immediate
//! exit 1, no drain).

// Core subsystems
pub mod config;
pub mod http;
pub mod net;

// Cross-cutting concerns
pub mod lifecycle;
