//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!     CLI ──────────▶│  Fuser / Validation     │
//!                    │  (decision core)        │
//!                    └───────────┬─────────────┘
//!          ┌──────────────┬──────┴───────┬──────────────┐
//!          ▼              ▼              ▼              ▼
//!    ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐
//!    │  Market   │  │   Order   │  │   Trade   │  │   Stop    │
//!    │  Source   │  │ Executor  │  │ Recorder  │  │  Signal   │
//!    └───────────┘  └───────────┘  └───────────┘  └───────────┘
//! ```

pub mod inbound;
pub mod outbound;
