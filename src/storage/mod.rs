// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Course persistence backends.
//!
//! | Backend | Type | `Error` |
//! |---------|------|---------|
//! | PostgreSQL | `sqlx::PgPool` | `sqlx::Error` |
//! | In-memory | [`MemoryCourseRepository`] | `Infallible` |

mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryCourseRepository;
