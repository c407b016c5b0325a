// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! wlw-wire: HTTP clients for the three external services the worker
//! depends on (account/control-plane, transactor, full-text), plus the
//! shared wire vocabulary.

pub mod account;
pub mod error;
pub mod event;
pub mod fulltext;
pub mod transactor;

pub use account::{AccountClient, HttpAccountClient};
pub use error::WireError;
pub use event::Event;
pub use fulltext::FulltextClient;
pub use transactor::TransactorClient;
