// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end lifecycle scenarios driven straight through
//! `wlw_engine::handlers::dispatch_one`, bypassing the poll loop, against
//! in-memory fakes for every external collaborator.

mod support;

use tokio_util::sync::CancellationToken;
use wlw_adapters::fake::FakeCall;
use wlw_core::Mode;
use wlw_wire::Event;

use support::{build_fixture, workspace};

#[tokio::test]
async fn cold_create_runs_init_and_reports_done_at_100() {
    let fx = build_fixture();
    let ws = workspace("ws-cold", Mode::PendingCreation, None, false);

    wlw_engine::handlers::dispatch_one(&fx.runtime, ws, &CancellationToken::new()).await.expect("create should succeed");

    assert_eq!(fx.collaborators.calls(), vec![FakeCall::Create { workspace: "ws-cold".to_string() }]);
    let events = fx.account.events_for("ws-cold");
    assert_eq!(events.first(), Some(&(Event::CreateStarted, 0)));
    assert_eq!(events.last(), Some(&(Event::CreateDone, 100)));
}

#[tokio::test]
async fn resume_after_init_failure_skips_init_script() {
    let fx = build_fixture();
    // Mode stayed `creating` with progress already past the init threshold:
    // a previous attempt crashed after the (non-reentrant) init script ran.
    let ws = workspace("ws-resume", Mode::Creating, Some(60), false);

    wlw_engine::handlers::dispatch_one(&fx.runtime, ws, &CancellationToken::new()).await.expect("resume should succeed");

    assert!(fx.collaborators.calls().is_empty(), "init script must not be retried");
    let events = fx.account.events_for("ws-resume");
    assert_eq!(events, vec![(Event::CreateStarted, 0), (Event::CreateDone, 60)]);
}

#[tokio::test]
async fn upgrade_is_skipped_for_a_disabled_workspace() {
    let fx = build_fixture();
    let ws = workspace("ws-disabled", Mode::Active, None, true);

    wlw_engine::handlers::dispatch_one(&fx.runtime, ws, &CancellationToken::new()).await.expect("skip should not error");

    assert!(fx.collaborators.calls().is_empty());
    assert!(fx.account.events_for("ws-disabled").is_empty());
}

#[tokio::test]
async fn archive_backup_then_clean_closes_storage_and_drops_indexes() {
    let fx = build_fixture();

    let backup_ws = workspace("ws-archive", Mode::ArchivingBackup, None, false);
    wlw_engine::handlers::dispatch_one(&fx.runtime, backup_ws, &CancellationToken::new()).await.expect("archive backup should succeed");

    let clean_ws = workspace("ws-archive", Mode::ArchivingClean, None, false);
    wlw_engine::handlers::dispatch_one(&fx.runtime, clean_ws, &CancellationToken::new()).await.expect("archive clean should succeed");

    let calls = fx.collaborators.calls();
    assert!(calls.contains(&FakeCall::Backup { workspace_scheme: "mongodb".to_string(), full_check: true }));
    assert!(calls.contains(&FakeCall::Delete { workspace: "ws-archive".to_string() }));
    assert!(calls.iter().filter(|c| matches!(c, FakeCall::StorageClosed)).count() >= 1);
    assert_eq!(fx.collaborators.close_count(), 1, "only the backup phase opens a storage adapter");

    let events = fx.account.events_for("ws-archive");
    assert!(events.contains(&(Event::ArchivingBackupDone, 100)));
    assert!(events.contains(&(Event::ArchivingCleanDone, 100)));
}

#[tokio::test]
async fn delete_still_reports_done_when_reindex_is_unreachable() {
    let fx = build_fixture();
    // fulltext_url stays unset in the fixture, so the reindex call is a
    // no-op; delete-done must still be emitted (spec §4.10: reindex failure
    // never blocks the lifecycle event).
    let ws = workspace("ws-delete", Mode::Deleting, None, false);

    wlw_engine::handlers::dispatch_one(&fx.runtime, ws, &CancellationToken::new()).await.expect("delete should succeed");

    assert!(fx.collaborators.calls().contains(&FakeCall::Delete { workspace: "ws-delete".to_string() }));
    let events = fx.account.events_for("ws-delete");
    assert_eq!(events, vec![(Event::DeleteStarted, 0), (Event::DeleteDone, 100)]);
}

#[tokio::test]
async fn unknown_mode_is_a_no_op() {
    let fx = build_fixture();
    // An `Unknown` mode arrives when the control-plane reports a wire value
    // outside the closed set this worker understands.
    let ws = workspace("ws-poisoned", Mode::Unknown, None, false);

    wlw_engine::handlers::dispatch_one(&fx.runtime, ws, &CancellationToken::new()).await.expect("unknown mode must not error");

    assert!(fx.collaborators.calls().is_empty());
    assert!(fx.account.events_for("ws-poisoned").is_empty());
}
