mod common;

use std::sync::Arc;

use common::{context, invoke, RecordingShell};
use pretty_assertions::assert_eq;
use sssd_suite_core::api::MemoryConsole;

fn setup() -> (Arc<RecordingShell>, sssd_suite_core::api::AppContext) {
    let shell = Arc::new(RecordingShell::new());
    let ctx = context(shell.clone(), Arc::new(MemoryConsole::new()));
    (shell, ctx)
}

#[tokio::test]
async fn up_without_guests_targets_all_in_one_call() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["up"]).await.unwrap();

    assert_eq!(
        shell.args(),
        vec![vec!["up", "ad", "ad-child", "client", "ipa", "ldap"]]
    );
}

#[tokio::test]
async fn sequence_flag_runs_one_call_per_guest() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["halt", "-s", "ldap", "client"]).await.unwrap();

    assert_eq!(
        shell.args(),
        vec![vec!["halt", "client"], vec!["halt", "ldap"]]
    );
}

#[tokio::test]
async fn unknown_guest_is_rejected_before_running_anything() {
    let (shell, ctx) = setup();
    let err = invoke(&ctx, &["destroy", "nope"]).await.unwrap_err();

    assert_eq!(err.kind(), "UsageError");
    assert!(shell.calls().is_empty());
}

#[tokio::test]
async fn box_update_uses_both_command_words() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["box-update", "client"]).await.unwrap();

    assert_eq!(shell.args(), vec![vec!["box", "update", "client"]]);
}

#[tokio::test]
async fn prune_boxes_keeps_active_ones() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["prune-boxes"]).await.unwrap();

    assert_eq!(
        shell.args(),
        vec![vec!["box", "prune", "--force", "--keep-active-boxes"]]
    );
}

#[tokio::test]
async fn ssh_forwards_everything_after_separator() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["ssh", "client", "--", "echo", "Hello"])
        .await
        .unwrap();

    assert_eq!(
        shell.args(),
        vec![vec!["ssh", "client", "--", "echo", "Hello"]]
    );
}

#[tokio::test]
async fn ssh_refuses_windows_guests() {
    let (shell, ctx) = setup();
    let err = invoke(&ctx, &["ssh", "ad"]).await.unwrap_err();

    assert_eq!(err.kind(), "UsageError");
    assert!(err.to_string().contains("client"));
    assert!(shell.calls().is_empty());
}

#[tokio::test]
async fn rdp_accepts_windows_guests() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["rdp", "ad", "--", "-g", "90%"]).await.unwrap();

    assert_eq!(shell.args(), vec![vec!["rdp", "ad", "--", "-g", "90%"]]);
}

#[tokio::test]
async fn separator_is_refused_by_commands_without_passthrough() {
    let (shell, ctx) = setup();
    let err = invoke(&ctx, &["up", "client", "--", "--provider", "x"])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "UsageError");
    assert!(shell.calls().is_empty());
}

#[tokio::test]
async fn guest_config_flag_overrides_vagrant_env() {
    let (shell, ctx) = setup();
    let ctx = ctx.with_guest_config(Some(std::path::Path::new("/tmp/guests.json")));
    invoke(&ctx, &["status", "client"]).await.unwrap();

    assert_eq!(shell.calls()[0].env["SSSD_TEST_SUITE_CONFIG"], "/tmp/guests.json");
}

#[tokio::test]
async fn provision_guest_limits_to_selected_guests() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["provision", "guest", "-u", "ldap", "client"])
        .await
        .unwrap();

    assert_eq!(
        shell.args(),
        vec![vec![
            "--limit",
            "client,ldap",
            "--inventory-file",
            "/srv/suite/provision/inventory.yml",
            "/srv/suite/provision/prepare-guests.yml",
        ]]
    );
    let call = &shell.calls()[0];
    assert_eq!(call.argv[0], "ansible-playbook");
    assert_eq!(call.env["ANSIBLE_HOST_KEY_CHECKING"], "false");
}

#[tokio::test]
async fn provision_enroll_asks_for_password_by_default() {
    let (shell, ctx) = setup();
    invoke(&ctx, &["provision", "enroll"]).await.unwrap();

    assert_eq!(
        shell.args(),
        vec![vec![
            "--limit",
            "all",
            "--inventory-file",
            "/srv/suite/provision/inventory.yml",
            "--ask-become-pass",
            "/srv/suite/provision/enroll.yml",
        ]]
    );
}

#[tokio::test]
async fn provision_host_creates_pool_before_playbook() {
    let dir = tempfile::tempdir().unwrap();
    let pool = dir.path().join("images");
    let pool_str = pool.to_string_lossy().into_owned();
    let (shell, ctx) = setup();

    invoke(&ctx, &["provision", "host", "-u", "--pool", &pool_str])
        .await
        .unwrap();

    assert!(pool.is_dir());
    assert_eq!(
        shell.args(),
        vec![vec![
            "--limit".to_string(),
            "localhost".to_string(),
            "--inventory-file".to_string(),
            "/srv/suite/provision/inventory.yml".to_string(),
            "--extra-vars".to_string(),
            format!("LIBVIRT_STORAGE={pool_str}"),
            "/srv/suite/provision/prepare-host.yml".to_string(),
        ]]
    );
}

#[tokio::test]
async fn provision_host_rejects_guests() {
    let (shell, ctx) = setup();
    let err = invoke(&ctx, &["provision", "host", "client"])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "UsageError");
    assert!(err.to_string().contains("client"));
    assert!(shell.calls().is_empty());
}

#[tokio::test]
async fn provision_guest_rejects_unknown_name_next_to_all() {
    let (shell, ctx) = setup();
    let err = invoke(&ctx, &["provision", "guest", "all", "nfs"])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "UsageError");
    assert!(shell.calls().is_empty());
}

#[tokio::test]
async fn dry_run_host_provision_leaves_pool_alone() {
    let dir = tempfile::tempdir().unwrap();
    let pool = dir.path().join("images");
    let pool_str = pool.to_string_lossy().into_owned();
    let shell = Arc::new(RecordingShell::new());
    let console = Arc::new(MemoryConsole::new());
    let ctx = context(shell.clone(), console.clone()).with_dry_run(true);

    invoke(&ctx, &["provision", "host", "-u", "--pool", &pool_str])
        .await
        .unwrap();

    assert!(!pool.exists());
    assert!(console
        .text()
        .iter()
        .any(|l| l == &format!("[dry-run] mkdir -p {pool_str}")));
    assert_eq!(shell.calls().len(), 1);
}
