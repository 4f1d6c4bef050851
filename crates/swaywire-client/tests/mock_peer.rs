#![cfg(unix)]

use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use swaywire_client::{ClientError, Connection, LocateStrategy, MessageKind, Mode, SocketLocator};
use swaywire_frame::{FrameReader, FrameWriter};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "swaywire-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

/// A fake compositor: accepts one client and answers each request with the
/// next scripted reply. Returns the `(kind, payload)` of every request seen.
struct MockPeer {
    dir: PathBuf,
    path: PathBuf,
    handle: Option<JoinHandle<Vec<(u32, String)>>>,
}

impl MockPeer {
    fn start(tag: &str, replies: Vec<&'static str>) -> Self {
        let dir = unique_temp_dir(tag);
        let path = dir.join("sway-ipc.sock");
        let listener = UnixListener::bind(&path).expect("mock peer should bind");

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("mock peer should accept");
            let mut reader = FrameReader::new(stream.try_clone().expect("clone"));
            let mut writer = FrameWriter::new(stream);
            let mut seen = Vec::new();
            for reply in replies {
                let request = reader.read_frame().expect("request frame");
                let kind = request
                    .message_kind()
                    .expect("client sends known kinds");
                seen.push((
                    request.kind,
                    String::from_utf8_lossy(&request.payload).into_owned(),
                ));
                writer.send(kind, reply.as_bytes()).expect("reply frame");
            }
            seen
        });

        Self {
            dir,
            path,
            handle: Some(handle),
        }
    }

    fn connect(&self) -> Connection {
        Connection::open(&self.path).expect("client should connect")
    }

    fn finish(mut self) -> Vec<(u32, String)> {
        let seen = self
            .handle
            .take()
            .expect("handle present")
            .join()
            .expect("mock peer thread");
        let _ = std::fs::remove_dir_all(&self.dir);
        seen
    }
}

#[test]
fn run_succeeds_when_every_outcome_succeeds() {
    let peer = MockPeer::start("run-ok", vec![r#"[{"Success":true,"Error":""}]"#]);
    let mut conn = peer.connect();

    conn.run("workspace 2").expect("command should succeed");

    let seen = peer.finish();
    assert_eq!(seen, vec![(MessageKind::RunCommand.tag(), "workspace 2".to_string())]);
}

#[test]
fn run_reports_the_failing_sub_command() {
    let peer = MockPeer::start(
        "run-fail",
        vec![r#"[{"Success":false,"Error":"No such workspace"}]"#],
    );
    let mut conn = peer.connect();

    let err = conn.run("workspace nope").expect_err("command should fail");
    peer.finish();

    assert!(matches!(err, ClientError::CommandFailed { .. }));
    assert_eq!(err.to_string(), "No such workspace");
}

#[test]
fn run_ignores_failures_after_the_first() {
    let peer = MockPeer::start(
        "run-first",
        vec![
            r#"[{"success":true},{"success":false,"error":"first"},{"success":false,"error":"second"}]"#,
        ],
    );
    let mut conn = peer.connect();

    let err = conn.run("nop; bad one; bad two").expect_err("command should fail");
    peer.finish();
    assert_eq!(err.to_string(), "first");
}

#[test]
fn run_command_returns_every_outcome() {
    let peer = MockPeer::start(
        "run-all",
        vec![r#"[{"success":true},{"success":false,"parse_error":true,"error":"bad"}]"#],
    );
    let mut conn = peer.connect();

    let outcomes = conn.run_command("nop; bad").expect("reply decodes");
    peer.finish();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].success);
    assert!(outcomes[1].parse_error);
}

#[test]
fn run_with_malformed_reply_is_a_decode_error() {
    let peer = MockPeer::start("run-garbage", vec![r#"{"success":true}"#]);
    let mut conn = peer.connect();

    let err = conn.run("nop").expect_err("object is not an outcome array");
    peer.finish();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[test]
fn get_outputs_decodes_one_output() {
    let peer = MockPeer::start(
        "outputs-one",
        vec![
            r#"[{"Name":"eDP-1","Make":"BOE","Model":"0x0BCA","Serial":"0","Active":true,"Scale":1.0,
                "Modes":[{"Width":1920,"Height":1080,"Refresh":60}],
                "current_mode":{"Width":1920,"Height":1080,"Refresh":60}}]"#,
        ],
    );
    let mut conn = peer.connect();

    let outputs = conn.get_outputs().expect("outputs should decode");
    let seen = peer.finish();

    assert_eq!(seen, vec![(MessageKind::GetOutputs.tag(), String::new())]);
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].name, "eDP-1");
    assert!(outputs[0].active);
    assert_eq!(outputs[0].scale, 1.0);
    assert_eq!(
        outputs[0].current_mode,
        Some(Mode {
            width: 1920,
            height: 1080,
            refresh: 60
        })
    );
}

#[test]
fn get_outputs_with_no_outputs_is_empty() {
    let peer = MockPeer::start("outputs-none", vec!["[]"]);
    let mut conn = peer.connect();

    let outputs = conn.get_outputs().expect("empty list is not an error");
    peer.finish();
    assert!(outputs.is_empty());
}

#[test]
fn get_outputs_preserves_peer_order() {
    let peer = MockPeer::start(
        "outputs-order",
        vec![r#"[{"name":"HDMI-A-1"},{"name":"eDP-1"},{"name":"DP-3"}]"#],
    );
    let mut conn = peer.connect();

    let names: Vec<String> = conn
        .get_outputs()
        .expect("outputs should decode")
        .into_iter()
        .map(|output| output.name)
        .collect();
    peer.finish();
    assert_eq!(names, vec!["HDMI-A-1", "eDP-1", "DP-3"]);
}

#[test]
fn every_query_sends_its_kind_and_payload() {
    let peer = MockPeer::start(
        "queries",
        vec![
            r#"[{"num":1,"name":"1","focused":true,"output":"eDP-1"}]"#,
            r#"{"id":1,"type":"root","nodes":[]}"#,
            r#"["web","chat"]"#,
            r#"["bar-0"]"#,
            r#"{"id":"bar-0","mode":"dock","position":"top","font":"monospace 10"}"#,
            r#"{"major":1,"minor":10,"patch":1,"human_readable":"1.10.1"}"#,
            r#"["default","resize"]"#,
            r#"{"config":"set $mod Mod4\n"}"#,
            r#"{"success":true}"#,
            r#"{"success":false}"#,
        ],
    );
    let mut conn = peer.connect();

    let workspaces = conn.get_workspaces().expect("workspaces");
    let tree = conn.get_tree().expect("tree");
    let marks = conn.get_marks().expect("marks");
    let bars = conn.get_bar_ids().expect("bar ids");
    let bar = conn.get_bar_config("bar-0").expect("bar config");
    let version = conn.get_version().expect("version");
    let modes = conn.get_binding_modes().expect("binding modes");
    let config = conn.get_config().expect("config");
    let ticked = conn.send_tick("hello").expect("tick");
    let synced = conn.sync().expect("sync");

    let seen = peer.finish();

    assert!(workspaces[0].focused);
    assert_eq!(tree.node_type, "root");
    assert_eq!(marks, vec!["web", "chat"]);
    assert_eq!(bars, vec!["bar-0"]);
    assert_eq!(bar.position, "top");
    assert_eq!(version.minor, 10);
    assert_eq!(modes, vec!["default", "resize"]);
    assert!(config.config.starts_with("set $mod"));
    assert!(ticked);
    assert!(!synced);

    let expected = vec![
        (MessageKind::GetWorkspaces, ""),
        (MessageKind::GetTree, ""),
        (MessageKind::GetMarks, ""),
        (MessageKind::GetBarConfig, ""),
        (MessageKind::GetBarConfig, "bar-0"),
        (MessageKind::GetVersion, ""),
        (MessageKind::GetBindingModes, ""),
        (MessageKind::GetConfig, ""),
        (MessageKind::SendTick, "hello"),
        (MessageKind::Sync, ""),
    ];
    let expected: Vec<(u32, String)> = expected
        .into_iter()
        .map(|(kind, payload)| (kind.tag(), payload.to_string()))
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn connection_shared_behind_mutex_serialises_requests() {
    let peer = MockPeer::start("mutex", vec!["[]"; 8]);
    let conn = std::sync::Arc::new(std::sync::Mutex::new(peer.connect()));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let conn = std::sync::Arc::clone(&conn);
            thread::spawn(move || {
                for _ in 0..2 {
                    let marks = conn
                        .lock()
                        .expect("lock")
                        .get_marks()
                        .expect("marks");
                    assert!(marks.is_empty());
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker thread");
    }

    assert_eq!(peer.finish().len(), 8);
}

#[test]
fn locator_address_is_dialled() {
    let peer = MockPeer::start("locator", vec![r#"{"major":1}"#]);

    let path = SocketLocator::new()
        .var_name("SWAYWIRE_TEST_UNSET_VARIABLE")
        .helper("echo", [peer.path.to_string_lossy().into_owned()])
        .resolve()
        .expect("helper prints the path");
    let mut conn = Connection::open(path).expect("client should connect");
    assert_eq!(conn.get_version().expect("version").major, 1);
    peer.finish();
}

#[test]
fn env_only_locator_without_variable_fails() {
    let err = SocketLocator::new()
        .var_name("SWAYWIRE_TEST_UNSET_VARIABLE")
        .strategies(&[LocateStrategy::EnvVar])
        .resolve()
        .expect_err("nothing to resolve");
    assert!(matches!(err, ClientError::NoAddressFound));
}
