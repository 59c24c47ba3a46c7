//! End-to-end scenarios over the public API.

use named_fsm::builder::FsmBuilder;
use named_fsm::core::{Fsm, FsmError};
use named_fsm::snapshot::{Snapshot, SnapshotError};
use named_fsm::fsm;

const TRIAL: &str = "TRIAL";
const BASIC: &str = "BASIC";
const PREMIUM: &str = "PREMIUM";
const UPGRADE: &str = "UPGRADE";
const DOWNGRADE: &str = "DOWNGRADE";

fn customer_plan() -> Fsm {
    let mut fsm = Fsm::new("Customer Plan");
    fsm.add_state(TRIAL).unwrap();
    fsm.add_state(BASIC).unwrap();
    fsm.add_state(PREMIUM).unwrap();
    fsm.add_trans(TRIAL, BASIC, UPGRADE).unwrap();
    fsm.add_trans(TRIAL, PREMIUM, UPGRADE).unwrap();
    fsm.add_trans(BASIC, PREMIUM, UPGRADE).unwrap();
    fsm.add_trans(PREMIUM, BASIC, DOWNGRADE).unwrap();
    fsm.init(TRIAL).unwrap();
    fsm
}

#[test]
fn toggle_enables_once() {
    let mut fsm = Fsm::new("Basic Disabled/Enabled");
    fsm.add_state("DISABLED").unwrap();
    fsm.add_state("ENABLED").unwrap();
    fsm.init("DISABLED").unwrap();
    fsm.add_trans("ENABLED", "DISABLED", "DISABLE").unwrap();
    fsm.add_trans("DISABLED", "ENABLED", "ENABLE").unwrap();

    let mut log = Vec::new();
    fsm.exec_with("ENABLE", "ENABLED", |prev, new, action| {
        log.push(format!("{prev} -> {new} via {action}"));
    })
    .unwrap();
    assert_eq!(fsm.get_state(), "ENABLED");

    let err = fsm
        .exec_with("ENABLE", "ENABLED", |prev, new, action| {
            log.push(format!("{prev} -> {new} via {action}"));
        })
        .unwrap_err();
    assert!(matches!(err, FsmError::ExecutionNotAllowed { .. }));
    assert_eq!(log, ["DISABLED -> ENABLED via ENABLE"]);
    assert_eq!(fsm.get_state(), "ENABLED");
}

#[test]
fn plan_upgrades_and_downgrades() {
    let mut fsm = customer_plan();
    fsm.exec(UPGRADE, BASIC).unwrap();
    fsm.exec(UPGRADE, PREMIUM).unwrap();
    fsm.exec(DOWNGRADE, BASIC).unwrap();
    assert_eq!(fsm.get_state(), BASIC);

    let err = fsm.exec(DOWNGRADE, TRIAL).unwrap_err();
    assert!(matches!(err, FsmError::ExecutionNotAllowed { .. }));
}

#[test]
fn init_unknown_state_fails() {
    let mut fsm = customer_plan();
    assert_eq!(
        fsm.init("NOT_LOADED"),
        Err(FsmError::StateNotFound {
            name: "NOT_LOADED".to_string()
        })
    );
    assert_eq!(fsm.get_state(), TRIAL);
}

#[test]
fn unconfigured_machine_is_not_ready() {
    let mut fsm = Fsm::new("Nothing yet");
    assert_eq!(fsm.exec(UPGRADE, BASIC), Err(FsmError::NotReady));
}

#[test]
fn exported_plan_behaves_like_the_original() {
    let mut original = customer_plan();
    let json = original.to_json_pretty().unwrap();
    let mut restored = Fsm::from_json(&json).unwrap();

    assert!(restored.export().equivalent(&original.export()));

    let mut seen = Vec::new();
    for fsm in [&mut original, &mut restored] {
        fsm.exec_with(UPGRADE, BASIC, |prev, new, action| {
            seen.push((prev.to_string(), new.to_string(), action.to_string()));
        })
        .unwrap();
        assert_eq!(fsm.get_state(), BASIC);
    }
    assert_eq!(seen[0], seen[1]);
}

#[test]
fn handwritten_payload_imports() {
    let json = r#"{"Name":"Customer Plan Status","Current":"TRIAL","States":["TRIAL","BASIC","PREMIUM"],"Transitions":[{"From":"TRIAL","To":"BASIC","Action":"UPGRADE"},{"From":"TRIAL","To":"PREMIUM","Action":"UPGRADE"},{"From":"BASIC","To":"PREMIUM","Action":"UPGRADE"},{"From":"PREMIUM","To":"BASIC","Action":"DOWNGRADE"}]}"#;
    let fsm = Fsm::from_json(json).unwrap();

    assert_eq!(fsm.name(), "Customer Plan Status");
    assert_eq!(fsm.get_state(), TRIAL);
    assert_eq!(fsm.export(), customer_plan_snapshot("Customer Plan Status"));
}

#[test]
fn payload_with_state_objects_is_rejected() {
    let json = r#"{"Name":"Customer Plan Status","Current":"TRIAL","States":[{"Id":0,"Name":"TRIAL"}],"Transitions":[]}"#;
    let err = Fsm::from_json(json).unwrap_err();
    assert!(matches!(err, SnapshotError::DeserializationFailed(_)));
}

#[test]
fn payload_with_dangling_transition_is_rejected() {
    let json = r#"{"Name":"x","Current":"TRIAL","States":["TRIAL","BASIC"],"Transitions":[{"From":"TRIAL","To":"PREMIUM","Action":"UPGRADE"}]}"#;
    let err = Fsm::from_json(json).unwrap_err();
    assert_eq!(
        err.fsm_error(),
        Some(&FsmError::StateNotFound {
            name: PREMIUM.to_string()
        })
    );
}

#[test]
fn builder_and_macro_agree_with_manual_construction() {
    let built = FsmBuilder::new("Customer Plan")
        .transition(TRIAL, BASIC, UPGRADE)
        .transition(TRIAL, PREMIUM, UPGRADE)
        .transition(BASIC, PREMIUM, UPGRADE)
        .transition(PREMIUM, BASIC, DOWNGRADE)
        .initial(TRIAL)
        .build()
        .unwrap();

    let declared = fsm! {
        name: "Customer Plan",
        transitions: [
            TRIAL => BASIC : UPGRADE,
            TRIAL => PREMIUM : UPGRADE,
            BASIC => PREMIUM : UPGRADE,
            PREMIUM => BASIC : DOWNGRADE,
        ],
        initial: TRIAL,
    }
    .unwrap();

    let manual = customer_plan().export();
    assert_eq!(built.export(), manual);
    assert_eq!(declared.export(), manual);
}

#[test]
fn dump_lists_transitions() {
    let dump = customer_plan().get_trans();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(
        lines,
        [
            "Transitions Customer Plan:",
            "UPGRADE (TRIAL) -> (BASIC)",
            "UPGRADE (TRIAL) -> (PREMIUM)",
            "UPGRADE (BASIC) -> (PREMIUM)",
            "DOWNGRADE (PREMIUM) -> (BASIC)",
        ]
    );
}

fn customer_plan_snapshot(name: &str) -> Snapshot {
    let mut snapshot = customer_plan().export();
    snapshot.name = name.to_string();
    snapshot
}
