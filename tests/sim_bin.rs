use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--skill", "expert", "--seed", "7", "--games", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 7);
    assert_eq!(v["skill"], "Expert");
    let shots = v["shots"].as_array().expect("shots array");
    assert_eq!(shots.len(), 3);
    for n in shots {
        let n = n.as_u64().unwrap();
        assert!((15..=100).contains(&n));
    }
}
