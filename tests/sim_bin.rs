use std::process::Command;

fn run_sim(seed: &str) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg(seed)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim("12345");
    assert_eq!(v["seed"], 12345);
    let moves = v["moves"].as_u64().unwrap();
    assert!((7..=42).contains(&moves));
    assert_eq!(v["board"].as_array().unwrap().len(), 6);
    if v["status"] == "Draw" {
        assert!(v["winner"].is_null());
        assert_eq!(moves, 42);
    } else {
        let winner = v["winner"].as_str().unwrap();
        assert!(winner == "X" || winner == "O");
        assert_eq!(v["status"]["Won"], winner);
    }
}

#[test]
fn sim_binary_is_deterministic_per_seed() {
    assert_eq!(run_sim("7"), run_sim("7"));
}

#[test]
fn sim_binary_rejects_missing_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
