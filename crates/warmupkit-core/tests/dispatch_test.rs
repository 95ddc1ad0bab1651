use warmupkit_core::{generate_warmup, Controller, WarmupParameters};

fn params() -> WarmupParameters {
    WarmupParameters {
        program_name: "WARMUP".to_string(),
        x_travel: 500.0,
        y_travel: 400.0,
        z_travel: 300.0,
        start_feed: 1000.0,
        finish_feed: 2000.0,
        start_rpm: 500.0,
        finish_rpm: 6000.0,
        steps: 5,
        seconds_per_step: 1,
        include_coolant: true,
        machine_label: Some("VMC-1".to_string()),
    }
}

#[test]
fn test_dispatch_selects_dialect() {
    let tnc = generate_warmup(Controller::Tnc640, &params()).unwrap();
    assert!(tnc.contains("BEGIN PGM WARMUP MM"));

    let fanuc = generate_warmup(Controller::Fanuc31i, &params()).unwrap();
    assert!(fanuc.starts_with("%\n"));
    assert!(fanuc.contains("O0001 (WARMUP)"));
}

#[test]
fn test_machine_label_reaches_both_headers() {
    let tnc = generate_warmup(Controller::Tnc640, &params()).unwrap();
    assert!(tnc.contains("; MACHINE: VMC-1"));

    let fanuc = generate_warmup(Controller::Fanuc31i, &params()).unwrap();
    assert!(fanuc.contains("(FANUC 31I \u{2022} UNITS: MM \u{2022} VMC-1)"));
}

#[test]
fn test_output_is_newline_terminated_utf8() {
    for controller in [Controller::Tnc640, Controller::Fanuc31i] {
        let text = generate_warmup(controller, &params()).unwrap();
        assert!(text.ends_with('\n'));
        assert!(!text.is_empty());
    }
}
