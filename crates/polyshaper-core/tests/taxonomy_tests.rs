use std::collections::HashSet;

use glam::dvec2;
use polyshaper_core::{
    report, Bounds2, ErrorCode, Identity, MachineEnvelope, PolyshaperError, UnknownErrorCode,
};

fn one_of_each() -> Vec<PolyshaperError> {
    vec![
        PolyshaperError::io("design.svg", "permission denied"),
        PolyshaperError::unrecognized_element("polygon"),
        PolyshaperError::invalid_cutting_path("path is not closed"),
        PolyshaperError::invalid_workpiece_dimensions(400.0, 300.0),
    ]
}

#[test]
fn test_io_failure_scenario() {
    let err = PolyshaperError::io("design.svg", "permission denied");
    assert_eq!(err.exit_code(), 1);
    let msg = err.render_message(&Identity);
    assert!(msg.contains("design.svg"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn test_unrecognized_element_scenario() {
    let err = PolyshaperError::unrecognized_element("polygon");
    assert_eq!(err.exit_code(), 2);
    assert!(err.render_message(&Identity).contains("polygon"));
}

#[test]
fn test_invalid_cutting_path_scenario() {
    let err = PolyshaperError::invalid_cutting_path("path is not closed");
    assert_eq!(err.exit_code(), 3);
    assert!(err.render_message(&Identity).contains("path is not closed"));
}

#[test]
fn test_invalid_workpiece_dimensions_scenario() {
    let err = PolyshaperError::invalid_workpiece_dimensions(400.0, 300.0);
    assert_eq!(err.exit_code(), 4);
    let msg = err.render_message(&Identity);
    assert!(msg.contains("400.0"));
    assert!(msg.contains("300.0"));
}

#[test]
fn test_dimension_rounding() {
    let err = PolyshaperError::invalid_workpiece_dimensions(300.0, 200.456);
    let msg = err.render_message(&Identity);
    assert!(msg.contains("300.0X200.5"), "got: {msg}");
    assert!(!msg.contains("200.456"));
}

#[test]
fn test_exit_code_invariant_under_arguments() {
    let cases = [
        (PolyshaperError::io("", ""), 1),
        (PolyshaperError::io("a/b/c.svg", "disk full"), 1),
        (PolyshaperError::unrecognized_element(""), 2),
        (PolyshaperError::unrecognized_element("text"), 2),
        (PolyshaperError::invalid_cutting_path("self-intersecting"), 3),
        (PolyshaperError::invalid_workpiece_dimensions(0.1, 1e6), 4),
    ];
    for (err, code) in cases {
        assert_eq!(err.exit_code(), code, "{err:?}");
    }
}

#[test]
fn test_render_is_idempotent_and_deterministic() {
    for (a, b) in one_of_each().into_iter().zip(one_of_each()) {
        assert_eq!(a.render_message(&Identity), a.render_message(&Identity));
        assert_eq!(a.render_message(&Identity), b.render_message(&Identity));
    }
}

#[test]
fn test_variant_codes_unique() {
    let codes: HashSet<i32> = one_of_each().iter().map(PolyshaperError::exit_code).collect();
    assert_eq!(codes.len(), ErrorCode::ALL.len());
    for code in ErrorCode::ALL {
        assert!(codes.contains(&code.exit_code()));
    }
}

#[test]
fn test_exit_code_round_trips_through_status() {
    for err in one_of_each() {
        assert_eq!(ErrorCode::try_from(err.exit_code()), Ok(err.code()));
    }
}

#[test]
fn test_foreign_status_falls_back_with_code() {
    let unknown = ErrorCode::try_from(101).unwrap_err();
    assert_eq!(unknown, UnknownErrorCode(101));
    assert!(unknown.render_message(&Identity).contains("101"));
}

#[test]
fn test_translated_lead_keeps_fields() {
    let italian = |msgid: &str| match msgid {
        "Invalid cutting path, reason: " => "Percorso di taglio non valido, motivo: ".to_string(),
        other => other.to_string(),
    };
    let err = PolyshaperError::invalid_cutting_path("path is not closed");
    assert_eq!(
        err.render_message(&italian),
        "Percorso di taglio non valido, motivo: path is not closed"
    );
}

#[test]
fn test_failure_serializes_with_kind_tag() {
    let err = PolyshaperError::invalid_workpiece_dimensions(400.0, 300.0);
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "invalid_workpiece_dimensions");
    assert_eq!(json["machine_width"], 400.0);

    let back: PolyshaperError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn test_oversized_piece_reported_end_to_end() {
    let machine = MachineEnvelope::new(400.0, 300.0);
    let outline = vec![dvec2(0.0, 0.0), dvec2(450.0, 0.0), dvec2(450.0, 100.0)];

    let err = machine.check_piece(&outline[..]).unwrap_err();
    let mut stderr = Vec::new();
    report(&err, &Identity, &mut stderr).unwrap();

    assert_eq!(err.exit_code(), 4);
    assert_eq!(
        String::from_utf8(stderr).unwrap().trim_end(),
        "Piece too big: maximum allowed dimensions for the selected machine is 400.0X300.0"
    );
}

#[test]
fn test_first_failure_wins_when_collecting() {
    let machine = MachineEnvelope::new(100.0, 100.0);
    let pieces = [
        Bounds2::new(dvec2(0.0, 0.0), dvec2(50.0, 50.0)),
        Bounds2::new(dvec2(0.0, 0.0), dvec2(150.0, 50.0)),
        Bounds2::new(dvec2(0.0, 0.0), dvec2(50.0, 250.0)),
    ];
    let checked: Result<Vec<()>, PolyshaperError> =
        pieces.iter().map(|p| machine.check(p)).collect();
    assert_eq!(
        checked.unwrap_err(),
        PolyshaperError::invalid_workpiece_dimensions(100.0, 100.0)
    );
}
