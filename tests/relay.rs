//! JSON 요청/응답 형식 테스트.
use pump_efficiency_toolbox::pump::{calculate, CalculationInput, CalculationResult};
use pump_efficiency_toolbox::relay::{
    decode_reply, encode_request, handle_request, CalculationResponse, RelayError,
    STATUS_BAD_REQUEST, STATUS_OK,
};

#[test]
fn request_uses_form_cell_names() {
    let input = CalculationInput {
        flow_unit_selector: 2,
        flow_value: 1200.0,
        specific_speed: 35.0,
        pump_type: "B".to_string(),
    };
    let body = encode_request(&input).expect("encode");
    let value: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(value["C5"], 2);
    assert_eq!(value["C6"], 1200.0);
    assert_eq!(value["F5"], 35.0);
    assert_eq!(value["F6"], "B");
}

#[test]
fn handle_request_returns_response_record() {
    let reply = handle_request(r#"{"C5":1,"C6":1.0,"F5":50,"F6":"A"}"#);
    assert_eq!(reply.status, STATUS_OK);
    assert!(reply.is_success());
    let res = decode_reply(reply.status, &reply.body).expect("decode");
    assert!((res.efficiency_optimum - 85.134).abs() < 1e-9);
    assert_eq!(res.actual_efficiency, "85.13 ± 1.78 %");

    let value: serde_json::Value = serde_json::from_str(&reply.body).expect("json");
    for field in [
        "efficiencyOptimum",
        "efficiencyCorrection",
        "efficiencyDeviation",
        "actualEfficiency",
    ] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
}

#[test]
fn calculation_failure_maps_to_bad_request() {
    let reply = handle_request(r#"{"C5":5,"C6":1.0,"F5":50,"F6":"A"}"#);
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    match decode_reply(reply.status, &reply.body) {
        Err(RelayError::Remote { status, detail }) => {
            assert_eq!(status, STATUS_BAD_REQUEST);
            assert!(detail.contains('5'), "detail={detail}");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[test]
fn padded_pump_code_maps_to_bad_request() {
    let reply = handle_request(r#"{"C5":1,"C6":1.0,"F5":50,"F6":"  A "}"#);
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    match decode_reply(reply.status, &reply.body) {
        Err(RelayError::Remote { detail, .. }) => {
            assert!(detail.starts_with("Invalid Pump Type (F6)"), "detail={detail}");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[test]
fn integral_float_unit_selector_is_accepted() {
    let reply = handle_request(r#"{"C5":1.0,"C6":1.0,"F5":50,"F6":"A"}"#);
    assert_eq!(reply.status, STATUS_OK, "body={}", reply.body);
    let res = decode_reply(reply.status, &reply.body).expect("decode");
    assert_eq!(res.actual_efficiency, "85.13 ± 1.78 %");

    let reply = handle_request(r#"{"C5":3.0,"C6":1000.0,"F5":50,"F6":"A"}"#);
    assert_eq!(reply.status, STATUS_OK, "body={}", reply.body);
}

#[test]
fn fractional_unit_selector_is_malformed() {
    for body in [
        r#"{"C5":1.5,"C6":1.0,"F5":50,"F6":"A"}"#,
        r#"{"C5":"1","C6":1.0,"F5":50,"F6":"A"}"#,
    ] {
        let reply = handle_request(body);
        assert_eq!(reply.status, STATUS_BAD_REQUEST);
        let detail = match decode_reply(reply.status, &reply.body) {
            Err(RelayError::Remote { detail, .. }) => detail,
            other => panic!("expected remote error, got {other:?}"),
        };
        assert!(detail.starts_with("Malformed request"), "detail={detail}");
    }
}

#[test]
fn integral_float_selector_out_of_range_is_invalid_unit() {
    let reply = handle_request(r#"{"C5":5.0,"C6":1.0,"F5":50,"F6":"A"}"#);
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    assert!(reply.body.contains("Invalid Unit for Flow (C5): 5"), "{}", reply.body);
}

#[test]
fn malformed_request_maps_to_bad_request() {
    let reply = handle_request("{not json");
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    assert!(!reply.is_success());
}

#[test]
fn non_json_error_body_is_passed_through() {
    match decode_reply(502, "Bad Gateway\n") {
        Err(RelayError::Remote { status, detail }) => {
            assert_eq!(status, 502);
            assert_eq!(detail, "Bad Gateway");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[test]
fn success_with_garbage_body_is_decode_error() {
    assert!(matches!(
        decode_reply(200, "<html>"),
        Err(RelayError::Decode(_))
    ));
}

#[test]
fn response_numbers_survive_the_wire() {
    let input = CalculationInput {
        flow_unit_selector: 4,
        flow_value: 3170.0,
        specific_speed: 97.3,
        pump_type: "F".to_string(),
    };
    let result = calculate(&input).expect("calc");
    let body = serde_json::to_string(&CalculationResponse::from(result)).expect("encode");
    let decoded: CalculationResponse = serde_json::from_str(&body).expect("decode");
    assert_eq!(CalculationResult::from(&decoded), result);
}
