use fake::{Fake, Faker};
use lybic_domain::{
    Action, ActionResponse, DecodeOptions, Error, Length, MouseButtons, MouseClick, MouseDrag,
    Strictness, Wait,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn strict() -> DecodeOptions {
    DecodeOptions::default().strictness(Strictness::Strict)
}

#[test]
fn test_generated_actions_survive_strict_round_trip() {
    for _ in 0..256 {
        let fixture: Action = Faker.fake();
        let actual = Action::decode_with(&fixture.encode(), &strict()).unwrap();
        assert_eq!(actual, fixture);
    }
}

#[test]
fn test_generated_envelopes_survive_round_trip() {
    for _ in 0..32 {
        let fixture: ActionResponse = Faker.fake();
        let bytes = fixture.to_vec().unwrap();
        let actual = ActionResponse::from_slice(&bytes).unwrap();
        assert_eq!(actual, fixture);
    }
}

#[test]
fn test_click_wire_shape() {
    let (x, y) = (Length::pixel(100), Length::fraction(1, 2));
    let click = MouseClick::new(x, y, MouseButtons::LEFT);
    let fixture = Action::from(click.call_id("call_1"));
    let actual = String::from_utf8(fixture.to_vec().unwrap()).unwrap();
    let expected = concat!(
        r#"{"type":"mouse:click","#,
        r#""x":{"type":"px","value":100},"#,
        r#""y":{"type":"/","numerator":1,"denominator":2},"#,
        r#""button":1,"callId":"call_1"}"#,
    );
    assert_eq!(actual, expected);
}

#[test]
fn test_drag_from_bytes() {
    let fixture = br#"{
        "type": "mouse:drag",
        "startX": {"type": "px", "value": 10},
        "startY": {"type": "px", "value": 20},
        "endX": {"type": "/", "numerator": 3, "denominator": 4},
        "endY": {"type": "/", "numerator": 1, "denominator": 4},
        "holdKey": "shift"
    }"#;
    let actual = Action::from_slice(fixture).unwrap();
    let expected = Action::from(
        MouseDrag::new(
            Length::pixel(10),
            Length::pixel(20),
            Length::fraction(3, 4),
            Length::fraction(1, 4),
        )
        .hold_key("shift"),
    );
    assert_eq!(actual, expected);
}

#[test]
fn test_unknown_type_is_reported_verbatim() {
    let fixture = json!({"type": "unknown-thing", "x": 1});
    let actual = Action::decode(&fixture).unwrap_err();
    assert_eq!(actual.to_string(), "Unknown action type: 'unknown-thing'");
}

#[test]
fn test_envelope_failure_points_at_element() {
    let fixture = json!({
        "actions": [
            {"type": "wait", "duration": 100},
            {
                "type": "mouse:move",
                "x": {"type": "em", "value": 1},
                "y": {"type": "px", "value": 1}
            },
            {"type": "finished"}
        ]
    });
    let actual = ActionResponse::decode(&fixture).unwrap_err();
    let expected = concat!(
        "Failed to decode action #1 of the response: ",
        "Failed to decode x of mouse:move: ",
        "Unknown Length type 'em' in Length",
    );
    assert_eq!(actual.to_string(), expected);
}

#[test]
fn test_permissive_decode_normalises_sloppy_input() {
    let fixture = json!({"type": "wait", "duration": 12.7, "callId": 5, "extra": true});
    let actual = Action::decode(&fixture).unwrap().encode();
    let expected = json!({"type": "wait", "duration": 12});
    assert_eq!(actual, expected);
}

#[test]
fn test_strict_decode_rejects_sloppy_input() {
    let fixture = json!({"type": "wait", "duration": "12"});
    let actual = Action::decode_with(&fixture, &strict()).unwrap_err();
    assert!(matches!(actual, Error::InvalidField { field: "duration", .. }));
}

#[test]
fn test_wait_round_trip_keeps_call_id() {
    let fixture = Action::from(Wait::new(500).call_id("w"));
    let actual = Action::decode(&fixture.encode()).unwrap();
    assert_eq!(actual, fixture);
}
