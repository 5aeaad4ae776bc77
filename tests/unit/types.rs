//! Unit tests for the wire types.
//!
//! Tests PetFilter, AuthKey, Pet/PetList decoding and ApiResponse helpers.

use petfriends::{ApiResponse, AuthKey, Error, Pet, PetFilter, PetList, ResponseBody, StatusCode};
use serde_json::json;

#[test]
fn test_pet_filter_wire_values() {
    assert_eq!(PetFilter::All.as_str(), "");
    assert_eq!(PetFilter::MyPets.as_str(), "my_pets");
    assert_eq!(PetFilter::default(), PetFilter::All);
    assert_eq!(PetFilter::MyPets.to_string(), "my_pets");
}

#[test]
fn test_auth_key_debug_is_redacted() {
    let key = AuthKey::new("ea738148a1f19838e1c5d1413877f369");
    let debug = format!("{:?}", key);

    assert!(!debug.contains("ea738148"));
    assert_eq!(debug, "AuthKey(<32 bytes redacted>)");
}

#[test]
fn test_auth_key_from_text_body() {
    let response = ApiResponse::new(
        StatusCode::OK,
        ResponseBody::Text("<html>ok</html>".to_string()),
    );
    assert!(AuthKey::from_response(&response).is_none());
}

#[test]
fn test_pet_list_decoding() {
    let response = ApiResponse::new(
        StatusCode::OK,
        ResponseBody::Json(json!({
            "pets": [{
                "id": "p1",
                "name": "Белка",
                "animal_type": "Белка",
                "age": "1",
                "pet_photo": "data:image/jpeg;base64,/9j/",
                "user_id": "u1",
                "created_at": "1712345678.1"
            }]
        })),
    );

    let list: PetList = response.decode().unwrap();
    assert_eq!(list.pets.len(), 1);
    assert!(list.contains_id("p1"));
    assert!(!list.contains_id("p2"));
    assert!(list.pets[0].has_photo());
}

#[test]
fn test_decode_wrong_shape() {
    let response = ApiResponse::new(StatusCode::OK, ResponseBody::Json(json!({"key": "k"})));
    assert!(matches!(response.decode::<Pet>(), Err(Error::Decode(_))));
}

#[test]
fn test_decode_text_body() {
    let response = ApiResponse::new(
        StatusCode::FORBIDDEN,
        ResponseBody::Text("Forbidden".to_string()),
    );
    match response.decode::<PetList>() {
        Err(Error::UnexpectedBody(text)) => assert_eq!(text, "Forbidden"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_contains_key_on_non_object() {
    let body = ResponseBody::Json(json!(["key"]));
    assert!(!body.contains_key("key"));
}
