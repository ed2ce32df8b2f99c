use std::collections::HashMap;

use serde_json::json;

use super::*;

fn make_location() -> LocationDetails {
    let mut hours = HashMap::new();
    hours.insert("monday".to_string(), "8:00-17:00".to_string());
    hours.insert("saturday".to_string(), "9:00-13:00".to_string());
    LocationDetails {
        latitude: Some(39.103_119),
        longitude: Some(-84.512_016),
        description: Some("Main distribution branch".to_string()),
        hours,
    }
}

#[test]
fn product_info_decodes_minimal_payload() {
    let info = ProductInfoResponse::from_value(json!({
        "brand_id": "123",
        "spin_assets": [
            {"id": "s1", "frames": ["a.jpg", "b.jpg"], "base_url": "http://x"}
        ]
    }))
    .expect("decode failed");

    assert_eq!(info.brand_id.as_deref(), Some("123"));
    assert_eq!(info.spin_assets.len(), 1);
    assert_eq!(info.spin_assets[0].id.as_deref(), Some("s1"));
    assert_eq!(info.spin_assets[0].frames, vec!["a.jpg", "b.jpg"]);
    assert_eq!(info.spin_assets[0].base_url.as_deref(), Some("http://x"));
}

#[test]
fn product_info_empty_object_decodes_all_defaults() {
    let info = ProductInfoResponse::from_value(json!({})).expect("decode failed");

    assert!(info.brand_id.is_none());
    assert!(info.brand_name.is_none());
    assert!(info.line_code.is_none());
    assert!(info.part_number.is_none());
    assert!(info.spin_assets.is_empty());
    assert!(info.documents.is_empty());
    assert!(info.attributes.is_empty());
}

#[test]
fn product_info_collections_decode_element_wise() {
    let info = ProductInfoResponse::from_value(json!({
        "brand_id": "77",
        "brand_name": "BWD Automotive",
        "line_code": "BWD",
        "part_number": "PSW144",
        "spin_assets": [
            {"id": "s1", "frames": ["0.jpg", "90.jpg", "180.jpg"], "base_url": "http://cdn/s1"},
            {"id": "s2", "frames": [], "base_url": null}
        ],
        "documents": [
            {"type": "msds", "title": "Safety data", "format": "pdf", "language": "en",
             "url": "http://cdn/msds.pdf"},
            {"title": "Install guide"},
            {}
        ],
        "attributes": [
            {"name": "Terminal Gender", "value": "Male", "group": 1, "sequence": 2},
            {"name": "Color", "value": "Black"}
        ]
    }))
    .expect("decode failed");

    assert_eq!(info.spin_assets.len(), 2);
    assert_eq!(info.documents.len(), 3);
    assert_eq!(info.attributes.len(), 2);

    assert_eq!(info.spin_assets[0].frames.len(), 3);
    assert!(info.spin_assets[1].frames.is_empty());
    assert!(info.spin_assets[1].base_url.is_none());

    assert_eq!(info.documents[0].kind.as_deref(), Some("msds"));
    assert_eq!(info.documents[0].format.as_deref(), Some("pdf"));
    assert_eq!(info.documents[1].title.as_deref(), Some("Install guide"));
    assert!(info.documents[1].kind.is_none());
    assert!(info.documents[2].url.is_none());

    assert_eq!(info.attributes[0].group, Some(1));
    assert_eq!(info.attributes[0].sequence, Some(2));
    assert!(info.attributes[1].group.is_none());
    assert!(info.attributes[1].sequence.is_none());
}

#[test]
fn product_info_malformed_element_fails_the_whole_decode() {
    let result = ProductInfoResponse::from_value(json!({
        "documents": [{"title": "ok"}, {"title": 7}]
    }));
    assert!(result.is_err(), "a malformed element must not be dropped");
}

#[test]
fn product_info_from_json_matches_from_value() {
    let info = ProductInfoResponse::from_json(r#"{"brand_id": "123", "part_number": "PSW144"}"#)
        .expect("decode failed");
    assert_eq!(info.brand_id.as_deref(), Some("123"));
    assert_eq!(info.part_number.as_deref(), Some("PSW144"));
}

#[test]
fn document_wire_type_key_maps_to_kind() {
    let doc = Document::from_value(json!({"type": "brochure", "url": "http://cdn/b.pdf"}))
        .expect("decode failed");
    assert_eq!(doc.kind.as_deref(), Some("brochure"));
    assert_eq!(doc.url.as_deref(), Some("http://cdn/b.pdf"));
}

#[test]
fn info_attribute_wrong_sequence_type_fails() {
    let result = InfoAttribute::from_value(json!({"name": "Color", "sequence": "first"}));
    assert!(result.is_err());
}

#[test]
fn asset_image_decodes_partial_resolutions() {
    let image =
        AssetImage::from_value(json!({"primary": true, "large_path": "L"})).expect("decode failed");

    assert!(image.primary);
    assert_eq!(image.large.as_deref(), Some("L"));
    assert!(image.medium.is_none());
    assert!(image.thumb.is_none());
}

#[test]
fn asset_image_absent_primary_defaults_to_false() {
    let image = AssetImage::from_value(json!({"thumb_path": "t.jpg"})).expect("decode failed");
    assert!(!image.primary);
    assert_eq!(image.thumb.as_deref(), Some("t.jpg"));
}

#[test]
fn asset_image_wrong_primary_type_fails() {
    let result = AssetImage::from_value(json!({"primary": "yes"}));
    assert!(result.is_err());
}

#[test]
fn asset_decodes_image_group() {
    let asset = Asset::from_value(json!({
        "type": "packaging",
        "images": [
            {"primary": true, "large_path": "front-l.jpg", "thumb_path": "front-t.jpg"},
            {"large_path": "back-l.jpg"}
        ]
    }))
    .expect("decode failed");

    assert_eq!(asset.kind.as_deref(), Some("packaging"));
    assert_eq!(asset.images.len(), 2);
    assert!(asset.images[0].primary);
    assert!(!asset.images[1].primary);
}

#[test]
fn spin_asset_preserves_frame_order() {
    let spin = SpinAsset::from_value(json!({
        "id": "s1",
        "frames": ["000.jpg", "030.jpg", "060.jpg", "090.jpg"],
        "base_url": "http://cdn/spin/s1"
    }))
    .expect("decode failed");

    assert_eq!(spin.frames, vec!["000.jpg", "030.jpg", "060.jpg", "090.jpg"]);
}

#[test]
fn spin_asset_response_unwraps_envelope() {
    let response = SpinAssetResponse::from_value(json!({
        "spin_assets": [{"id": "s1"}, {"id": "s2"}]
    }))
    .expect("decode failed");

    assert_eq!(response.spin_assets.len(), 2);
    assert_eq!(response.spin_assets[1].id.as_deref(), Some("s2"));
}

#[test]
fn spin_asset_response_missing_key_decodes_empty() {
    let response = SpinAssetResponse::from_value(json!({})).expect("decode failed");
    assert!(response.spin_assets.is_empty());
}

#[test]
fn location_decodes_coordinates_and_hours() {
    let location = LocationDetails::from_value(json!({
        "latitude": 39.103119,
        "longitude": -84.512016,
        "description": "Main distribution branch",
        "hours": {"monday": "8:00-17:00", "saturday": "9:00-13:00"}
    }))
    .expect("decode failed");

    assert_eq!(location.latitude, Some(39.103_119));
    assert_eq!(location.longitude, Some(-84.512_016));
    assert_eq!(location.hours.len(), 2);
    assert_eq!(
        location.hours.get("monday").map(String::as_str),
        Some("8:00-17:00")
    );
}

#[test]
fn location_missing_fields_decode_to_defaults() {
    let location = LocationDetails::from_value(json!({})).expect("decode failed");
    assert!(location.latitude.is_none());
    assert!(location.longitude.is_none());
    assert!(location.description.is_none());
    assert!(location.hours.is_empty());
}

#[test]
fn location_non_numeric_latitude_fails() {
    let result = LocationDetails::from_value(json!({"latitude": "not-a-number"}));
    assert!(result.is_err(), "a string latitude must be a coercion failure");
}

#[test]
fn location_round_trips_through_to_value() {
    let location = make_location();
    let decoded = LocationDetails::from_value(location.to_value()).expect("decode failed");
    assert_eq!(decoded, location);
}

#[test]
fn location_round_trips_with_all_defaults() {
    let location = LocationDetails::default();
    let decoded = LocationDetails::from_value(location.to_value()).expect("decode failed");
    assert_eq!(decoded, location);
}

#[test]
fn location_to_value_writes_wire_keys() {
    let value = make_location().to_value();
    let object = value.as_object().expect("expected a JSON object");
    assert!(object.contains_key("latitude"));
    assert!(object.contains_key("longitude"));
    assert!(object.contains_key("description"));
    assert!(object.contains_key("hours"));
}
