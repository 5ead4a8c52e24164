use person_registry::models::{PLACEHOLDER, format_records};
use person_registry::{GovtIdKind, PersonRecord};

const RESPONSE: &str = r#"[
    {
        "id": 1,
        "name": "Asha Rao",
        "age": "30",
        "gender": "female",
        "mobileNumber": "9876543210",
        "govtId": "AADHAR",
        "aadhaarNumber": "1234-5678-9012",
        "panNumber": "ABCDE1234F",
        "guardianType": "D/O",
        "guardianName": "Mohan Rao",
        "address": "12 MG Road",
        "city": "Bengaluru",
        "state": "Karnataka",
        "country": "India",
        "pincode": 560001,
        "nationality": "Indian"
    },
    {
        "id": "2",
        "name": "Ravi",
        "age": null,
        "gender": "undefined",
        "govtId": "PAN",
        "panNumber": "undefined",
        "guardianName": "",
        "address": "undefined",
        "extra": {"ignored": true}
    },
    {}
]"#;

#[test]
fn test_decode_listing_response() {
    let records: Vec<PersonRecord> = serde_json::from_str(RESPONSE).unwrap();
    assert_eq!(records.len(), 3);

    let asha = &records[0];
    assert_eq!(asha.id.as_deref(), Some("1"));
    assert_eq!(asha.age, Some(30));
    assert_eq!(asha.pincode.as_deref(), Some("560001"));
    assert_eq!(asha.govt_id_kind, Some(GovtIdKind::Aadhaar));
    assert_eq!(asha.govt_id(), Some("1234-5678-9012"));

    let ravi = &records[1];
    assert_eq!(ravi.gender, None);
    assert_eq!(ravi.govt_id(), None);
    assert_eq!(ravi.guardian_name, None);

    assert_eq!(records[2], PersonRecord::default());
}

#[test]
fn test_format_decoded_records() {
    let records: Vec<PersonRecord> = serde_json::from_str(RESPONSE).unwrap();
    let rows = format_records(&records);

    assert_eq!(rows[0].age_sex, "30Y/F");
    assert_eq!(rows[0].guardian, "D/O Mohan Rao");
    assert_eq!(rows[0].govt_id_type, "AADHAR");
    assert_eq!(
        rows[0].address,
        "12 MG Road, Bengaluru, Karnataka, India, (560001)."
    );

    assert_eq!(rows[1].age_sex, "--Y/--");
    assert_eq!(rows[1].guardian, PLACEHOLDER);
    assert_eq!(rows[1].govt_id, PLACEHOLDER);
    assert_eq!(rows[1].address, PLACEHOLDER);
    assert_eq!(rows[2].name, PLACEHOLDER);
}
