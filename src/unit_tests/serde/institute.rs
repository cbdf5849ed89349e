use crate::types::institute::InstituteListResponse;

#[test]
fn institute_list_response() {
    let payload = r#"{
        "status": "success",
        "data": [{
            "eiinNo": 118632,
            "instituteName": "Dhaka College",
            "instituteNameBn": "ঢাকা কলেজ",
            "divisionCode": 30,
            "districtCode": "26",
            "isGovt": true,
            "someUnknownField": { "ignored": true }
        }]
    }"#;
    let response = serde_json::from_str::<InstituteListResponse>(payload).unwrap();
    let institute = response.into_first().expect("one record");
    assert_eq!(institute.eiin_no, "118632".into());
    assert_eq!(institute.institute_name, "Dhaka College");
    assert_eq!(institute.division_code, Some("30".to_owned()));
    assert_eq!(institute.district_code, Some("26".to_owned()));
    assert!(institute.is_govt);
    assert_eq!(institute.mobile, None);
}

#[test]
fn institute_list_response_without_success_status() {
    let payload = r#"{"status":"error","data":[{"eiinNo":"118632"}]}"#;
    let response = serde_json::from_str::<InstituteListResponse>(payload).unwrap();
    assert_eq!(
        response.into_first(),
        None,
        "Only a success marker counts as a hit"
    );
}

#[test]
fn institute_list_response_without_data() {
    let payload = r#"{"status":"success"}"#;
    let response = serde_json::from_str::<InstituteListResponse>(payload).unwrap();
    assert_eq!(response.into_first(), None);
}
