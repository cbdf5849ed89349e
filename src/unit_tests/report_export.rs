use crate::models::ctx::Ctx;
use crate::models::report_export::{ReportExport, Selected};
use crate::runtime::msg::{Action, ActionLoad};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::institute::Institute;
use crate::types::report::Report;
use crate::unit_tests::{TestEnv, NOW};
use chrono::{TimeZone, Utc};
use eiin_derive::Model;

fn institute() -> Institute {
    Institute {
        eiin_no: "118632".into(),
        institute_name: "Dhaka College".to_owned(),
        institute_name_bn: "ঢাকা কলেজ".to_owned(),
        institute_type_name: "College".to_owned(),
        year: Some(1841),
        division_name: "Dhaka".to_owned(),
        division_name_bn: "ঢাকা".to_owned(),
        district_name: "Dhaka".to_owned(),
        district_name_bn: "ঢাকা".to_owned(),
        thana_name: "Dhanmondi".to_owned(),
        thana_name_bn: "ধানমন্ডি".to_owned(),
        mouza_name: "Dhanmondi".to_owned(),
        mouza_name_bn: "ধানমন্ডি".to_owned(),
        mobile: Some("01711111111".to_owned()),
        email: Some("info@dhakacollege.edu.bd".to_owned()),
        submission_status: "Submitted".to_owned(),
        verification: "Verified".to_owned(),
        submission_date: Some("2024-01-15".to_owned()),
        ..Default::default()
    }
}

#[test]
fn report_rendering() {
    let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let report = Report::new(&institute(), generated_at);
    let expected = [
        "Institute Information Report",
        "",
        "Institute Name: Dhaka College",
        "Institute Name (Bengali): ঢাকা কলেজ",
        "EIIN Number: 118632",
        "Type: College",
        "Year: 1841",
        "",
        "Location:",
        "Division: Dhaka (ঢাকা)",
        "District: Dhaka (ঢাকা)",
        "Thana: Dhanmondi (ধানমন্ডি)",
        "Mouza: Dhanmondi (ধানমন্ডি)",
        "",
        "Contact Information:",
        "Mobile: 01711111111",
        "Email: info@dhakacollege.edu.bd",
        "",
        "Survey Information:",
        "Status: Submitted",
        "Verification: Verified",
        "Submission Date: 2024-01-15",
        "Circular Expiry: N/A",
        "",
        "Generated on: 2024-05-01 12:30:00 UTC",
    ]
    .join("\n");
    assert_eq!(report.content, expected);
    assert_eq!(report.file_name, "institute_118632_report.txt");
    assert_eq!(report.as_bytes(), expected.as_bytes());
}

#[test]
fn report_omits_missing_contact_fields() {
    let institute = Institute {
        mobile: None,
        email: None,
        submission_date: None,
        ..institute()
    };
    let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let report = Report::new(&institute, generated_at);
    assert!(!report.content.contains("Mobile:"));
    assert!(!report.content.contains("Email:"));
    assert!(report.content.contains("Submission Date: N/A"));
}

#[test]
fn actionload_report_export() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        report_export: ReportExport,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::ReportExport(Selected {
                institute: institute(),
            })),
        })
    });
    let model = runtime.model().unwrap();
    let report = model.report_export.report.as_ref().expect("report is set");
    assert_eq!(report.file_name, "institute_118632_report.txt");
    assert!(report.content.contains("Generated on: 2024-05-01 12:30:00 UTC"));
}
