use leavedesk_types::{AbsenceType, FieldMask};
use pretty_assertions::assert_eq;

#[test]
fn join_keeps_insertion_order() {
    let mask = FieldMask::from(["name", "color", "isActive"]);
    assert_eq!(mask.join(), "name,color,isActive");
}

#[test]
fn single_field_has_no_separator() {
    assert_eq!(FieldMask::from(["name"]).join(), "name");
}

#[test]
fn empty_mask_joins_to_empty_string() {
    let mask = FieldMask::new();
    assert!(mask.is_empty());
    assert_eq!(mask.join(), "");
}

#[test]
fn duplicates_and_blanks_are_dropped() {
    let mask: FieldMask = ["name", "", "name", "color"].into_iter().collect();
    assert_eq!(mask.len(), 2);
    assert_eq!(mask.iter().collect::<Vec<_>>(), vec!["name", "color"]);
}

#[test]
fn builder_and_display() {
    let mask = FieldMask::new().with("reason").with("endDate");
    assert!(mask.contains("endDate"));
    assert_eq!(mask.to_string(), "reason,endDate");
}

#[test]
fn missing_from_reports_unset_fields() {
    let partial = AbsenceType {
        name: Some("Vacation".into()),
        color: Some("#00ff00".into()),
        ..Default::default()
    };
    let mask = FieldMask::from(["name", "description"]);
    assert_eq!(mask.missing_from(&partial).unwrap(), vec!["description".to_string()]);
}

#[test]
fn missing_from_is_empty_when_mask_is_covered() {
    let partial = AbsenceType {
        name: Some("X".into()),
        color: Some("Y".into()),
        ..Default::default()
    };
    let mask = FieldMask::from(["name"]);
    assert!(mask.missing_from(&partial).unwrap().is_empty());
}
