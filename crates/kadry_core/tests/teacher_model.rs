use kadry_core::{Teacher, TeacherParams};

fn params() -> TeacherParams {
    TeacherParams {
        teacher_id: 7,
        last_name: "  Petrova ".to_string(),
        first_name: "Anna".to_string(),
        patronymic: Some("  Sergeevna ".to_string()),
        academic_degree: Some(" Dr. Sci. (Phys.-Math.) ".to_string()),
        administrative_position: Some("   ".to_string()),
        experience_years: 12,
        snils: Some("112-233-445 95".to_string()),
    }
}

#[test]
fn construction_normalizes_every_field() {
    let teacher = Teacher::new(params()).unwrap();

    assert_eq!(teacher.teacher_id(), 7);
    assert_eq!(teacher.last_name(), "Petrova");
    assert_eq!(teacher.first_name(), "Anna");
    assert_eq!(teacher.patronymic(), Some("Sergeevna"));
    assert_eq!(teacher.academic_degree(), Some("Dr. Sci. (Phys.-Math.)"));
    // Whitespace-only optional text normalizes to absent.
    assert_eq!(teacher.administrative_position(), None);
    assert_eq!(teacher.experience_years(), 12);
    assert_eq!(teacher.snils(), "11223344595");
}

#[test]
fn constructor_rejects_out_of_contract_values() {
    let mut bad_id = params();
    bad_id.teacher_id = 0;
    assert_eq!(Teacher::new(bad_id).unwrap_err().field, "teacher_id");

    let mut bad_name = params();
    bad_name.last_name = "Petrova42".to_string();
    assert_eq!(Teacher::new(bad_name).unwrap_err().field, "last_name");

    let mut bad_experience = params();
    bad_experience.experience_years = -1;
    assert_eq!(
        Teacher::new(bad_experience).unwrap_err().field,
        "experience_years"
    );

    let mut missing_snils = params();
    missing_snils.snils = None;
    assert_eq!(Teacher::new(missing_snils).unwrap_err().field, "snils");
}

#[test]
fn setters_apply_constructor_validation() {
    let mut teacher = Teacher::new(params()).unwrap();

    teacher.set_last_name(" Sidorova ").unwrap();
    assert_eq!(teacher.last_name(), "Sidorova");

    let err = teacher.set_first_name("").unwrap_err();
    assert_eq!(err.field, "first_name");
    // Failed validation leaves the previous value untouched.
    assert_eq!(teacher.first_name(), "Anna");

    teacher.set_patronymic(Some("  ")).unwrap();
    assert_eq!(teacher.patronymic(), None);

    assert!(teacher.set_experience_years(-3).is_err());
    assert_eq!(teacher.experience_years(), 12);

    teacher.set_snils("123-456-789 64").unwrap();
    assert_eq!(teacher.snils(), "12345678964");
}

#[test]
fn equality_is_defined_by_snils_alone() {
    let a = Teacher::new(params()).unwrap();

    let mut other = params();
    other.teacher_id = 99;
    other.last_name = "Completely".to_string();
    other.first_name = "Different".to_string();
    let b = Teacher::new(other).unwrap();
    assert_eq!(a, b);

    let mut third = params();
    third.snils = Some("123-456-789 64".to_string());
    let c = Teacher::new(third).unwrap();
    assert_ne!(a, c);
}

#[test]
fn formatting_helpers_label_present_fields() {
    let teacher = Teacher::new(params()).unwrap();

    assert_eq!(teacher.full_name(), "Petrova Anna Sergeevna");
    assert_eq!(teacher.short_info(), "7: Petrova Anna Sergeevna (12 yrs)");

    let full = teacher.full_info();
    assert!(full.contains("academic degree: Dr. Sci. (Phys.-Math.)"));
    assert!(!full.contains("administrative position"));
    assert!(full.contains("snils: 11223344595"));
}
