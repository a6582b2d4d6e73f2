use kadry_core::db::open_db_in_memory;
use kadry_core::{
    RepoError, SortField, SqliteTeacherRepository, TeacherDraft, TeacherRepository,
};

fn draft(last_name: &str, experience_years: i64, snils: &str) -> TeacherDraft {
    TeacherDraft {
        last_name: last_name.to_string(),
        first_name: "Ivan".to_string(),
        patronymic: None,
        academic_degree: None,
        administrative_position: None,
        experience_years,
        snils: Some(snils.to_string()),
    }
}

fn repo() -> SqliteTeacherRepository {
    SqliteTeacherRepository::new(open_db_in_memory().unwrap())
}

#[test]
fn add_uses_the_engine_assigned_sequence() {
    let mut repo = repo();

    let first = repo.add(&draft("Ivanov", 5, "112-233-445 95")).unwrap();
    let second = repo.add(&draft("Petrov", 3, "123-456-789 64")).unwrap();
    assert_eq!(first.teacher_id(), 1);
    assert_eq!(second.teacher_id(), 2);

    // AUTOINCREMENT never reuses a deleted id, unlike the file backends.
    assert!(repo.delete(2).unwrap());
    let third = repo.add(&draft("Sidorov", 1, "200-200-200 36")).unwrap();
    assert_eq!(third.teacher_id(), 3);
}

#[test]
fn get_by_id_round_trips_every_field() {
    let mut repo = repo();
    let mut full = draft("Petrova", 12, "112-233-445 95");
    full.first_name = "Anna".to_string();
    full.patronymic = Some("Sergeevna".to_string());
    full.academic_degree = Some("Dr. Sci.".to_string());
    full.administrative_position = Some("Dean".to_string());
    let added = repo.add(&full).unwrap();

    let loaded = repo.get_by_id(added.teacher_id()).unwrap().unwrap();
    assert_eq!(loaded.last_name(), "Petrova");
    assert_eq!(loaded.patronymic(), Some("Sergeevna"));
    assert_eq!(loaded.academic_degree(), Some("Dr. Sci."));
    assert_eq!(loaded.administrative_position(), Some("Dean"));
    assert_eq!(loaded.experience_years(), 12);
    assert_eq!(loaded.snils(), "11223344595");

    assert!(repo.get_by_id(999).unwrap().is_none());
}

#[test]
fn listing_pages_in_id_order_and_runs_out_cleanly() {
    let mut repo = repo();
    repo.add(&draft("Ivanov", 5, "112-233-445 95")).unwrap();
    repo.add(&draft("Petrov", 3, "123-456-789 64")).unwrap();
    repo.add(&draft("Sidorov", 1, "200-200-200 36")).unwrap();

    let page_one = repo.get_k_n_short_list(2, 1).unwrap();
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_one[0].teacher_id(), 1);

    let page_two = repo.get_k_n_short_list(2, 2).unwrap();
    assert_eq!(page_two.len(), 1);

    assert!(repo.get_k_n_short_list(5, 2).unwrap().is_empty());
    assert!(repo.get_k_n_short_list(2, 0).unwrap().is_empty());
}

#[test]
fn sort_returns_an_ordered_snapshot() {
    let mut repo = repo();
    repo.add(&draft("Sidorov", 1, "112-233-445 95")).unwrap();
    repo.add(&draft("Ivanov", 5, "123-456-789 64")).unwrap();
    repo.add(&draft("Petrov", 3, "200-200-200 36")).unwrap();

    let by_name = repo.sort_by_field(SortField::LastName).unwrap();
    let names: Vec<&str> = by_name.iter().map(|t| t.last_name()).collect();
    assert_eq!(names, ["Ivanov", "Petrov", "Sidorov"]);

    // Natural listing order stays by id; the snapshot does not persist.
    let listing = repo.get_k_n_short_list(3, 1).unwrap();
    assert_eq!(listing[0].last_name(), "Sidorov");
}

#[test]
fn update_and_delete_report_absence_as_results() {
    let mut repo = repo();
    repo.add(&draft("Ivanov", 5, "112-233-445 95")).unwrap();

    assert!(repo
        .update(42, &draft("Petrov", 3, "123-456-789 64"))
        .unwrap()
        .is_none());
    assert_eq!(repo.count().unwrap(), 1);

    let updated = repo
        .update(1, &draft("Petrov", 7, "123-456-789 64"))
        .unwrap()
        .unwrap();
    assert_eq!(updated.teacher_id(), 1);
    assert_eq!(updated.experience_years(), 7);

    assert!(repo.delete(1).unwrap());
    assert!(!repo.delete(1).unwrap());
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn add_validates_before_any_sql_mutation() {
    let mut repo = repo();
    let err = repo.add(&draft("Ivanov", 5, "112-233-445 96")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn invalid_persisted_rows_are_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO teachers (last_name, first_name, experience_years, snils)
         VALUES ('Ivanov', 'Ivan', 5, 'not-a-snils');",
        [],
    )
    .unwrap();

    let repo = SqliteTeacherRepository::new(conn);
    let err = repo.get_by_id(1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn save_is_a_no_op_for_the_relational_backend() {
    let mut repo = repo();
    repo.add(&draft("Ivanov", 5, "112-233-445 95")).unwrap();
    repo.save().unwrap();
    assert_eq!(repo.count().unwrap(), 1);
}
