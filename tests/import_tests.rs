use rattendance::core::{ImportLogic, StudentLogic};
use rattendance::db::pool::DbPool;
use rattendance::errors::AppError;

mod common;
use common::open_pool;

fn pool_with_one_student(name: &str) -> DbPool {
    let mut pool = open_pool(name);
    StudentLogic::create(&mut pool, "21CS001", "Asha", 1, false).expect("student");
    pool
}

#[test]
fn good_rows_are_added_duplicates_skipped_short_rows_ignored() {
    let mut pool = pool_with_one_student("import_mixed");
    let csv = b"reg_no,student_name,class_id\n\
22CS001,Dara,1\n\
22CS002,Eli,1\n\
21CS001,Duplicate,1\n\
22CS003,Fay,2\n\
22CS004,Gus,2\n\
22CS005,Hana,2\n\
22CS006,Short\n";

    let tally = ImportLogic::import_students(&mut pool, csv, b',', false).expect("import");
    assert_eq!(tally.added, 5);
    assert_eq!(tally.skipped, 1);

    let students = StudentLogic::list(&mut pool, None).expect("list");
    assert_eq!(students.len(), 6);
    assert!(students.iter().all(|s| s.reg_no != "22CS006"));
    // existing student is untouched
    assert_eq!(students[0].student_name, "Asha");
}

#[test]
fn non_integer_class_and_blank_fields_are_skipped() {
    let mut pool = open_pool("import_invalid_rows");
    let csv = b"reg,name,class\nA1,Ann,one\n,Nobody,1\nB2,Bob,2\n";

    let tally = ImportLogic::import_students(&mut pool, csv, b',', false).expect("import");
    assert_eq!(tally.added, 1);
    assert_eq!(tally.skipped, 2);
}

#[test]
fn undecodable_payload_adds_nothing() {
    let mut pool = open_pool("import_undecodable");
    let payload = [b'r', b'e', b'g', b'\n', 0xff, 0xfe, b',', b'x', b',', b'1', b'\n'];

    let err = ImportLogic::import_students(&mut pool, &payload, b',', false)
        .expect_err("decode failure");
    assert!(matches!(err, AppError::DecodeFailure(_)));
    assert_eq!(err.status(), 400);
    assert!(err.to_string().starts_with("Error processing file:"));

    assert!(StudentLogic::list(&mut pool, None).expect("list").is_empty());
}

#[test]
fn custom_delimiter() {
    let mut pool = open_pool("import_semicolon");
    let csv = b"reg;name;class\nA1;Ann;1\nB2;Bob;1\n";

    let tally = ImportLogic::import_students(&mut pool, csv, b';', false).expect("import");
    assert_eq!(tally.added, 2);
    assert_eq!(tally.skipped, 0);
}

#[test]
fn strict_import_skips_unknown_classes() {
    let mut pool = open_pool("import_strict");
    let csv = b"reg,name,class\nA1,Ann,1\n";

    let tally = ImportLogic::import_students(&mut pool, csv, b',', true).expect("import");
    assert_eq!(tally.added, 0);
    assert_eq!(tally.skipped, 1);
}

#[test]
fn padded_fields_are_trimmed() {
    let mut pool = open_pool("import_padded");
    let csv = b"reg_no , student_name , class_id\n 22CS009 , Ivy , 3 \n";

    let tally = ImportLogic::import_students(&mut pool, csv, b',', false).expect("import");
    assert_eq!(tally.added, 1);
    assert_eq!(tally.skipped, 0);

    let students = StudentLogic::list(&mut pool, Some(3)).expect("list");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].reg_no, "22CS009");
    assert_eq!(students[0].student_name, "Ivy");
    assert_eq!(students[0].class_id, 3);
}
