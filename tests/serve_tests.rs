use rattendance::cli::commands::serve::respond;
use rattendance::config::Config;
use serde_json::Value;

mod common;
use common::{rat, setup_test_db, temp_file};

fn config(name: &str) -> Config {
    Config {
        database: setup_test_db(name),
        strict_references: false,
        import_delimiter: ",".to_string(),
    }
}

fn call(cfg: &Config, line: &str) -> Value {
    respond(cfg, line)
}

#[test]
fn create_then_list_classes() {
    let cfg = config("serve_classes");

    let r = call(
        &cfg,
        r#"{"id":1,"method":"classes.create","params":{"class_id":1,"class_name":"CSE-A","department":"CSE"}}"#,
    );
    assert_eq!(r["id"], 1);
    assert_eq!(r["status"], 201);
    assert_eq!(r["ok"], true);
    assert_eq!(r["result"]["message"], "Class added");

    let r = call(
        &cfg,
        r#"{"id":2,"method":"classes.create","params":{"class_id":1,"class_name":"Dup"}}"#,
    );
    assert_eq!(r["status"], 400);
    assert_eq!(r["error"]["code"], "duplicate_key");
    assert_eq!(r["error"]["message"], "Class ID already exists");

    let r = call(&cfg, r#"{"id":3,"method":"classes.list"}"#);
    assert_eq!(r["status"], 200);
    let classes = r["result"].as_array().expect("array");
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["class_name"], "CSE-A");
}

#[test]
fn mark_and_get_attendance() {
    let cfg = config("serve_attendance");

    call(
        &cfg,
        r#"{"id":1,"method":"students.create","params":{"reg_no":"21CS001","student_name":"Asha","class_id":1}}"#,
    );
    let r = call(
        &cfg,
        r#"{"id":2,"method":"periods.create","params":{"class_id":1,"subject_name":"Maths","period_date":"2025-12-15","period_number":1}}"#,
    );
    assert_eq!(r["status"], 201);
    let period_id = r["result"]["period_id"].as_i64().expect("period id");

    let r = call(
        &cfg,
        &format!(
            r#"{{"id":3,"method":"attendance.mark","params":{{"period_id":{},"attendance":[{{"reg_no":"21CS001","is_present":true}}]}}}}"#,
            period_id
        ),
    );
    assert_eq!(r["status"], 200);
    assert_eq!(r["result"]["message"], "Attendance saved");
    assert_eq!(r["result"]["saved"], 1);

    let r = call(
        &cfg,
        r#"{"id":4,"method":"attendance.get","params":{"reg_no":"21CS001"}}"#,
    );
    assert_eq!(r["status"], 200);
    assert_eq!(r["result"]["total_classes"], 1);
    assert_eq!(r["result"]["attended_classes"], 1);
    assert_eq!(r["result"]["attendance_percentage"], 100.0);

    let r = call(
        &cfg,
        r#"{"id":5,"method":"attendance.get","params":{"reg_no":"NOPE"}}"#,
    );
    assert_eq!(r["status"], 404);
    assert_eq!(r["error"]["code"], "not_found");
}

#[test]
fn malformed_mark_batch_is_rejected() {
    let cfg = config("serve_bad_mark");

    let r = call(
        &cfg,
        r#"{"id":"a","method":"attendance.mark","params":{"period_id":1,"attendance":[{"reg_no":"X","is_present":true},{"reg_no":"Y"}]}}"#,
    );
    assert_eq!(r["id"], "a");
    assert_eq!(r["status"], 400);
    assert_eq!(r["error"]["code"], "invalid_input");
}

#[test]
fn import_requires_a_file() {
    let cfg = config("serve_import");

    let r = call(&cfg, r#"{"id":1,"method":"students.import","params":{}}"#);
    assert_eq!(r["status"], 400);
    assert!(r["error"]["message"].as_str().expect("msg").contains("No file provided"));

    let r = call(
        &cfg,
        r#"{"id":2,"method":"students.import","params":{"file":""}}"#,
    );
    assert!(r["error"]["message"].as_str().expect("msg").contains("No file selected"));

    let csv = temp_file("serve_import", "csv", b"reg,name,class\nA1,Ann,1\nB2,Bob,1\n");
    let line = serde_json::json!({
        "id": 3,
        "method": "students.import",
        "params": { "file": csv },
    })
    .to_string();
    let r = call(&cfg, &line);
    assert_eq!(r["status"], 201);
    assert_eq!(r["result"]["added"], 2);
    assert_eq!(r["result"]["skipped"], 0);
}

#[test]
fn unknown_method_and_bad_json() {
    let cfg = config("serve_errors");

    let r = call(&cfg, r#"{"id":9,"method":"students.delete"}"#);
    assert_eq!(r["status"], 404);
    assert_eq!(r["error"]["code"], "not_implemented");

    let r = call(&cfg, "{not json");
    assert_eq!(r["id"], Value::Null);
    assert_eq!(r["status"], 400);
    assert_eq!(r["error"]["code"], "bad_json");
}

#[test]
fn serve_answers_one_line_per_request() {
    let db_path = setup_test_db("serve_stdio");

    let input = concat!(
        r#"{"id":1,"method":"health"}"#,
        "\n\n",
        r#"{"id":2,"method":"classes.create","params":{"class_id":5,"class_name":"CIV"}}"#,
        "\n",
        r#"{"id":3,"method":"classes.list"}"#,
        "\n",
    );

    let output = rat()
        .args(["--db", &db_path, "serve"])
        .write_stdin(input)
        .output()
        .expect("run serve");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    let replies: Vec<Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["status"], 200);
    assert_eq!(replies[1]["status"], 201);
    assert_eq!(replies[2]["result"][0]["class_id"], 5);
}
