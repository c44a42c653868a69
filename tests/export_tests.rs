mod common;
use common::{add_project, out_path, pt, setup_home, store_path};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_xlsx_is_reloadable_as_store() {
    let home = setup_home("export_xlsx_reload");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "alice");
    add_project(&home, store.as_str(), "P-002", "2023", "bob");

    let out = out_path(&home, "export", "xlsx");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "xlsx", "--file", out.as_str(), "--force",
        ])
        .assert()
        .success();

    // The styled export carries the same sheet, columns and values as the
    // store format, so pointing the store at it yields the same table.
    pt(&home)
        .args([
            "--store", out.as_str(), "--user", "admin", "--password", "admin", "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("P-001"))
        .stdout(predicate::str::contains("P-002"))
        .stdout(predicate::str::contains("2024-01-10"))
        .stdout(predicate::str::contains("2 of 2 project(s)."));
}

#[test]
fn test_export_xlsx_respects_filter() {
    let home = setup_home("export_xlsx_filter");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "");
    add_project(&home, store.as_str(), "P-002", "2023", "");

    let out = out_path(&home, "filtered", "xlsx");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "xlsx", "--file", out.as_str(), "--year", "2024", "--force",
        ])
        .assert()
        .success();

    pt(&home)
        .args([
            "--store", out.as_str(), "--user", "admin", "--password", "admin", "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("P-001"))
        .stdout(predicate::str::contains("1 of 1 project(s)."));
}

#[test]
fn test_export_pdf_empty_store_renders_notice() {
    let home = setup_home("export_pdf_empty");
    let store = store_path(&home);

    pt(&home)
        .args(["--test", "--store", store.as_str(), "init"])
        .assert()
        .success();

    let out = out_path(&home, "empty", "pdf");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "pdf", "--file", out.as_str(), "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("No data."));
    assert!(!text.contains("Project Code"));
}

#[test]
fn test_export_pdf_contains_table() {
    let home = setup_home("export_pdf_table");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "alice");

    let out = out_path(&home, "table", "pdf");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "pdf", "--file", out.as_str(), "--force",
        ])
        .assert()
        .success();

    let text = String::from_utf8_lossy(&fs::read(&out).expect("read exported pdf")).to_string();
    assert!(text.contains("Project Code"));
    assert!(text.contains("P-001"));
}

#[test]
fn test_export_ics_bulk() {
    let home = setup_home("export_ics_bulk");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "alice");
    add_project(&home, store.as_str(), "P-002", "2024", "bob");

    let out = out_path(&home, "bulk", "ics");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "ics", "--file", out.as_str(), "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported ics");
    assert_eq!(content.matches("BEGIN:VCALENDAR").count(), 1);
    assert_eq!(content.matches("BEGIN:VEVENT").count(), 2);
    // All-day events end one day after the stored Project End.
    assert!(content.contains("DTSTART;VALUE=DATE:20240110"));
    assert!(content.contains("DTEND;VALUE=DATE:20240113"));
}

#[test]
fn test_export_ics_single_row() {
    let home = setup_home("export_ics_single");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "alice");
    add_project(&home, store.as_str(), "P-002", "2024", "bob");

    let out = out_path(&home, "single", "ics");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "ics", "--file", out.as_str(), "--row", "1", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported ics");
    assert_eq!(content.matches("BEGIN:VEVENT").count(), 1);
    assert!(content.contains("UID:P-002@projtrack"));
}

#[test]
fn test_export_row_rejects_non_ics_formats() {
    let home = setup_home("export_row_non_ics");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "");

    let out = out_path(&home, "bad", "csv");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "csv", "--file", out.as_str(), "--row", "0", "--force",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--row only applies to ics"));
}

#[test]
fn test_export_csv_has_fixed_columns() {
    let home = setup_home("export_csv");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "alice, bob");

    let out = out_path(&home, "projects", "csv");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "csv", "--file", out.as_str(), "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let header = content.lines().next().unwrap();
    assert_eq!(
        header,
        "Year,Project Code,Project Name,Location,Project Start,Project End,Project Team"
    );
    assert!(content.contains("2024-01-10"));
    assert!(content.contains("\"alice, bob\""));
}

#[test]
fn test_export_json_uses_column_names() {
    let home = setup_home("export_json");
    let store = store_path(&home);

    add_project(&home, store.as_str(), "P-001", "2024", "alice");

    let out = out_path(&home, "projects", "json");

    pt(&home)
        .args([
            "--store", store.as_str(), "--user", "admin", "--password", "admin", "export", "--format",
            "json", "--file", out.as_str(), "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"Project Code\": \"P-001\""));
    assert!(content.contains("\"Project Start\": \"2024-01-10\""));
}
