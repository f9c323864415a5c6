//! Substring rewrite of path fragments inside the bundle's embedded
//! key-value store (`state.vscdb`).
//!
//! Values in `ItemTable` embed paths in up to three separator encodings:
//! forward slashes, single backslashes, and doubled backslashes (the last
//! two from JSON-escaped Windows paths). One UPDATE chains a REPLACE per
//! encoding so mixed values normalize fully, and the whole rewrite commits
//! as a single transaction.

use crate::error::{Result, WsmvError};
use rusqlite::{params, Connection};
use std::path::Path;

pub const STATE_DB_FILE: &str = "state.vscdb";
pub const STATE_DB_BACKUP_FILE: &str = "state.vscdb.backup";

const TABLE: &str = "ItemTable";
const COLUMN: &str = "value";

/// Replace `find` with `replace` (in all three separator encodings) in
/// every value of the store at `db_path`. Returns the affected row count.
///
/// A missing table or column leaves the store untouched and surfaces as
/// its own error so callers can tell "wrong store shape" from a failure.
pub fn replace_paths(db_path: &Path, find: &str, replace: &str) -> Result<usize> {
    let mut conn = Connection::open(db_path)?;

    let columns = table_columns(&conn, TABLE)?;
    if columns.is_empty() {
        return Err(WsmvError::StateTableMissing(TABLE.to_string()));
    }
    if !columns.iter().any(|c| c == COLUMN) {
        return Err(WsmvError::StateColumnMissing {
            table: TABLE.to_string(),
            column: COLUMN.to_string(),
        });
    }

    let find_backslash = find.replace('/', "\\");
    let replace_backslash = replace.replace('/', "\\");
    let find_escaped = find.replace('/', "\\\\");
    let replace_escaped = replace.replace('/', "\\\\");

    let tx = conn.transaction()?;
    let affected = tx.execute(
        "UPDATE ItemTable \
         SET value = REPLACE(REPLACE(REPLACE(value, ?1, ?2), ?3, ?4), ?5, ?6)",
        params![
            find,
            replace,
            find_backslash,
            replace_backslash,
            find_escaped,
            replace_escaped
        ],
    )?;
    tx.commit()?;

    Ok(affected)
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_db(dir: &Path, rows: &[(&str, &str)]) -> std::path::PathBuf {
        let db = dir.join(STATE_DB_FILE);
        let conn = Connection::open(&db).unwrap();
        conn.execute(
            "CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)",
            [],
        )
        .unwrap();
        for (key, value) in rows {
            conn.execute(
                "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .unwrap();
        }
        db
    }

    fn value_of(db: &Path, key: &str) -> String {
        let conn = Connection::open(db).unwrap();
        conn.query_row(
            "SELECT value FROM ItemTable WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn rewrites_all_three_separator_encodings() {
        let dir = tempfile::tempdir().unwrap();
        let db = fixture_db(
            dir.path(),
            &[
                ("fwd", r#"{"uri":"file:///C:/Users/alice/OneDrive/proj"}"#),
                ("single", "C:\\Users\\alice\\OneDrive\\proj"),
                ("escaped", r#"{"path":"C:\\Users\\alice\\OneDrive\\proj"}"#),
            ],
        );

        replace_paths(&db, "Users/alice/OneDrive", "Users/alice/Desktop").unwrap();

        assert_eq!(
            value_of(&db, "fwd"),
            r#"{"uri":"file:///C:/Users/alice/Desktop/proj"}"#
        );
        assert_eq!(value_of(&db, "single"), "C:\\Users\\alice\\Desktop\\proj");
        assert_eq!(
            value_of(&db, "escaped"),
            r#"{"path":"C:\\Users\\alice\\Desktop\\proj"}"#
        );
    }

    #[test]
    fn untouched_values_stay_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let db = fixture_db(dir.path(), &[("other", "no paths in here at all")]);

        replace_paths(&db, "Users/alice/OneDrive", "Users/alice/Desktop").unwrap();

        assert_eq!(value_of(&db, "other"), "no paths in here at all");
    }

    #[test]
    fn missing_table_is_its_own_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join(STATE_DB_FILE);
        Connection::open(&db)
            .unwrap()
            .execute("CREATE TABLE SomethingElse (x TEXT)", [])
            .unwrap();

        assert!(matches!(
            replace_paths(&db, "a", "b"),
            Err(WsmvError::StateTableMissing(_))
        ));
    }

    #[test]
    fn missing_column_is_its_own_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join(STATE_DB_FILE);
        Connection::open(&db)
            .unwrap()
            .execute("CREATE TABLE ItemTable (key TEXT, data TEXT)", [])
            .unwrap();

        assert!(matches!(
            replace_paths(&db, "a", "b"),
            Err(WsmvError::StateColumnMissing { .. })
        ));
    }
}
