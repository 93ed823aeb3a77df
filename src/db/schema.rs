//! Database schema and migrations for the gallery.
//!
//! Migrations are applied in order when the database is opened.

/// Database migrations.
///
/// Each entry is a SQL script; the `schema_version` table records how many
/// have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: folders and files
    r#"
CREATE TABLE folders (
    folder_name TEXT PRIMARY KEY,
    elements    INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

-- folder_name is a logical reference only; uploads into an unknown
-- folder still create a row.
CREATE TABLE files (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name     TEXT NOT NULL,
    name_stripped TEXT NOT NULL,
    thumbnail     TEXT NOT NULL,
    folder_name   TEXT NOT NULL,
    created_at    TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_files_folder_name ON files(folder_name);
"#,
];
