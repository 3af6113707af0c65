//! 스키마 문서 파일 로딩 및 병합
//!
//! 절대 경로 목록을 받아 문서를 하나씩 읽고 변환한 뒤, 테이블 이름
//! 기준으로 하나의 맵으로 병합합니다. 같은 이름의 테이블이 여러 문서에
//! 등장하면 나중 문서의 테이블이 이깁니다 (경고 없음 — 호출자 주의).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::builder::ModelBuilder;
use super::document::SchemaDocument;
use super::table::Table;

/// 스키마 로더
pub struct SchemaLoader;

impl SchemaLoader {
    /// 여러 문서 파일을 읽어 하나의 테이블 맵으로 병합
    ///
    /// 입력 순서대로 처리하며, 어느 한 파일이라도 실패하면 전체가
    /// 실패합니다. 부분 결과는 제공하지 않습니다.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<HashMap<String, Table>> {
        let mut merged = HashMap::new();

        for path in paths {
            let tables = Self::load_file(path.as_ref())?;
            // 같은 테이블 이름은 나중 문서가 덮어씀
            merged.extend(tables);
        }

        tracing::debug!(sources = paths.len(), tables = merged.len(), "schema documents merged");

        Ok(merged)
    }

    /// 문서 파일 한 개를 읽어 테이블 맵으로 변환
    ///
    /// 경로는 절대 경로여야 하며, 검사는 어떤 I/O보다도 먼저 수행됩니다.
    pub fn load_file(path: &Path) -> Result<HashMap<String, Table>> {
        if !path.is_absolute() {
            return Err(Error::InvalidSource {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path).map_err(|source| Error::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;

        let document: SchemaDocument =
            serde_yaml::from_str(&raw).map_err(|source| Error::MalformedDocument {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            database = %document.database,
            tables = document.tables.len(),
            "schema document loaded"
        );

        ModelBuilder::build(&document)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn write_schema(dir: &tempfile::TempDir, name: &str, yaml: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(
            &dir,
            "shop.yaml",
            r#"
database: shop
tables:
  - name: users
    columns:
      - name: id
        indices:
          - type: primary
            name: PRIMARY
"#,
        );

        let tables = SchemaLoader::load_all(&[path]).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables["users"].db, "shop");
        assert!(tables["users"].primary_key_column().is_some());
    }

    #[test]
    fn test_load_all_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_schema(
            &dir,
            "first.yaml",
            r#"
database: a
tables:
  - name: t1
    columns:
      - name: from_first
"#,
        );
        let second = write_schema(
            &dir,
            "second.yaml",
            r#"
database: b
tables:
  - name: t1
    columns:
      - name: from_second
"#,
        );

        let merged = SchemaLoader::load_all(&[first, second]).unwrap();
        assert_eq!(merged.len(), 1);

        // 두 번째 문서의 t1이 첫 번째를 완전히 대체
        let t1 = &merged["t1"];
        assert_eq!(t1.db, "b");
        assert!(t1.find_column("from_second").is_some());
        assert!(t1.find_column("from_first").is_none());
    }

    #[test]
    fn test_relative_path_rejected_before_read() {
        // 존재 여부와 무관하게 상대 경로는 즉시 거부
        let err = SchemaLoader::load_all(&[Path::new("schema.yaml")]).unwrap_err();
        match err {
            Error::InvalidSource { path } => {
                assert_eq!(path, PathBuf::from("schema.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");

        let err = SchemaLoader::load_file(&missing).unwrap_err();
        match err {
            Error::ReadSource { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_document_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(&dir, "bad.yaml", "tables: 3");

        let err = SchemaLoader::load_file(&path).unwrap_err();
        match err {
            Error::MalformedDocument { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_primary_key_propagates_from_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(
            &dir,
            "orders.yaml",
            r#"
database: shop
tables:
  - name: orders
    columns:
      - name: id
        indices:
          - type: primary
            name: PRIMARY
      - name: id2
        indices:
          - type: primary
            name: PRIMARY
"#,
        );

        let err = SchemaLoader::load_all(&[path]).unwrap_err();
        match err {
            Error::DuplicatePrimaryKey { table } => assert_eq!(table, "orders"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_source_list_yields_empty_map() {
        let merged = SchemaLoader::load_all::<PathBuf>(&[]).unwrap();
        assert!(merged.is_empty());
    }
}
