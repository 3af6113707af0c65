//! 스키마 문서 -> 테이블 모델 변환
//!
//! 문서의 각 테이블 선언을 `Table` 모델로 변환하고, 컬럼별 인덱스
//! 선언을 primary/unique/normal로 분류합니다. 검증은 primary key 단일성
//! 하나뿐이며, 위반 시 문서 전체 변환이 실패합니다.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::column::Column;
use super::document::{SchemaDocument, TableSpec};
use super::table::Table;

/// 테이블 모델 빌더
pub struct ModelBuilder;

impl ModelBuilder {
    /// 문서 한 개를 테이블 이름 -> `Table` 맵으로 변환
    ///
    /// 같은 문서 안에 같은 이름의 테이블이 여러 번 선언되면
    /// 뒤에 선언된 테이블이 앞의 것을 덮어씁니다.
    pub fn build(document: &SchemaDocument) -> Result<HashMap<String, Table>> {
        let mut tables = HashMap::new();

        for spec in &document.tables {
            let table = Self::build_table(&document.database, spec)?;
            tables.insert(table.name.clone(), table);
        }

        Ok(tables)
    }

    /// 테이블 선언 한 개 변환
    fn build_table(db: &str, spec: &TableSpec) -> Result<Table> {
        let mut table = Table::new(db.to_string(), spec.name.clone());

        for column_spec in &spec.columns {
            // 인덱스 그룹은 컬럼을 복제하지 않고 columns 안의 위치로 참조
            let pos = table.columns.len();
            let column = Column::from(column_spec);

            for index in &column_spec.indices {
                match index.kind.as_str() {
                    "primary" => {
                        if table.primary_key.is_some() {
                            return Err(Error::DuplicatePrimaryKey {
                                table: spec.name.clone(),
                            });
                        }
                        table.primary_key = Some(pos);
                    }
                    "unique" => {
                        table
                            .unique_index
                            .entry(index.name.clone())
                            .or_default()
                            .push(pos);
                    }
                    _ => {
                        table
                            .normal_index
                            .entry(index.name.clone())
                            .or_default()
                            .push(pos);
                    }
                }
            }

            // 인덱스 유무와 무관하게 컬럼 목록에는 항상 추가
            table.columns.push(column);
        }

        Ok(table)
    }
}
