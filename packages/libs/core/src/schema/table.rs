//! 테이블 모델
//!
//! 인덱스 분류가 끝난 테이블의 최종 형태입니다. 컬럼의 단일 소유자는
//! `columns` 목록이며, primary key와 인덱스 그룹은 컬럼 데이터를
//! 복제하지 않고 `columns` 안의 위치(usize)로 참조합니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::column::Column;

/// 테이블 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// 소속 데이터베이스 이름
    pub db: String,

    /// 테이블 이름
    pub name: String,

    /// 컬럼 목록 (선언 순서 유지, 컬럼의 단일 소유자)
    pub columns: Vec<Column>,

    /// primary key 컬럼 위치 (없을 수 있음, 최대 하나)
    pub primary_key: Option<usize>,

    /// unique 인덱스 그룹 (인덱스 이름 -> 컬럼 위치 목록)
    pub unique_index: HashMap<String, Vec<usize>>,

    /// 일반(secondary) 인덱스 그룹 (인덱스 이름 -> 컬럼 위치 목록)
    pub normal_index: HashMap<String, Vec<usize>>,
}

impl Table {
    /// 빈 테이블 생성
    pub fn new(db: String, name: String) -> Self {
        Table {
            db,
            name,
            columns: Vec::new(),
            primary_key: None,
            unique_index: HashMap::new(),
            normal_index: HashMap::new(),
        }
    }

    /// primary key 컬럼 조회
    pub fn primary_key_column(&self) -> Option<&Column> {
        self.primary_key.map(|pos| &self.columns[pos])
    }

    /// unique 인덱스 그룹의 컬럼들 (선언 순서)
    pub fn unique_index_columns(&self, index_name: &str) -> Option<Vec<&Column>> {
        self.unique_index
            .get(index_name)
            .map(|group| group.iter().map(|&pos| &self.columns[pos]).collect())
    }

    /// 일반 인덱스 그룹의 컬럼들 (선언 순서)
    pub fn normal_index_columns(&self, index_name: &str) -> Option<Vec<&Column>> {
        self.normal_index
            .get(index_name)
            .map(|group| group.iter().map(|&pos| &self.columns[pos]).collect())
    }

    /// 이름으로 컬럼 조회
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// 모든 컬럼 이름 (선언 순서)
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// 해당 컬럼이 primary key인지
    pub fn is_primary_key_column(&self, column_name: &str) -> bool {
        self.primary_key_column()
            .is_some_and(|c| c.name == column_name)
    }

    /// 해당 컬럼이 단독 unique 인덱스를 갖는지
    pub fn has_unique_index(&self, column_name: &str) -> bool {
        self.unique_index.values().any(|group| {
            group.len() == 1 && self.columns[group[0]].name == column_name
        })
    }
}
