//! 스키마 문서 중간 표현
//!
//! YAML 문서 한 개를 그대로 본뜬 구조체들입니다. 파싱 한 번 동안만
//! 존재하는 일시적 표현이며, `ModelBuilder`가 `Table` 모델로 변환한 뒤
//! 버려집니다. 모든 필드는 누락을 허용합니다 (누락 시 기본값).

use serde::Deserialize;

use super::column::ColumnDefault;

/// 스키마 문서 루트
///
/// 입력 단위 하나(파일 하나)에 해당합니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaDocument {
    /// 데이터베이스 이름
    #[serde(default)]
    pub database: String,

    /// 테이블 목록 (선언 순서 유지)
    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

/// 테이블 선언
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableSpec {
    /// 테이블 이름
    #[serde(default)]
    pub name: String,

    /// 컬럼 목록 (선언 순서 유지)
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// 컬럼 선언
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColumnSpec {
    /// 컬럼 이름
    #[serde(default)]
    pub name: String,

    /// 논리적 데이터 타입
    #[serde(default, rename = "dataType")]
    pub data_type: String,

    /// 물리적 컬럼 타입 문자열
    #[serde(default, rename = "columnType")]
    pub column_type: String,

    /// 코드 생성 태그
    #[serde(default)]
    pub tags: Vec<String>,

    /// 옵셔널 여부
    #[serde(default, rename = "isOptional")]
    pub is_optional: bool,

    /// NULL 허용 여부 (원본 문자열 그대로 보존)
    #[serde(default, rename = "isNullAble")]
    pub is_null_able: String,

    /// 이 컬럼이 속한 인덱스 선언 목록
    #[serde(default)]
    pub indices: Vec<IndexSpec>,

    /// 기본값 (없거나, 숫자/불리언/문자열)
    #[serde(default, rename = "columnDefault")]
    pub column_default: Option<ColumnDefault>,

    /// 주석
    #[serde(default)]
    pub comment: String,

    /// 부가 메타데이터 문자열
    #[serde(default)]
    pub extra: String,

    /// 테이블 내 1-based 위치 (검증 없이 그대로 전달)
    #[serde(default, rename = "ordinalPosition")]
    pub ordinal_position: u32,
}

/// 인덱스 선언
///
/// `kind`가 `primary`/`unique`가 아니면 이름 있는 일반(secondary)
/// 인덱스로 취급됩니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IndexSpec {
    /// 인덱스 종류 (`primary` | `unique` | 일반 인덱스 이름)
    #[serde(default, rename = "type")]
    pub kind: String,

    /// 인덱스 이름
    #[serde(default)]
    pub name: String,
}
