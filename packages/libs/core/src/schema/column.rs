//! 컬럼 모델
//!
//! 문서의 컬럼 선언을 속성 변환 없이 그대로 담는 출력 모델입니다.
//! 컬럼의 정체성은 테이블 범위의 이름입니다.

use serde::{Deserialize, Serialize};

use super::document::ColumnSpec;

/// 컬럼 기본값
///
/// 문서 형식이 기본값의 타입을 제한하지 않으므로, 허용되는 스칼라
/// 형태를 닫힌 variant로 표현합니다. 기본값이 없는 경우는
/// `Option::None`으로 나타냅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnDefault {
    /// 불리언 기본값
    Bool(bool),

    /// 정수 기본값
    Int(i64),

    /// 부동소수점 기본값
    Float(f64),

    /// 문자열 기본값 (SQL 표현식 포함)
    String(String),
}

/// 컬럼 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// 컬럼 이름
    pub name: String,

    /// 논리적 데이터 타입
    pub data_type: String,

    /// 물리적 컬럼 타입 문자열
    pub column_type: String,

    /// 코드 생성 태그
    pub tags: Vec<String>,

    /// 옵셔널 여부
    pub is_optional: bool,

    /// NULL 허용 여부 (원본 문자열 그대로)
    pub is_null_able: String,

    /// 기본값
    pub column_default: Option<ColumnDefault>,

    /// 주석
    pub comment: String,

    /// 부가 메타데이터 문자열
    pub extra: String,

    /// 테이블 내 1-based 위치
    pub ordinal_position: u32,
}

impl From<&ColumnSpec> for Column {
    fn from(spec: &ColumnSpec) -> Self {
        Column {
            name: spec.name.clone(),
            data_type: spec.data_type.clone(),
            column_type: spec.column_type.clone(),
            tags: spec.tags.clone(),
            is_optional: spec.is_optional,
            is_null_able: spec.is_null_able.clone(),
            column_default: spec.column_default.clone(),
            comment: spec.comment.clone(),
            extra: spec.extra.clone(),
            ordinal_position: spec.ordinal_position,
        }
    }
}

impl Column {
    /// NULL 허용 여부를 불리언으로 해석
    ///
    /// `is_null_able`은 원본 의미 보존을 위해 문자열("YES"/"NO")로
    /// 유지되며, 여기서만 해석합니다.
    pub fn nullable(&self) -> bool {
        self.is_null_able == "YES"
    }
}
