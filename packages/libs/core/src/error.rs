//! 공통 에러 타입
//!
//! 스키마 코어 전체에서 사용되는 에러 타입을 정의합니다.
//! 모든 에러는 호출자에게 그대로 전파되며, 부분 결과는 제공하지 않습니다.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Modelkit 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    /// 스키마 문서 경로가 절대 경로가 아님
    #[error("{} is not a valid path", path.display())]
    InvalidSource { path: PathBuf },

    /// 스키마 문서를 읽을 수 없음
    #[error("failed to read schema file {}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 스키마 문서가 기대한 구조로 역직렬화되지 않음
    #[error("malformed schema document {}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// 한 테이블에 primary 인덱스가 둘 이상 선언됨
    #[error("multiple primary key in table {table}")]
    DuplicatePrimaryKey { table: String },
}
