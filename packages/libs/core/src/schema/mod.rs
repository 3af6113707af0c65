//! 선언 스키마 문서 파싱 및 테이블 모델 생성
//!
//! # 개요
//!
//! 스키마는 데이터베이스와 테이블/컬럼을 나열하는 YAML 문서로 정의됩니다.
//! 이 모듈은 문서를 중간 표현(`SchemaDocument`)으로 역직렬화한 뒤,
//! 컬럼별 인덱스 선언을 primary/unique/normal로 분류하여
//! 테이블 이름 -> `Table` 맵으로 변환합니다.
//!
//! # 모듈 구조
//!
//! - `document`: 문서 중간 표현 (serde 역직렬화용)
//! - `column`: 컬럼 모델 및 기본값 표현
//! - `table`: 테이블 모델 (인덱스 분류 결과 포함)
//! - `builder`: 문서 -> 테이블 모델 변환
//! - `loader`: 문서 파일 로딩 및 병합

mod builder;
mod column;
mod document;
mod loader;
mod table;

pub use builder::ModelBuilder;
pub use column::{Column, ColumnDefault};
pub use document::{ColumnSpec, IndexSpec, SchemaDocument, TableSpec};
pub use loader::SchemaLoader;
pub use table::Table;
