//! mdk-core: Modelkit 스키마 코어 라이브러리
//!
//! 이 크레이트는 선언 스키마 문서(YAML)를 코드 생성 파이프라인이 사용하는
//! 관계형 모델로 변환합니다. 생성된 모델을 실제 소스 코드로 렌더링하는
//! 단계는 상위 도구의 책임입니다.
//!
//! # 모듈 구조
//!
//! - `schema`: 스키마 문서 파싱 및 테이블 모델 생성
//! - `error`: 공통 에러 타입

pub mod error;
pub mod schema;

pub use error::{Error, Result};
