//! # 서비스(비즈니스 로직) 모듈
//!
//! HTTP와 무관한 순수 로직을 모아둔 모듈입니다.
//! - `profile`: 활성 프로파일 목록에서 대표 프로파일 하나를 고르는 로직

pub mod profile;
