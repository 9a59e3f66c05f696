//! 타입 레지스트리 — 이름으로 타입을 찾아 인스턴스를 만드는 조회 테이블
//!
//! 런타임 리플렉션 대신, 등록된 이름만 생성할 수 있습니다.
//! 등록되지 않은 이름은 [`Fault::TypeNotFound`]가 됩니다.

use std::any::{Any, type_name};
use std::collections::HashMap;

use tracing::debug;

use crate::error::Fault;

type Constructor = Box<dyn Fn() -> Box<dyn Any>>;

/// 이름 → 생성자 매핑
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<String, Constructor>,
}

impl TypeRegistry {
    /// 빈 레지스트리
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 타입 몇 가지가 등록된 레지스트리
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<String>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<Vec<i32>>();
        registry
    }

    /// `T`를 [`type_name`]으로 등록합니다.
    pub fn register<T: Any + Default>(&mut self) {
        self.register_with(type_name::<T>(), || Box::new(T::default()));
    }

    /// 임의의 이름과 생성자를 등록합니다. 같은 이름은 덮어씁니다.
    pub fn register_with<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Any> + 'static,
    {
        self.types.insert(name.into(), Box::new(constructor));
    }

    /// 등록된 이름 목록 (정렬됨)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 이름으로 인스턴스를 만듭니다.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Any>, Fault> {
        let constructor = self
            .types
            .get(name)
            .ok_or_else(|| Fault::TypeNotFound(name.to_owned()))?;
        debug!(name, "instantiating registered type");
        Ok(constructor())
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.names())
            .finish()
    }
}
