// ==========================================
// 车辆段运营状态服务 - 通用记录仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 存储: record_kv 表 (resource + record_key -> payload_json)
// ==========================================
// 并发: 所有仓储共用一把连接锁，读改写在锁内完成，同一键的写入串行
// ==========================================

use crate::domain::types::ResourceKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

/// 单例资源在 record_kv 中使用的固定键
pub const SINGLETON_KEY: &str = "current";

// ==========================================
// 底层读写（供各仓储复用）
// ==========================================

fn load_payload(
    conn: &Connection,
    resource: ResourceKind,
    record_key: &str,
) -> RepositoryResult<Option<String>> {
    let payload = conn
        .query_row(
            "SELECT payload_json FROM record_kv WHERE resource = ?1 AND record_key = ?2",
            params![resource.to_db_str(), record_key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(payload)
}

fn store_payload(
    conn: &Connection,
    resource: ResourceKind,
    record_key: &str,
    payload_json: &str,
) -> RepositoryResult<()> {
    conn.execute(
        r#"
        INSERT INTO record_kv (resource, record_key, payload_json, updated_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(resource, record_key)
        DO UPDATE SET payload_json = excluded.payload_json, updated_at = excluded.updated_at
        "#,
        params![
            resource.to_db_str(),
            record_key,
            payload_json,
            chrono::Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

// ==========================================
// KeyedRecordRepository - 按键存储的记录仓储
// ==========================================
/// 按实体键（如列车号）存取整条记录
///
/// - 读取未知键返回 `T::default()`，不报错
/// - 写入为整条覆盖，无部分字段更新
pub struct KeyedRecordRepository<T> {
    conn: Arc<Mutex<Connection>>,
    resource: ResourceKind,
    _record: PhantomData<fn() -> T>,
}

impl<T> KeyedRecordRepository<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// 从已有连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>, resource: ResourceKind) -> Self {
        Self {
            conn,
            resource,
            _record: PhantomData,
        }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 按键查询
    ///
    /// # 返回
    /// - Ok(Some(T)): 已写入过的记录
    /// - Ok(None): 未写入过
    pub fn find(&self, record_key: &str) -> RepositoryResult<Option<T>> {
        let conn = self.get_conn()?;
        match load_payload(&conn, self.resource, record_key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// 按键查询，未命中时返回默认记录
    pub fn get_or_default(&self, record_key: &str) -> RepositoryResult<T> {
        Ok(self.find(record_key)?.unwrap_or_default())
    }

    /// 整条覆盖写入，返回写入的记录
    pub fn replace(&self, record_key: &str, record: T) -> RepositoryResult<T> {
        let payload_json = serde_json::to_string(&record)?;
        let conn = self.get_conn()?;
        store_payload(&conn, self.resource, record_key, &payload_json)?;
        Ok(record)
    }
}

// ==========================================
// SingletonRecordRepository - 全局单例记录仓储
// ==========================================
/// 全局唯一的当前记录（如信号/通信状态）
///
/// 首次写入前读取到的是 `T::default()`
pub struct SingletonRecordRepository<T> {
    inner: KeyedRecordRepository<T>,
}

impl<T> SingletonRecordRepository<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(conn: Arc<Mutex<Connection>>, resource: ResourceKind) -> Self {
        Self {
            inner: KeyedRecordRepository::new(conn, resource),
        }
    }

    /// 读取当前值
    pub fn get(&self) -> RepositoryResult<T> {
        self.inner.get_or_default(SINGLETON_KEY)
    }

    /// 覆盖当前值
    pub fn replace(&self, record: T) -> RepositoryResult<T> {
        self.inner.replace(SINGLETON_KEY, record)
    }
}
