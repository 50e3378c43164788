//! Redis cache backend
//!
//! Each operation opens its own connection bounded by the configured timeout,
//! which is also applied to reads and writes on that connection. No retries.

use super::{CacheBackend, CacheError};
use crate::infrastructure::config::CacheSettings;
use redis::{
    Client, Connection, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisError,
};
use std::time::Duration;
use tracing::debug;

pub struct RedisCache {
    client: Client,
    timeout: Duration,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Build a client from settings. No connection is made until first use.
    pub fn open(settings: &CacheSettings) -> Result<Self, CacheError> {
        let client = Client::open(connection_info(settings)).map_err(|e| {
            CacheError::Backend(format!(
                "invalid cache address {}:{}: {}",
                settings.host, settings.port, e
            ))
        })?;

        Ok(RedisCache {
            client,
            timeout: settings.timeout(),
        })
    }

    fn connect(&self, timeout: Duration) -> Result<Connection, CacheError> {
        let conn = self
            .client
            .get_connection_with_timeout(timeout)
            .map_err(classify)?;
        conn.set_read_timeout(Some(timeout)).map_err(classify)?;
        conn.set_write_timeout(Some(timeout)).map_err(classify)?;
        Ok(conn)
    }
}

/// Database 0 on the configured host. The password is passed through as is;
/// an empty one means no AUTH.
fn connection_info(settings: &CacheSettings) -> ConnectionInfo {
    ConnectionInfo {
        addr: ConnectionAddr::Tcp(settings.host.clone(), settings.port),
        redis: RedisConnectionInfo {
            db: 0,
            password: (!settings.password.is_empty()).then(|| settings.password.clone()),
            ..RedisConnectionInfo::default()
        },
    }
}

/// Connection-level failures mean the tier is unreachable; anything else is a
/// real backend error.
fn classify(err: RedisError) -> CacheError {
    if err.is_timeout()
        || err.is_io_error()
        || err.is_connection_refusal()
        || err.is_connection_dropped()
    {
        CacheError::Unavailable(err.to_string())
    } else {
        CacheError::Backend(err.to_string())
    }
}

impl CacheBackend for RedisCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connect(self.timeout)?;
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query(&mut conn)
            .map_err(classify)?;
        debug!(key, hit = value.is_some(), "cache get");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut conn = self.connect(self.timeout)?;
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl {
            cmd.arg("EX").arg(ttl.as_secs().max(1));
        }
        cmd.query::<()>(&mut conn).map_err(classify)?;
        debug!(key, "cache set");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connect(self.timeout)?;
        redis::cmd("DEL")
            .arg(key)
            .query::<i64>(&mut conn)
            .map_err(classify)?;
        Ok(())
    }

    fn ping(&self, timeout: Duration) -> Result<(), CacheError> {
        let mut conn = self.connect(timeout)?;
        let reply: String = redis::cmd("PING").query(&mut conn).map_err(classify)?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(CacheError::Backend(format!("unexpected PING reply: {}", reply)))
        }
    }
}
