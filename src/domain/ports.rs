use async_trait::async_trait;

/// An asynchronous per-element transformation driven by
/// [`spawn_map`](crate::core::async_map::spawn_map).
#[async_trait]
pub trait Worker<T, R>: Send + Sync {
    async fn work(&self, item: T, index: usize) -> anyhow::Result<R>;
}
