//! Pool construction options.

use std::fmt;

/// Observer invoked once per transaction emitted during a selection.
///
/// The observer may read the transaction but must not mutate the pool; a
/// panicking observer aborts the selection and propagates to the caller.
pub type OnRead<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Construction-time options for [`PriorityMempool`].
///
/// The only recognized option today is the `on_read` observer.
///
/// [`PriorityMempool`]: crate::PriorityMempool
pub struct PoolOptions<T> {
    pub(crate) on_read: Option<OnRead<T>>,
}

impl<T> PoolOptions<T> {
    /// Options with every hook unset.
    pub fn new() -> Self {
        Self { on_read: None }
    }

    /// Install the read observer.
    pub fn with_on_read(mut self, hook: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_read = Some(Box::new(hook));
        self
    }
}

impl<T> Default for PoolOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PoolOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolOptions")
            .field("on_read", &self.on_read.is_some())
            .finish()
    }
}
