//! Conditional fan-out over a batch.
//!
//! Uses rayon when the `parallel` feature is enabled and the config asks for
//! it. Output order always matches input order.

use crate::config::ValuationConfig;

/// Maps `f` over `items`, in parallel when
/// [`ValuationConfig::should_parallelize`] allows it.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &ValuationConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
