use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

const ENV_HINTS: [&str; 2] = ["WORDLE_FIVE_THREADS", "RAYON_NUM_THREADS"];

/// Worker count and where it came from, for the startup banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadConfig {
    pub count: usize,
    pub source: String,
}

fn parse_env_threads(keys: &[&str]) -> Option<ThreadConfig> {
    for &key in keys {
        if let Ok(v) = std::env::var(key) {
            if let Ok(val) = v.parse::<usize>() {
                if val > 0 {
                    return Some(ThreadConfig {
                        count: val,
                        source: key.to_string(),
                    });
                }
            }
        }
    }
    None
}

impl ThreadConfig {
    /// An explicit non-zero count wins, then the environment, then the
    /// hardware.
    pub fn detect(explicit: Option<usize>) -> Self {
        if let Some(count) = explicit.filter(|&n| n > 0) {
            return ThreadConfig {
                count,
                source: "--threads".to_string(),
            };
        }

        if let Some(cfg) = parse_env_threads(&ENV_HINTS) {
            return cfg;
        }

        let fallback = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .max(1);

        ThreadConfig {
            count: fallback,
            source: "available_parallelism".to_string(),
        }
    }

    /// A dedicated pool, so concurrent callers (and tests) can each pick
    /// their own size without touching rayon's global pool.
    pub fn build_pool(&self) -> Result<ThreadPool> {
        ThreadPoolBuilder::new()
            .num_threads(self.count)
            .thread_name(|i| format!("wordle-five-worker-{i}"))
            .build()
            .with_context(|| format!("build rayon pool of {} threads", self.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_count_wins() {
        let cfg = ThreadConfig::detect(Some(3));
        assert_eq!(cfg.count, 3);
        assert_eq!(cfg.source, "--threads");
    }

    #[test]
    fn zero_falls_through() {
        let cfg = ThreadConfig::detect(Some(0));
        assert!(cfg.count > 0);
        assert_ne!(cfg.source, "--threads");
    }

    #[test]
    fn pool_has_requested_size() {
        let pool = ThreadConfig::detect(Some(2)).build_pool().unwrap();
        assert_eq!(pool.current_num_threads(), 2);
        let name = pool.install(|| std::thread::current().name().map(str::to_owned));
        assert!(name.unwrap().starts_with("wordle-five-worker-"));
    }
}
