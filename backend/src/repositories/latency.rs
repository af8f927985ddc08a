use std::time::Duration;

/// Artificial delay applied after a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    #[default]
    None,
    Fixed(Duration),
}

impl Latency {
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Latency::None
        } else {
            Latency::Fixed(Duration::from_millis(millis))
        }
    }

    pub async fn wait(&self) {
        if let Latency::Fixed(delay) = self {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_millis_is_none() {
        assert_eq!(Latency::from_millis(0), Latency::None);
        assert_eq!(
            Latency::from_millis(250),
            Latency::Fixed(Duration::from_millis(250))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_latency_sleeps() {
        let started = tokio::time::Instant::now();
        Latency::Fixed(Duration::from_secs(1)).wait().await;
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn none_returns_immediately() {
        let started = tokio::time::Instant::now();
        Latency::None.wait().await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
