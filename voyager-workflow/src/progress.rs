use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Messages cycled while a search is in flight. Purely cosmetic; the cycle
/// has no effect on the eventual transition and is not a timeout.
pub const SEARCH_MESSAGES: [&str; 6] = [
    "Searching multiple airports...",
    "Finding best flight deals...",
    "Comparing hotel options...",
    "Calculating prices in your currency...",
    "Sorting results by value...",
    "Almost ready...",
];

pub const SEARCH_MESSAGE_INTERVAL: Duration = Duration::from_millis(1200);

/// Indeterminate-progress utility: cycles a fixed message list on a fixed
/// interval for as long as the owning state lasts.
///
/// The ticker task is aborted when the handle is dropped, so tying the
/// handle's lifetime to the loading state guarantees no ticks leak into
/// later states.
pub struct ProgressTicker {
    handle: JoinHandle<()>,
    rx: watch::Receiver<String>,
}

impl ProgressTicker {
    pub fn start(messages: &[&str], interval: Duration) -> Self {
        let messages: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
        let initial = messages.first().cloned().unwrap_or_default();
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            if messages.is_empty() {
                return;
            }
            let mut ticker = tokio::time::interval(interval);
            // The first interval tick fires immediately; skip it so updates
            // land on interval boundaries.
            ticker.tick().await;
            let mut index = 0usize;
            loop {
                ticker.tick().await;
                index = (index + 1) % messages.len();
                if tx.send(messages[index].clone()).is_err() {
                    break;
                }
            }
        });

        Self { handle, rx }
    }

    /// Receiver for the current progress message.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }

    pub fn current(&self) -> String {
        self.rx.borrow().clone()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_messages_cycle_on_interval() {
        let ticker = ProgressTicker::start(&SEARCH_MESSAGES, Duration::from_millis(100));
        assert_eq!(ticker.current(), SEARCH_MESSAGES[0]);

        tokio::time::sleep(Duration::from_millis(110)).await;
        assert_eq!(ticker.current(), SEARCH_MESSAGES[1]);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticker.current(), SEARCH_MESSAGES[2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_wraps_around() {
        let ticker = ProgressTicker::start(&["one", "two"], Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(160)).await;
        // Three ticks past the initial message: one -> two -> one -> two.
        assert_eq!(ticker.current(), "two");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let ticker = ProgressTicker::start(&["one", "two"], Duration::from_millis(50));
        let rx = ticker.subscribe();
        drop(ticker);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*rx.borrow(), "one");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_message_list_is_inert() {
        let ticker = ProgressTicker::start(&[], Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticker.current(), "");
    }
}
