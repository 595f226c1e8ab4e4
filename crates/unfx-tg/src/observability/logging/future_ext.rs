use crate::prelude::*;
use async_trait::async_trait;
use easy_ext::ext;
use std::future::Future;
use std::time::{Duration, Instant};

#[ext(FutureExt)]
#[async_trait]
pub(crate) impl<F> F
where
    F: Future + Send,
{
    /// Logs how long it took for the future to complete on the `debug` level
    async fn with_duration_log<'m>(self, msg: &'m str) -> F::Output {
        let (output, duration) = self.with_duration().await;
        debug!(duration = tracing_duration(duration), "{msg}");
        output
    }

    async fn with_duration(self) -> (F::Output, Duration) {
        let start = Instant::now();
        let output = self.await;
        (output, start.elapsed())
    }
}
