/// 検出リクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionTicket(u64);

/// 処理中の検出リクエストを1件だけ追跡する
///
/// 新しいリクエストを開始すると前のものは無効になり、
/// 後から届いた古い結果は `finish` で弾かれる。
#[derive(Debug, Default)]
pub struct DetectionTracker {
    issued: u64,
    in_flight: Option<u64>,
}

impl DetectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい検出を開始（処理中のものがあれば置き換える）
    pub fn begin(&mut self) -> DetectionTicket {
        self.issued += 1;
        if let Some(previous) = self.in_flight.replace(self.issued) {
            tracing::debug!(previous, current = self.issued, "superseding in-flight detection");
        }
        DetectionTicket(self.issued)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 結果を受け取る。最新のチケットなら `true` を返して処理中を解除
    pub fn finish(&mut self, ticket: DetectionTicket) -> bool {
        if self.in_flight == Some(ticket.0) {
            self.in_flight = None;
            true
        } else {
            tracing::debug!(ticket = ticket.0, "ignoring stale detection result");
            false
        }
    }

    pub fn cancel(&mut self) {
        self.in_flight = None;
    }
}
