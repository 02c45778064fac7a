/// Билет запроса `fetch_all`. Номер монотонно растёт в пределах одного стора.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Результат применения ответа к состоянию стора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Коллекция заменена целиком, ошибка сброшена
    Applied,
    /// Ошибка сохранена, предыдущая коллекция осталась на месте
    Failed,
    /// Ответ пришёл позже более нового запроса и отброшен
    Stale,
}

/// Состояние кеша одной коллекции.
///
/// Concurrent fetches are not deduplicated. Every request takes a ticket and
/// a response is applied only when its ticket is newer than the last applied
/// one, so a slow early response can never overwrite newer data. Loading is
/// tracked as a counter of outstanding requests rather than a single flag.
#[derive(Debug, Clone)]
pub struct StoreState<E> {
    items: Vec<E>,
    error: Option<String>,
    in_flight: usize,
    issued: u64,
    applied: u64,
}

impl<E> Default for StoreState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            in_flight: 0,
            issued: 0,
            applied: 0,
        }
    }
}

impl<E> StoreState<E> {
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.in_flight += 1;
        FetchTicket(self.issued)
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<E>, String>,
    ) -> FetchOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        if ticket.0 <= self.applied {
            return FetchOutcome::Stale;
        }
        self.applied = ticket.0;

        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                self.error = Some(e);
                FetchOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_replaces_collection_and_clears_error() {
        let mut s = StoreState::<u32>::default();
        let t = s.begin_fetch();
        assert_eq!(s.finish_fetch(t, Err("boom".into())), FetchOutcome::Failed);
        assert_eq!(s.error(), Some("boom"));

        let t = s.begin_fetch();
        assert_eq!(s.finish_fetch(t, Ok(vec![1, 2])), FetchOutcome::Applied);
        assert_eq!(s.items(), &[1, 2]);
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_failure_keeps_stale_items() {
        let mut s = StoreState::default();
        let t = s.begin_fetch();
        s.finish_fetch(t, Ok(vec!["a", "b"]));

        let t = s.begin_fetch();
        assert_eq!(s.finish_fetch(t, Err("HTTP 500".into())), FetchOutcome::Failed);
        assert_eq!(s.items(), &["a", "b"]);
        assert_eq!(s.error(), Some("HTTP 500"));
    }

    #[test]
    fn test_slow_earlier_response_is_discarded() {
        let mut s = StoreState::default();
        let first = s.begin_fetch();
        let second = s.begin_fetch();

        assert_eq!(s.finish_fetch(second, Ok(vec!["new"])), FetchOutcome::Applied);
        assert_eq!(s.finish_fetch(first, Ok(vec!["old"])), FetchOutcome::Stale);
        assert_eq!(s.items(), &["new"]);
    }

    #[test]
    fn test_stale_error_does_not_overwrite_fresh_data() {
        let mut s = StoreState::default();
        let first = s.begin_fetch();
        let second = s.begin_fetch();

        s.finish_fetch(second, Ok(vec![1]));
        assert_eq!(s.finish_fetch(first, Err("late".into())), FetchOutcome::Stale);
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_loading_stays_true_until_every_fetch_finishes() {
        let mut s = StoreState::<u8>::default();
        assert!(!s.is_loading());
        let first = s.begin_fetch();
        let second = s.begin_fetch();

        s.finish_fetch(first, Ok(vec![]));
        assert!(s.is_loading());
        s.finish_fetch(second, Ok(vec![]));
        assert!(!s.is_loading());
    }
}
