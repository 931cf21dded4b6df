use std::num::NonZeroUsize;

use super::limiter::ConnectionLimiter;

#[test]
fn test_unbounded_always_admits() {
    let limiter = ConnectionLimiter::unbounded();
    let permits: Vec<_> = (0..128).map(|_| limiter.try_admit()).collect();

    assert!(permits.iter().all(Option::is_some));
    assert_eq!(limiter.available(), None);
}

#[test]
fn test_limit_rejects_and_recovers() {
    let limiter = ConnectionLimiter::new(NonZeroUsize::new(2));

    let first = limiter.try_admit();
    let second = limiter.try_admit();
    assert!(first.is_some() && second.is_some());
    assert!(limiter.try_admit().is_none());
    assert_eq!(limiter.available(), Some(0));

    drop(first);
    assert_eq!(limiter.available(), Some(1));
    assert!(limiter.try_admit().is_some());
}

#[test]
fn test_pending_notices_are_capped() {
    let limiter = ConnectionLimiter::new(NonZeroUsize::new(1));
    let _served = limiter.try_admit().unwrap();

    let notice = limiter.try_notify();
    assert!(notice.is_some());
    assert!(limiter.try_notify().is_none());
    assert!(limiter.try_admit().is_none());

    drop(notice);
    assert!(limiter.try_notify().is_some());
}
