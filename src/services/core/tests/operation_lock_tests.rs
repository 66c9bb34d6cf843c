use super::*;

#[tokio::test]
async fn test_free_lock_is_acquired() {
    let lock = OperationLock::new();
    assert!(!lock.is_busy());

    let _guard = lock.acquire().await.unwrap();
    assert!(lock.is_busy());
}

#[tokio::test]
async fn test_second_caller_is_turned_away() {
    let lock = OperationLock::new();
    let _guard = lock.acquire().await.unwrap();

    let shared = lock.clone();
    let result = shared.acquire().await;

    assert!(matches!(result, Err(CommandError::Busy)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Operation in progress. Please wait."
    );
}

#[tokio::test]
async fn test_guard_released_on_drop() {
    let lock = OperationLock::new();
    drop(lock.acquire().await.unwrap());

    assert!(!lock.is_busy());
    assert!(lock.acquire().await.is_ok());
}

#[tokio::test]
async fn test_waiter_gets_lock_released_within_wait() {
    let lock = OperationLock::new();
    let guard = lock.acquire().await.unwrap();

    let waiter = {
        let lock = lock.clone();
        tokio::spawn(async move { lock.acquire().await.map(drop) })
    };
    tokio::time::sleep(Duration::from_millis(5)).await;
    drop(guard);

    assert!(waiter.await.unwrap().is_ok());
}
