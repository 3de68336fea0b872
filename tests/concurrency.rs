use counter_shortener::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_shorten_yields_unique_resolvable_suffixes() {
    const TASKS: usize = 200;

    let shortener = Arc::new(Shortener::with_defaults());
    let store: Arc<dyn UrlStore> = Arc::new(InMemoryUrlStore::new());
    let service = Arc::new(LinkService::new(shortener.clone(), store));

    let handles: Vec<_> = (0..TASKS)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.shorten(&format!("site{i}.com")).await })
        })
        .collect();

    let mut pairs = Vec::with_capacity(TASKS);
    for handle in handles {
        pairs.push(handle.await.unwrap().unwrap());
    }

    let suffixes: HashSet<_> = pairs.iter().map(|p| p.short_suffix.clone()).collect();
    assert_eq!(suffixes.len(), TASKS);
    assert_eq!(shortener.counter(), 500 + TASKS as u64);

    for pair in pairs {
        let resolved = service.expand(&pair.short_suffix).await.unwrap();
        assert_eq!(resolved.base_url, pair.base_url);
    }
}

#[tokio::test]
async fn test_end_to_end_google() {
    let shortener = Arc::new(Shortener::with_defaults());
    let store = Arc::new(InMemoryUrlStore::new());

    let suffix = shortener.shorten_url("google.com").unwrap();
    assert_eq!(suffix, "0000085");

    store.save(&suffix, "google.com").await.unwrap();
    assert_eq!(
        store.load(&suffix).await.unwrap(),
        Some("google.com".to_string())
    );
    assert_eq!(store.load("unknown").await.unwrap(), None);
}
